//! `npi` prints the hexadecimal digits of π at a position and a Gauss-Legendre approximation.
//!
//! **Usage:**
//! ```text
//! npi [--width <D>] [--exact] <n> [ignored...]
//! ```
//!
//! A missing or non-numeric `n` is reported, and the program still exits successfully.
//! Arguments after `n` are ignored.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pidigits::parser::parse_position;
use pidigits::{Context, PowMode, Scale, DEFAULT_DIGITS};

/// Compute digits of π with the BBP formula and the Gauss-Legendre algorithm.
#[derive(Parser, Debug)]
#[command(name = "npi", about = "Compute digits of pi with the BBP and Gauss-Legendre algorithms")]
struct Args {
    /// Digit position for BBP and number of decimal digits for Gauss-Legendre.
    /// Only the first value is used.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    n: Vec<String>,

    /// Hexadecimal digits of working precision of the BBP sum (1 to 15).
    #[arg(long, default_value_t = DEFAULT_DIGITS)]
    width: usize,

    /// Compute modular powers with integers instead of doubles.
    #[arg(long)]
    exact: bool,
}

/// Runs the driver and returns the exit status.
fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> std::io::Result<u8> {
    let Some(arg) = args.n.first() else {
        writeln!(out, "First argument must be a number.")?;
        return Ok(0);
    };

    let n = match parse_position(arg) {
        Ok(n) => n,
        Err(e) => {
            writeln!(err, "{}", e)?;
            return Ok(0);
        }
    };

    let scale = match Scale::new(args.width) {
        Ok(s) => s,
        Err(e) => {
            writeln!(err, "--width {}: {}", args.width, e)?;
            return Ok(1);
        }
    };

    let pow_mode = if args.exact {
        PowMode::Exact
    } else {
        PowMode::Float
    };

    let report = Context::new().scale(scale).pow_mode(pow_mode).report(n);
    write!(out, "{}", report)?;

    Ok(0)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args, &mut std::io::stdout(), &mut std::io::stderr()) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}
