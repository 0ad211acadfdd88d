//! Digits of π computed two ways.
//!
//! - [`compute_digit`] extracts the hexadecimal digit of π at a given position with the
//!   Bailey–Borwein–Plouffe formula, without computing the preceding digits.
//!   The sum is evaluated in fixed-point arithmetic with 14 hexadecimal digits of working precision,
//!   so the result is a [`HexWindow`]: the requested digit followed by the next 13 digits.
//! - [`compute_pi`] approximates π to `n` decimal digits with the Gauss-Legendre algorithm in double precision.
//!   Values of `n` greater than 15 are rejected, since a double can not resolve more digits.
//!
//! The working precision, the way modular powers are computed, and the iteration limit can be changed with a [`Context`].
//!
//! ## Examples
//!
//! ```
//! use pidigits::{compute_digit, compute_pi, Error, Scale};
//!
//! let w = compute_digit(1)?;
//! assert_eq!(w.leading_digit(), 2);
//! assert!(w.to_hex_string().starts_with("243f6a88"));
//!
//! // the window at position 1 is the fractional part of π
//! assert!((w.to_f64() - (core::f64::consts::PI - 3.0)).abs() < 1e-9);
//! assert_eq!(w.value() as f64 / Scale::new(14)?.modulus() as f64, w.to_f64());
//!
//! let pi = compute_pi(10)?;
//! assert!((pi - core::f64::consts::PI).abs() < 1e-9);
//!
//! assert_eq!(compute_pi(16), Err(Error::PrecisionUnsupported(16)));
//! # Ok::<(), pidigits::Error>(())
//! ```
//!
//! ## Precision
//!
//! By default `16^e mod r` is computed with double precision `powi` and `%`, which is exact only while `16^e` is finite,
//! i.e. for positions up to 256. Use [`PowMode::Exact`] for positions past that.

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod bbp;
mod common;
pub mod ctx;
mod defs;
mod for_3rd;
mod gauss_legendre;
pub mod parser;
mod report;
mod scale;
mod window;

pub use crate::bbp::head_sum;
pub use crate::bbp::partial_sum;
pub use crate::bbp::tail_sum;
pub use crate::bbp::RightSeries;
pub use crate::common::util::fract;
pub use crate::common::util::truncating_div;
pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::PowMode;
pub use crate::defs::Word;
pub use crate::defs::DEFAULT_DIGITS;
pub use crate::defs::DEFAULT_MAX_ITERATIONS;
pub use crate::defs::MAX_DECIMAL_DIGITS;
pub use crate::defs::MAX_DIGITS;
pub use crate::gauss_legendre::GaussLegendreState;
pub use crate::report::Report;
pub use crate::scale::Scale;
pub use crate::window::Digits;
pub use crate::window::HexWindow;

/// Returns the window of hexadecimal digits of π starting at 1-based `position`,
/// using the default context.
///
/// ## Errors
///
///  - InvalidArgument: `position` is zero.
pub fn compute_digit(position: usize) -> Result<HexWindow, Error> {
    Context::new().bbp(position)
}

/// Computes π to `n` decimal digits with the Gauss-Legendre algorithm, using the default context.
///
/// ## Errors
///
///  - PrecisionUnsupported: `n` is greater than 15.
///  - IterationLimit: no convergence within the default number of iterations.
pub fn compute_pi(n: usize) -> Result<f64, Error> {
    Context::new().gauss_legendre(n)
}

#[cfg(test)]
mod tests {

    #[test]
    fn test_pidigits() {
        use crate::compute_digit;
        use crate::compute_pi;
        use crate::Error;
        use core::f64::consts::PI;

        // π = 3.243F6A8885A308D3... in hexadecimal
        let expected = "243f6a8885a308d313198a2e03707344";
        for (i, c) in expected.chars().enumerate() {
            let w = compute_digit(i + 1).unwrap();
            assert_eq!(
                Some(w.leading_digit() as u32),
                c.to_digit(16),
                "position {}",
                i + 1
            );
        }

        assert_eq!(compute_digit(0).unwrap_err(), Error::InvalidArgument);

        for n in 0..=15 {
            let pi = compute_pi(n).unwrap();
            assert!((pi - PI).abs() < 10f64.powi(1 - n as i32));
        }

        assert_eq!(compute_pi(16).unwrap_err(), Error::PrecisionUnsupported(16));
    }
}
