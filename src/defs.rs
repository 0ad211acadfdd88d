//! Definitions.

use core::fmt::Display;

/// Fixed-point word. Holds a window of hexadecimal digits scaled by `16^D`.
pub type Word = i64;

/// Doubled word. Used where a shifted value can exceed the width of a word.
pub type DoubleWord = i128;

/// Default number of hexadecimal digits of working precision.
pub const DEFAULT_DIGITS: usize = 14;

/// Maximum number of hexadecimal digits of working precision.
/// Four times a partial sum must still fit into a `Word`.
pub const MAX_DIGITS: usize = 15;

/// The largest number of decimal digits the Gauss-Legendre iteration can resolve in `f64`.
pub const MAX_DECIMAL_DIGITS: usize = 15;

/// Default limit of Gauss-Legendre iterations.
pub const DEFAULT_MAX_ITERATIONS: usize = 64;

/// Base of the digits extracted by the BBP formula.
pub const HEX_RADIX: u32 = 16;

/// Bits per hexadecimal digit.
pub const HEX_DIGIT_BITS: usize = 4;

/// Method of computing `16^e mod r` in the finite part of the BBP sum.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Default)]
pub enum PowMode {
    /// Floating point `powi` followed by `%`.
    /// Exact while `16^e` is a finite double, i.e. for `e <= 255`.
    #[default]
    Float,

    /// Binary exponentiation over integers.
    Exact,
}

/// Possible errors.
#[derive(Debug, Clone, Copy)]
pub enum Error {
    /// The input can not be parsed as an integer.
    InvalidInput,

    /// Digit position or working precision is out of range.
    InvalidArgument,

    /// More decimal digits were requested than a double can represent.
    PrecisionUnsupported(usize),

    /// Iteration has not converged within the given number of steps.
    IterationLimit(usize),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidInput => f.write_str("Invalid number."),
            Error::InvalidArgument => f.write_str("invalid argument"),
            Error::PrecisionUnsupported(_) => write!(
                f,
                "Gauss-Legendre cannot be used with n > {}",
                MAX_DECIMAL_DIGITS
            ),
            Error::IterationLimit(k) => write!(f, "no convergence after {} iterations", k),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::PrecisionUnsupported(l0), Self::PrecisionUnsupported(r0)) => l0 == r0,
            (Self::IterationLimit(l0), Self::IterationLimit(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}
