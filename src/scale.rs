//! Fixed-point scale of the BBP summation.
//!
//! A value `v` stored with a scale of `D` hexadecimal digits represents the real number `v / 16^D`.

use crate::common::util::pow_mod;
use crate::common::util::pow_mod_f64;
use crate::common::util::truncating_div;
use crate::defs::DoubleWord;
use crate::defs::Error;
use crate::defs::PowMode;
use crate::defs::Word;
use crate::defs::HEX_DIGIT_BITS;
use crate::defs::MAX_DIGITS;

/// Hexadecimal digits lost to rounding of the `f64` divisions in a sum of a few thousand terms.
const GUARD_DIGITS: usize = 6;

/// Fixed-point configuration: the working precision and the values derived from it.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct Scale {
    digits: usize,
    m: Word,
    shift: usize,
    mask: Word,
}

impl Scale {
    /// Creates a scale with `digits` hexadecimal digits of working precision.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `digits` is zero or greater than 15.
    pub fn new(digits: usize) -> Result<Self, Error> {
        if digits == 0 || digits > MAX_DIGITS {
            return Err(Error::InvalidArgument);
        }

        let shift = digits * HEX_DIGIT_BITS;
        let m: Word = 1 << shift;

        Ok(Scale {
            digits,
            m,
            shift,
            mask: m - 1,
        })
    }

    /// Returns the number of hexadecimal digits of working precision.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Returns the scale factor `16^D`.
    pub fn modulus(&self) -> Word {
        self.m
    }

    /// Returns the number of bits in the fractional window.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Returns `16^D - 1`.
    pub fn mask(&self) -> Word {
        self.mask
    }

    /// Returns the number of leading digits of a window which are not affected by rounding.
    /// Scales narrower than 5 digits accumulate enough truncation error to spoil even the first digit.
    pub fn trusted_digits(&self) -> usize {
        self.digits.saturating_sub(GUARD_DIGITS).max(1)
    }

    /// Keeps the fractional window of `v`.
    #[inline]
    pub fn wrap(&self, v: Word) -> Word {
        v & self.mask
    }

    /// Term of the finite sum: `(16^e mod r) * 16^D / r`, truncated.
    pub fn head_term(&self, e: usize, r: Word, mode: PowMode) -> Word {
        debug_assert!(r > 0);

        let rem = match mode {
            PowMode::Float => {
                // NaN past the range of doubles, converts to 0
                pow_mod_f64(e.min(i32::MAX as usize) as i32, r as f64) as DoubleWord
            }
            PowMode::Exact => pow_mod(16, e as u64, r as u64) as DoubleWord,
        };

        truncating_div((rem << self.shift) as f64, r as f64)
    }

    /// Term of the infinite tail: `round(16^(-d) * 16^D) / r`, truncated.
    pub fn tail_term(&self, d: usize, r: Word) -> Word {
        debug_assert!(r > 0);

        let d = d.min(i32::MAX as usize) as i32;
        let xp = (16f64.powi(-d) * self.m as f64).round();

        truncating_div(xp, r as f64)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::DEFAULT_DIGITS;

    #[test]
    fn test_scale_new() {
        let s = Scale::new(DEFAULT_DIGITS).unwrap();
        assert_eq!(s.digits(), 14);
        assert_eq!(s.shift(), 56);
        assert_eq!(s.modulus(), 1 << 56);
        assert_eq!(s.mask(), 0x00ff_ffff_ffff_ffff);
        assert_eq!(s.trusted_digits(), 8);

        let s = Scale::new(1).unwrap();
        assert_eq!(s.modulus(), 16);
        assert_eq!(s.mask(), 15);
        assert_eq!(s.trusted_digits(), 1);

        assert!(Scale::new(MAX_DIGITS).is_ok());
        assert_eq!(Scale::new(0).unwrap_err(), Error::InvalidArgument);
        assert_eq!(Scale::new(MAX_DIGITS + 1).unwrap_err(), Error::InvalidArgument);
    }

    #[test]
    fn test_wrap() {
        let s = Scale::new(2).unwrap();
        assert_eq!(s.wrap(0x1ab), 0xab);
        assert_eq!(s.wrap(-1), 0xff);
    }

    #[test]
    fn test_head_term() {
        let s = Scale::new(DEFAULT_DIGITS).unwrap();

        // 16^0 mod 1 = 0
        assert_eq!(s.head_term(0, 1, PowMode::Float), 0);

        // 16^1 mod 3 = 1, 2^56 / 3 within the rounding of a double
        let t = s.head_term(1, 3, PowMode::Float);
        assert!((t - (1i64 << 56) / 3).abs() <= 8);

        // numerator exceeds 64 bits
        let r = 8 * 200 + 1;
        let rem = pow_mod(16, 50, r as u64) as i128;
        assert!(rem >= 256);
        let expected = ((rem << 56) / r as i128) as i64;
        let t = s.head_term(50, r, PowMode::Exact);
        assert!((t - expected).abs() <= 16);

        for e in 0..256 {
            for r in [9, 12, 13, 14, 801, 2045] {
                assert_eq!(
                    s.head_term(e, r, PowMode::Float),
                    s.head_term(e, r, PowMode::Exact)
                );
            }
        }
    }

    #[test]
    fn test_head_term_precision_ceiling() {
        let s = Scale::new(DEFAULT_DIGITS).unwrap();
        assert_eq!(s.head_term(300, 9, PowMode::Float), 0);
        assert_ne!(s.head_term(300, 9, PowMode::Exact), 0);
    }

    #[test]
    fn test_tail_term() {
        let s = Scale::new(DEFAULT_DIGITS).unwrap();
        assert_eq!(s.tail_term(1, 1), 1 << 52);
        assert_eq!(s.tail_term(1, 9), (1i64 << 52) / 9);
        assert_eq!(s.tail_term(DEFAULT_DIGITS, 9), 0);
        assert_eq!(s.tail_term(DEFAULT_DIGITS + 1, 1), 0);
    }
}
