//! Window of hexadecimal digits.

use crate::defs::Error;
use crate::defs::HEX_DIGIT_BITS;
use crate::defs::HEX_RADIX;
use crate::defs::MAX_DIGITS;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::LowerHex;
use itertools::Itertools;
use smallvec::SmallVec;

/// Digits of a window, most significant first.
pub type Digits = SmallVec<[u8; 16]>;

/// A fixed-point fraction `value / 16^width` whose hexadecimal digits are digits of π.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct HexWindow {
    value: u64,
    width: usize,
}

impl HexWindow {
    /// Creates a window of `width` digits. Digits of `value` above `width` are discarded.
    pub fn new(value: u64, width: usize) -> Self {
        debug_assert!(width > 0 && width <= MAX_DIGITS);
        let mask = (1u64 << (width * HEX_DIGIT_BITS)) - 1;
        HexWindow {
            value: value & mask,
            width,
        }
    }

    /// Parses a window from a string of hexadecimal digits. The width is the length of the string.
    ///
    /// ## Errors
    ///
    ///  - InvalidInput: `s` is empty, too long, or contains a non-hexadecimal character.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() || s.len() > MAX_DIGITS {
            return Err(Error::InvalidInput);
        }

        let mut value = 0u64;
        for c in s.chars() {
            let d = c.to_digit(HEX_RADIX).ok_or(Error::InvalidInput)?;
            value = (value << HEX_DIGIT_BITS) | d as u64;
        }

        Ok(Self::new(value, s.len()))
    }

    /// Returns the fixed-point value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the number of digits in the window.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns digit `i`, where digit 0 is the most significant one.
    pub fn digit(&self, i: usize) -> Option<u8> {
        if i >= self.width {
            return None;
        }
        let shift = (self.width - 1 - i) * HEX_DIGIT_BITS;
        Some(((self.value >> shift) & 0xf) as u8)
    }

    /// Returns the digit at the position the window was computed for.
    pub fn leading_digit(&self) -> u8 {
        self.digit(0).unwrap_or(0)
    }

    /// Returns all digits of the window.
    pub fn digits(&self) -> Digits {
        (0..self.width).filter_map(|i| self.digit(i)).collect()
    }

    /// Returns the value as a fraction of one.
    pub fn to_f64(&self) -> f64 {
        self.value as f64 / (1u64 << (self.width * HEX_DIGIT_BITS)) as f64
    }

    /// Formats the first `count` digits without padding.
    pub fn to_hex_prefix(&self, count: usize) -> String {
        self.digits()
            .iter()
            .take(count)
            .filter_map(|d| char::from_digit(*d as u32, HEX_RADIX))
            .join("")
    }

    /// Formats all digits, keeping leading zeros.
    pub fn to_hex_string(&self) -> String {
        self.to_hex_prefix(self.width)
    }
}

impl LowerHex for HexWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        LowerHex::fmt(&self.value, f)
    }
}

/// Right-aligned in a field as wide as the window, padded with spaces.
impl Display for HexWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:>width$x}", self.value, width = self.width)
    }
}
