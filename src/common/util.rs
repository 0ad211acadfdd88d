//! Auxiliary functions.

use crate::defs::Word;

/// Quotient of `a / b` rounded toward zero.
/// `b` must not be zero.
#[inline]
pub fn truncating_div(a: f64, b: f64) -> Word {
    debug_assert!(b != 0.0);
    let x = a / b;
    if x >= 0.0 {
        x.floor() as Word
    } else {
        x.ceil() as Word
    }
}

/// Fractional part of `x` with the sign of `x`.
pub fn fract(x: f64) -> f64 {
    if x >= 0.0 {
        x - x.floor()
    } else {
        x - x.ceil()
    }
}

/// `b^e mod m` by square-and-multiply.
pub fn pow_mod(b: u64, mut e: u64, m: u64) -> u64 {
    debug_assert!(m > 0);
    if m == 1 {
        return 0;
    }
    let m = m as u128;
    let mut b = b as u128 % m;
    let mut ret = 1u128;
    while e > 0 {
        if e & 1 != 0 {
            ret = ret * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    ret as u64
}

/// `16^e mod m` through double precision arithmetic.
/// The result is exact only while `16^e` is a finite double.
#[inline]
pub fn pow_mod_f64(e: i32, m: f64) -> f64 {
    16f64.powi(e) % m
}
