//! Hexadecimal digits of π with the Bailey–Borwein–Plouffe formula.
//!
//! π = Σ 16^(-k) (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6)).
//! Multiplying by `16^n` and keeping the fractional part gives the digits starting at position `n + 1`.

use crate::defs::Error;
use crate::defs::PowMode;
use crate::defs::Word;
use crate::scale::Scale;
use crate::window::HexWindow;

/// Finite part of the partial sum: Σ_{k=0..n} (16^(n-k) mod (8k+j)) / (8k+j), in the fractional window.
pub fn head_sum(scale: &Scale, j: Word, n: usize, mode: PowMode) -> Word {
    (0..=n).fold(0, |sum, k| {
        let r = 8 * k as Word + j;
        scale.wrap(sum + scale.head_term(n - k, r, mode))
    })
}

/// Running totals of the convergent tail Σ_{k>n} 16^(n-k) / (8k+j).
///
/// Yields the raw total after every step which changes it.
/// Ends as soon as a term no longer moves the total at the working precision.
#[derive(Clone, Debug)]
pub struct RightSeries {
    scale: Scale,
    j: Word,
    n: usize,
    k: usize,
    total: Word,
    done: bool,
}

impl RightSeries {
    /// Creates the tail series of the partial sum for `j` at digit index `n`.
    pub fn new(scale: Scale, j: Word, n: usize) -> Self {
        RightSeries {
            scale,
            j,
            n,
            k: n + 1,
            total: 0,
            done: false,
        }
    }

    /// Returns the accumulated total.
    pub fn total(&self) -> Word {
        self.total
    }
}

impl Iterator for RightSeries {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let r = 8 * self.k as Word + self.j;
        let total = self.total + self.scale.tail_term(self.k - self.n, r);
        self.k += 1;

        if total == self.total {
            self.done = true;
            None
        } else {
            self.total = total;
            Some(total)
        }
    }
}

/// Infinite part of the partial sum.
pub fn tail_sum(scale: &Scale, j: Word, n: usize) -> Word {
    RightSeries::new(*scale, j, n).last().unwrap_or(0)
}

/// Partial sum `S(j, n)` scaled by `16^D`. The result is not wrapped.
pub fn partial_sum(scale: &Scale, j: Word, n: usize, mode: PowMode) -> Word {
    head_sum(scale, j, n, mode) + tail_sum(scale, j, n)
}

/// Returns the window of hexadecimal digits of π starting at 1-based `position`.
/// The leading digit of the window is the digit at `position`.
///
/// ## Errors
///
///  - InvalidArgument: `position` is zero.
pub fn extract(scale: &Scale, position: usize, mode: PowMode) -> Result<HexWindow, Error> {
    if position == 0 {
        return Err(Error::InvalidArgument);
    }

    let n = position - 1;

    let x = 4 * partial_sum(scale, 1, n, mode)
        - 2 * partial_sum(scale, 4, n, mode)
        - partial_sum(scale, 5, n, mode)
        - partial_sum(scale, 6, n, mode);

    Ok(HexWindow::new(scale.wrap(x) as u64, scale.digits()))
}
