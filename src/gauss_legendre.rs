//! π with the Gauss-Legendre algorithm in double precision.

use crate::defs::Error;
use crate::defs::MAX_DECIMAL_DIGITS;

/// State of the Gauss-Legendre iteration.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct GaussLegendreState {
    /// Arithmetic mean.
    pub a: f64,

    /// Geometric mean.
    pub b: f64,

    /// Correction accumulator.
    pub t: f64,

    /// Power of two.
    pub p: f64,
}

impl GaussLegendreState {
    /// Initial state: a = 1, b = 1/√2, t = 1/4, p = 1.
    pub fn new() -> Self {
        GaussLegendreState {
            a: 1.0,
            b: 1.0 / 2f64.sqrt(),
            t: 0.25,
            p: 1.0,
        }
    }

    /// Returns the next state. Every field of the result depends on the fields of `self` only.
    pub fn step(&self) -> Self {
        let a = (self.a + self.b) / 2.0;
        let d = self.a - a;

        GaussLegendreState {
            a,
            b: (self.a * self.b).sqrt(),
            t: self.t - self.p * d * d,
            p: 2.0 * self.p,
        }
    }

    /// Returns true if the means are at most `threshold` apart.
    pub fn is_converged(&self, threshold: f64) -> bool {
        (self.a - self.b).abs() <= threshold
    }

    /// Approximation of π for the state.
    pub fn pi(&self) -> f64 {
        let s = self.a + self.b;
        s * s / (4.0 * self.t)
    }

    /// Returns the sequence of states starting with `self`.
    pub fn iter(&self) -> impl Iterator<Item = GaussLegendreState> {
        core::iter::successors(Some(*self), |s| Some(s.step()))
    }
}

impl Default for GaussLegendreState {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes π to `n` decimal digits.
///
/// ## Errors
///
///  - PrecisionUnsupported: `n` is greater than 15. No iteration is performed.
///  - IterationLimit: the means did not converge within `max_iter` steps.
pub fn compute(n: usize, max_iter: usize) -> Result<f64, Error> {
    if n > MAX_DECIMAL_DIGITS {
        return Err(Error::PrecisionUnsupported(n));
    }

    let threshold = 10f64.powi(-(n as i32));

    GaussLegendreState::new()
        .iter()
        .take(max_iter.saturating_add(1))
        .find(|s| s.is_converged(threshold))
        .map(|s| s.pi())
        .ok_or(Error::IterationLimit(max_iter))
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::DEFAULT_MAX_ITERATIONS;
    use core::f64::consts::PI;

    #[test]
    fn test_compute() {
        for n in 0..=MAX_DECIMAL_DIGITS {
            let pi = compute(n, DEFAULT_MAX_ITERATIONS).unwrap();
            assert!((pi - PI).abs() < 10f64.powi(1 - n as i32));
        }

        // no iteration is needed
        let pi = compute(0, 0).unwrap();
        assert!((pi - 2.914213562373095).abs() < 1e-12);

        assert!((compute(15, DEFAULT_MAX_ITERATIONS).unwrap() - PI).abs() < 1e-14);
    }

    #[test]
    fn test_compute_rejected() {
        assert_eq!(
            compute(16, DEFAULT_MAX_ITERATIONS).unwrap_err(),
            Error::PrecisionUnsupported(16)
        );
        assert_eq!(
            compute(1000, 0).unwrap_err(),
            Error::PrecisionUnsupported(1000)
        );
    }

    #[test]
    fn test_iteration_limit() {
        assert_eq!(compute(10, 1).unwrap_err(), Error::IterationLimit(1));
        assert_eq!(compute(10, 3).unwrap(), compute(10, 64).unwrap());

        // unbounded limit
        assert_eq!(compute(10, usize::MAX).unwrap(), compute(10, 64).unwrap());
    }

    #[test]
    fn test_step() {
        let s0 = GaussLegendreState::new();
        let s1 = s0.step();

        assert_eq!(s1.a, (1.0 + s0.b) / 2.0);
        assert_eq!(s1.b, s0.b.sqrt());
        assert_eq!(s1.t, 0.25 - (1.0 - s1.a) * (1.0 - s1.a));
        assert_eq!(s1.p, 2.0);

        // step does not modify the source state
        assert_eq!(s0, GaussLegendreState::default());

        let states: Vec<GaussLegendreState> = s0.iter().take(5).collect();
        assert_eq!(states[0], s0);
        assert_eq!(states[1], s1);
        assert_eq!(states[4].p, 16.0);
        assert!(states.windows(2).all(|w| (w[1].a - w[1].b).abs() <= (w[0].a - w[0].b).abs()));
    }
}
