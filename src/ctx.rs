//! All computations are performed in some context.

use crate::bbp;
use crate::common::consts::DEFAULT_SCALE;
use crate::defs::Error;
use crate::defs::PowMode;
use crate::defs::DEFAULT_MAX_ITERATIONS;
use crate::gauss_legendre;
use crate::report::Report;
use crate::scale::Scale;
use crate::window::HexWindow;

/// Context contains the parameters shared by both algorithms.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Context {
    scale: Scale,
    pow_mode: PowMode,
    max_iter: usize,
}

impl Context {
    /// Create a new context with default parameters.
    pub fn new() -> Self {
        Context {
            scale: *DEFAULT_SCALE,
            pow_mode: PowMode::Float,
            max_iter: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the fixed-point scale of the BBP summation.
    pub fn scale(&mut self, scale: Scale) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Sets the way modular powers are computed.
    pub fn pow_mode(&mut self, pow_mode: PowMode) -> &mut Self {
        self.pow_mode = pow_mode;
        self
    }

    /// Sets the maximum number of Gauss-Legendre iterations.
    pub fn max_iterations(&mut self, max_iter: usize) -> &mut Self {
        self.max_iter = max_iter;
        self
    }

    /// Returns the fixed-point scale.
    pub fn get_scale(&self) -> Scale {
        self.scale
    }

    /// Returns the modular power mode.
    pub fn get_pow_mode(&self) -> PowMode {
        self.pow_mode
    }

    /// Returns the maximum number of Gauss-Legendre iterations.
    pub fn get_max_iterations(&self) -> usize {
        self.max_iter
    }

    /// Returns the window of hexadecimal digits of π starting at 1-based `position`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `position` is zero.
    pub fn bbp(&self, position: usize) -> Result<HexWindow, Error> {
        bbp::extract(&self.scale, position, self.pow_mode)
    }

    /// Returns `count` hexadecimal digits of π starting at 1-based `position`.
    /// Only the digits of each window unaffected by rounding are used.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `position` is zero.
    pub fn hex_digits(&self, position: usize, count: usize) -> Result<String, Error> {
        if position == 0 {
            return Err(Error::InvalidArgument);
        }

        let step = self.scale.trusted_digits();
        let mut ret = String::with_capacity(count + step);
        let mut p = position;

        while ret.len() < count {
            let w = self.bbp(p)?;
            ret.push_str(&w.to_hex_prefix(step.min(count - ret.len())));
            p += step;
        }

        Ok(ret)
    }

    /// Computes π to `n` decimal digits with the Gauss-Legendre algorithm.
    ///
    /// ## Errors
    ///
    ///  - PrecisionUnsupported: `n` is greater than 15.
    ///  - IterationLimit: no convergence within the maximum number of iterations.
    pub fn gauss_legendre(&self, n: usize) -> Result<f64, Error> {
        gauss_legendre::compute(n, self.max_iter)
    }

    /// Runs both algorithms for `n`.
    /// `n` is the digit position for BBP and the number of decimal digits for Gauss-Legendre.
    pub fn report(&self, n: i32) -> Report {
        let bbp = usize::try_from(n)
            .map_err(|_| Error::InvalidArgument)
            .and_then(|p| self.bbp(p));

        // 10^(-n) >= 1 for n <= 0: the iteration stops before the first step
        let gauss_legendre = self.gauss_legendre(n.max(0) as usize);

        Report::new(n, bbp, gauss_legendre)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
