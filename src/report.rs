//! Outcome of both computations for one input.

use crate::defs::Error;
use crate::window::HexWindow;
use core::fmt::Display;
use core::fmt::Formatter;

/// Results of the BBP extraction and the Gauss-Legendre approximation for the same `n`.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Report {
    n: i32,
    bbp: Result<HexWindow, Error>,
    gauss_legendre: Result<f64, Error>,
}

impl Report {
    /// Creates a report.
    pub fn new(n: i32, bbp: Result<HexWindow, Error>, gauss_legendre: Result<f64, Error>) -> Self {
        Report {
            n,
            bbp,
            gauss_legendre,
        }
    }

    /// Returns the input.
    pub fn n(&self) -> i32 {
        self.n
    }

    /// Returns the result of digit extraction.
    pub fn bbp(&self) -> Result<HexWindow, Error> {
        self.bbp
    }

    /// Returns the Gauss-Legendre approximation.
    pub fn gauss_legendre(&self) -> Result<f64, Error> {
        self.gauss_legendre
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "n = {}", self.n)?;

        match &self.bbp {
            Ok(w) => writeln!(f, "BBP: {}", w)?,
            Err(e) => writeln!(f, "BBP: {}", e)?,
        }

        match &self.gauss_legendre {
            Ok(pi) => writeln!(f, "Gauss-Legendre: {:.6}", pi),
            Err(e) => writeln!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_display() {
        let r = Report::new(
            1,
            Ok(HexWindow::new(0x243f6a8885a30a, 14)),
            Ok(3.1405792505221686),
        );
        assert_eq!(
            r.to_string(),
            "n = 1\nBBP: 243f6a8885a30a\nGauss-Legendre: 3.140579\n"
        );

        let r = Report::new(
            17,
            Ok(HexWindow::new(0x0d313198a2e037, 14)),
            Err(Error::PrecisionUnsupported(17)),
        );
        assert_eq!(
            r.to_string(),
            "n = 17\nBBP:  d313198a2e037\nGauss-Legendre cannot be used with n > 15\n"
        );

        let r = Report::new(0, Err(Error::InvalidArgument), Ok(2.914213562373095));
        assert_eq!(
            r.to_string(),
            "n = 0\nBBP: invalid argument\nGauss-Legendre: 2.914214\n"
        );
    }
}
