//! Serialization of HexWindow and Report.
//! A window is serialized as a string of hexadecimal digits with leading zeros.

use crate::report::Report;
use crate::window::HexWindow;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

impl Serialize for HexWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Report", 3)?;
        s.serialize_field("n", &self.n())?;
        s.serialize_field("bbp", &self.bbp().ok())?;
        s.serialize_field("gauss_legendre", &self.gauss_legendre().ok())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::defs::Error;
    use crate::report::Report;
    use crate::window::HexWindow;

    #[test]
    fn to_json() {
        assert_eq!(
            to_string(&HexWindow::new(0x0d313198a2e037, 14)).unwrap(),
            "\"0d313198a2e037\""
        );

        let r = Report::new(
            20,
            Ok(HexWindow::new(0xa2, 2)),
            Err(Error::PrecisionUnsupported(20)),
        );
        assert_eq!(
            to_string(&r).unwrap(),
            "{\"n\":20,\"bbp\":\"a2\",\"gauss_legendre\":null}"
        );

        let r = Report::new(0, Err(Error::InvalidArgument), Ok(0.5));
        assert_eq!(
            to_string(&r).unwrap(),
            "{\"n\":0,\"bbp\":null,\"gauss_legendre\":0.5}"
        );
    }
}
