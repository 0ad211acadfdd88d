//! Deserialization of HexWindow.

use core::fmt::Formatter;

use crate::window::HexWindow;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct HexWindowVisitor {}

impl<'de> Deserialize<'de> for HexWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexWindowVisitor {})
    }
}

impl<'de> Visitor<'de> for HexWindowVisitor {
    type Value = HexWindow;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "a string of 1 to 15 hexadecimal digits")
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        HexWindow::parse(v).map_err(|e| Error::custom(format!("{e:?}")))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
