//! Parser of the command line input.

use crate::defs::Error;

/// Parses a signed 32-bit decimal integer with an optional leading `+` or `-`.
///
/// ## Errors
///
///  - InvalidInput: `s` is not an integer or does not fit into 32 bits.
pub fn parse_position(s: &str) -> Result<i32, Error> {
    s.parse::<i32>().map_err(|_| Error::InvalidInput)
}
