//! Static constants.

use crate::defs::DEFAULT_DIGITS;
use crate::scale::Scale;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref DEFAULT_SCALE: Scale = Scale::new(DEFAULT_DIGITS).unwrap();
}
