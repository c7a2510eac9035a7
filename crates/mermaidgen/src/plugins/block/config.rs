//! Block diagram configuration keys

use std::fmt;

use crate::core::PropertyKey;

/// Front-matter keys understood by block diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlockKey {
    Padding,
    UseMaxWidth,
}

impl fmt::Display for BlockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKey::Padding => write!(f, "padding"),
            BlockKey::UseMaxWidth => write!(f, "useMaxWidth"),
        }
    }
}

impl PropertyKey for BlockKey {
    const SECTION: &'static str = "block";
}
