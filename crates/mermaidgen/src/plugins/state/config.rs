//! State diagram configuration keys

use std::fmt;

use crate::core::PropertyKey;

/// Front-matter keys understood by state diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateKey {
    TitleTopMargin,
    Padding,
    NodeSpacing,
    RankSpacing,
    DefaultRenderer,
    UseMaxWidth,
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateKey::TitleTopMargin => "titleTopMargin",
            StateKey::Padding => "padding",
            StateKey::NodeSpacing => "nodeSpacing",
            StateKey::RankSpacing => "rankSpacing",
            StateKey::DefaultRenderer => "defaultRenderer",
            StateKey::UseMaxWidth => "useMaxWidth",
        };
        f.write_str(name)
    }
}

impl PropertyKey for StateKey {
    const SECTION: &'static str = "state";
}
