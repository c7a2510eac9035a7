//! Links between blocks

use super::BlockId;
use crate::core::escape_label;

/// An edge between two blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLink {
    from: BlockId,
    to: BlockId,
    text: Option<String>,
}

impl BlockLink {
    pub fn new(from: BlockId, to: BlockId) -> Self {
        Self {
            from,
            to,
            text: None,
        }
    }

    pub fn from(&self) -> BlockId {
        self.from
    }

    pub fn to(&self) -> BlockId {
        self.to
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn render(&self, indent: &str) -> String {
        match self.text.as_deref().filter(|text| !text.is_empty()) {
            Some(text) => format!(
                "{}{} -- \"{}\" --> {}\n",
                indent,
                self.from,
                escape_label(text),
                self.to
            ),
            None => format!("{}{} --> {}\n", indent, self.from, self.to),
        }
    }
}
