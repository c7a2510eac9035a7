//! Block diagram plugin
//!
//! Builds `block-beta` documents: blocks laid out on a column grid, links
//! between them and blank spacer cells.
//!
//! ```text
//! block-beta
//! columns 3
//! 0["Frontend"]
//! space
//! 1["Backend"]
//! 0 --> 1
//! ```

mod cell;
mod config;
mod diagram;
mod link;

pub use cell::{Block, BlockId, BlockShape};
pub use config::BlockKey;
pub use diagram::BlockDiagram;
pub use link::BlockLink;
