//! Diagram kind implementations
//!
//! Each plugin provides the entity model and aggregate for one Mermaid.js
//! diagram kind, built on the shared pieces in [`crate::core`].

pub mod block;
pub mod flowchart;
pub mod state;

pub use block::*;
pub use flowchart::*;
pub use state::*;
