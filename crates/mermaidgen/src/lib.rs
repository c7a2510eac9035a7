//! Mermaidgen - Build Mermaid.js diagram text from Rust
//!
//! A library for assembling flowcharts, block diagrams and state diagrams
//! through a typed builder API and serializing them to Mermaid notation.
//!
//! # Quick Start
//!
//! ```rust
//! use mermaidgen::prelude::*;
//!
//! let mut flowchart = Flowchart::new();
//! let a = flowchart.add_node("My Node 1").id();
//! let b = flowchart.add_node("My Node 2").id();
//! flowchart.add_link(a, b);
//!
//! let text = flowchart.render();
//! assert!(text.starts_with("flowchart TB\n"));
//! assert!(text.contains("0@{ shape: rect, label: \"My Node 1\"}"));
//! assert!(text.contains("0 --> 1"));
//! ```
//!
//! # Diagram Kinds
//!
//! ```rust
//! use mermaidgen::prelude::*;
//!
//! let mut blocks = BlockDiagram::new();
//! blocks.set_columns(2);
//! let api = blocks.add_block("API").id();
//! let db = blocks.add_block("Database").set_shape(BlockShape::Cylinder).id();
//! blocks.add_link(api, db);
//! assert!(blocks.render().starts_with("block-beta\ncolumns 2\n"));
//!
//! let mut machine = StateDiagram::new();
//! machine.add_state("start", "", StateType::Start);
//! machine.add_state("Idle", "", StateType::Simple);
//! machine.add_transition("start", "Idle", "");
//! assert!(machine.render().contains("[*] --> Idle"));
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ConfigurationProperties, Diagram, DiagramError, DiagramKind, Direction, IdGenerator,
        PropertyValue, SequentialIdGenerator, Theme,
    };
    pub use crate::plugins::block::{Block, BlockDiagram, BlockId, BlockKey, BlockShape};
    pub use crate::plugins::flowchart::{
        CurveStyle, Flowchart, FlowchartKey, LinkArrowType, LinkShape, NodeId, NodeShape,
        NodeStyle, SubgraphId,
    };
    pub use crate::plugins::state::{NotePosition, StateDiagram, StateId, StateKey, StateType};
}

/// Build an empty diagram of the given kind, boxed behind [`Diagram`]
///
/// # Example
/// ```rust
/// use mermaidgen::{new_diagram, DiagramKind};
///
/// let diagram = new_diagram(DiagramKind::Block);
/// assert_eq!(diagram.render(), "block-beta\n");
/// ```
pub fn new_diagram(kind: DiagramKind) -> Box<dyn Diagram> {
    match kind {
        DiagramKind::Flowchart => Box::new(plugins::flowchart::Flowchart::new()),
        DiagramKind::Block => Box::new(plugins::block::BlockDiagram::new()),
        DiagramKind::State => Box::new(plugins::state::StateDiagram::new()),
    }
}
