//! Flowchart diagram plugin
//!
//! Builds `flowchart` documents from nodes, links, subgraphs and style
//! classes.
//!
//! ```text
//! flowchart LR
//! 0@{ shape: rect, label: "Start"}
//! 1@{ shape: diam, label: "Ok?"}
//! 0 --> 1
//! ```

mod class;
mod config;
mod diagram;
mod link;
mod node;
mod subgraph;

pub use class::{Class, NodeStyle};
pub use config::{CurveStyle, FlowchartKey};
pub use diagram::Flowchart;
pub use link::{Link, LinkArrowType, LinkShape};
pub use node::{Node, NodeId, NodeShape};
pub use subgraph::{Subgraph, SubgraphId};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::core::Diagram;

    #[test]
    fn test_documented_example() {
        let mut flowchart = Flowchart::new();
        flowchart.set_direction(crate::core::Direction::LeftRight);
        let start = flowchart.add_node("Start").id();
        let check = flowchart
            .add_node("Ok?")
            .set_shape(NodeShape::Decision)
            .id();
        flowchart.add_link(start, check);

        assert_eq!(
            flowchart.render(),
            "flowchart LR\n0@{ shape: rect, label: \"Start\"}\n1@{ shape: diam, label: \"Ok?\"}\n0 --> 1\n"
        );
    }
}
