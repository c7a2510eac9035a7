//! Subgraphs grouping existing nodes

use std::fmt;

use super::NodeId;
use crate::core::{bare_label, Direction, INDENT};

/// Identifier allocated to a subgraph, drawn from the node sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubgraphId(u64);

impl SubgraphId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubgraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled group of nodes
///
/// Nodes are declared at the top level of the flowchart; the subgraph
/// only lists member ids, which places those nodes inside its border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    id: SubgraphId,
    title: String,
    direction: Option<Direction>,
    members: Vec<NodeId>,
}

impl Subgraph {
    pub fn new(id: SubgraphId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            direction: None,
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> SubgraphId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Override the flow direction inside this subgraph
    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    /// Add a node to the group. Adding the same node twice is a no-op.
    pub fn add_node(&mut self, node: NodeId) -> &mut Self {
        if !self.members.contains(&node) {
            self.members.push(node);
        }
        self
    }

    /// Render the `subgraph ... end` block
    pub fn render(&self, indent: &str) -> String {
        let mut out = format!(
            "{}subgraph {} [{}]\n",
            indent,
            self.id,
            bare_label(&self.title)
        );
        if let Some(direction) = self.direction {
            out.push_str(&format!("{}{}direction {}\n", indent, INDENT, direction));
        }
        for member in &self.members {
            out.push_str(&format!("{}{}{}\n", indent, INDENT, member));
        }
        out.push_str(&format!("{}end\n", indent));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        let subgraph = Subgraph::new(SubgraphId::new(2), "My Subgraph");
        assert_eq!(subgraph.render(""), "subgraph 2 [My Subgraph]\nend\n");
    }

    #[test]
    fn test_render_members_and_direction() {
        let mut subgraph = Subgraph::new(SubgraphId::new(5), "Backend");
        subgraph
            .set_direction(Direction::LeftRight)
            .add_node(NodeId::new(0))
            .add_node(NodeId::new(3))
            .add_node(NodeId::new(0));
        assert_eq!(
            subgraph.render(""),
            "subgraph 5 [Backend]\n    direction LR\n    0\n    3\nend\n"
        );
    }

    #[test]
    fn test_render_quotes_special_title() {
        let subgraph = Subgraph::new(SubgraphId::new(0), "API [v2]");
        assert_eq!(subgraph.render(""), "subgraph 0 [\"API [v2]\"]\nend\n");
    }
}
