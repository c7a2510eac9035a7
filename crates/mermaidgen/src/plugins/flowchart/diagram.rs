//! Flowchart aggregate
//!
//! Owns classes, nodes, subgraphs and links in insertion order and renders
//! them in that order, grouped by entity type.

use std::fmt;

use tracing::{debug, span, trace, Level};

use super::{Class, CurveStyle, FlowchartKey, Link, Node, NodeId, Subgraph, SubgraphId};
use crate::core::{
    BaseDiagram, ConfigurationProperties, Diagram, DiagramKind, Direction, IdGenerator,
    PropertyValue, SequentialIdGenerator, Theme,
};

/// A flowchart under construction
#[derive(Debug)]
pub struct Flowchart {
    base: BaseDiagram<FlowchartKey>,
    direction: Direction,
    id_generator: Box<dyn IdGenerator>,
    classes: Vec<Class>,
    nodes: Vec<Node>,
    subgraphs: Vec<Subgraph>,
    links: Vec<Link>,
}

impl Default for Flowchart {
    fn default() -> Self {
        Self::new()
    }
}

impl Flowchart {
    /// Create an empty top-to-bottom flowchart
    pub fn new() -> Self {
        Self::with_id_generator(SequentialIdGenerator::new())
    }

    /// Create an empty flowchart drawing ids from `generator`
    pub fn with_id_generator(generator: impl IdGenerator + 'static) -> Self {
        Self {
            base: BaseDiagram::new(),
            direction: Direction::default(),
            id_generator: Box::new(generator),
            classes: Vec::new(),
            nodes: Vec::new(),
            subgraphs: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Curve style read back from the `curve` property; `CurveStyle::None`
    /// when it is unset or holds a name outside [`CurveStyle::all`]
    pub fn curve_style(&self) -> CurveStyle {
        match self.base.properties().get(FlowchartKey::Curve) {
            Some(PropertyValue::Text(name)) => CurveStyle::all()
                .iter()
                .copied()
                .find(|style| style.name() == Some(name.as_str()))
                .unwrap_or_default(),
            _ => CurveStyle::None,
        }
    }

    /// Set the link curve style, stored as the `curve` front-matter property
    pub fn set_curve_style(&mut self, curve_style: CurveStyle) -> &mut Self {
        let properties = self.base.properties_mut();
        match curve_style.name() {
            Some(name) => properties.set(FlowchartKey::Curve, name),
            None => properties.unset(FlowchartKey::Curve),
        };
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.base.set_title(title);
        self
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.base.set_theme(theme);
        self
    }

    pub fn base(&self) -> &BaseDiagram<FlowchartKey> {
        &self.base
    }

    pub fn properties_mut(&mut self) -> &mut ConfigurationProperties<FlowchartKey> {
        self.base.properties_mut()
    }

    /// Add a style class
    pub fn add_class(&mut self, name: impl Into<String>) -> &mut Class {
        let class = Class::new(name);
        trace!(name = class.name(), "Added class");
        self.classes.push(class);
        let index = self.classes.len() - 1;
        &mut self.classes[index]
    }

    /// Add a process-shaped node with a freshly allocated id
    pub fn add_node(&mut self, text: impl Into<String>) -> &mut Node {
        let id = NodeId::new(self.id_generator.next_id());
        let node = Node::new(id, text);
        trace!(id = %id, text = node.text(), "Added node");
        self.nodes.push(node);
        let index = self.nodes.len() - 1;
        &mut self.nodes[index]
    }

    /// Add a subgraph; its id comes from the same sequence as node ids
    pub fn add_subgraph(&mut self, title: impl Into<String>) -> &mut Subgraph {
        let id = SubgraphId::new(self.id_generator.next_id());
        let subgraph = Subgraph::new(id, title);
        trace!(id = %id, title = subgraph.title(), "Added subgraph");
        self.subgraphs.push(subgraph);
        let index = self.subgraphs.len() - 1;
        &mut self.subgraphs[index]
    }

    /// Add a link between two nodes.
    ///
    /// The ids are not checked against this flowchart; an id from another
    /// diagram renders as-is.
    pub fn add_link(&mut self, from: NodeId, to: NodeId) -> &mut Link {
        trace!(from = %from, to = %to, "Added link");
        self.links.push(Link::new(from, to));
        let index = self.links.len() - 1;
        &mut self.links[index]
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn subgraphs(&self) -> &[Subgraph] {
        &self.subgraphs
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }

    pub fn subgraph_mut(&mut self, id: SubgraphId) -> Option<&mut Subgraph> {
        self.subgraphs.iter_mut().find(|subgraph| subgraph.id() == id)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut Class> {
        self.classes.iter_mut().find(|class| class.name() == name)
    }

    /// Links in insertion order, mutable
    pub fn links_mut(&mut self) -> &mut [Link] {
        &mut self.links
    }

    /// Render the body without front-matter
    pub fn body(&self) -> String {
        let mut out = format!("{} {}\n", DiagramKind::Flowchart.keyword(), self.direction);
        for class in &self.classes {
            out.push_str(&class.render(""));
        }
        for node in &self.nodes {
            out.push_str(&node.render(""));
        }
        for subgraph in &self.subgraphs {
            out.push_str(&subgraph.render(""));
        }
        for link in &self.links {
            out.push_str(&link.render(""));
        }
        out
    }
}

impl Diagram for Flowchart {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Flowchart
    }

    fn render(&self) -> String {
        let render_span = span!(
            Level::DEBUG,
            "render_flowchart",
            nodes = self.nodes.len(),
            links = self.links.len()
        );
        let _enter = render_span.enter();

        let text = self.base.wrap(&self.body());
        debug!(bytes = text.len(), "Rendered flowchart");
        text
    }
}

impl fmt::Display for Flowchart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
