//! Flowchart nodes and their shapes

use std::fmt;
use std::str::FromStr;

use crate::core::{escape_shape_label, DiagramError};

use super::NodeStyle;

/// Identifier allocated to a node by its flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named node shapes from the `@{ shape: ... }` syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NodeShape {
    /// Rectangle: `rect`
    #[default]
    Process,
    /// Rounded rectangle: `rounded`
    Event,
    /// Stadium: `stadium`
    Terminal,
    /// Framed rectangle: `fr-rect`
    Subprocess,
    /// Cylinder: `cyl`
    Database,
    /// Circle: `circle`
    Start,
    /// Asymmetric flag: `odd`
    Odd,
    /// Diamond: `diam`
    Decision,
    /// Hexagon: `hex`
    Prepare,
    /// Parallelogram leaning right: `lean-r`
    InOut,
    /// Parallelogram leaning left: `lean-l`
    OutIn,
    /// Trapezoid, wide base: `trap-b`
    PriorityAction,
    /// Trapezoid, wide top: `trap-t`
    ManualOperation,
    /// Double circle: `dbl-circ`
    Stop,
    /// Label only: `text`
    Text,
    /// Notched rectangle: `notch-rect`
    Card,
    /// Lined rectangle: `lin-rect`
    LinedProcess,
    /// Small circle: `sm-circ`
    SmallStart,
    /// Framed circle: `framed-circle`
    FramedStop,
    /// Filled bar: `fork`
    Fork,
    /// Hourglass: `hourglass`
    Collate,
    /// Left curly brace: `brace`
    Comment,
    /// Right curly brace: `brace-r`
    CommentRight,
    /// Both braces: `braces`
    CommentBoth,
    /// Lightning bolt: `bolt`
    ComLink,
    /// Document: `doc`
    Document,
    /// Half-rounded rectangle: `delay`
    Delay,
    /// Horizontal cylinder: `das`
    DirectAccessStorage,
    /// Lined cylinder: `lin-cyl`
    DiskStorage,
    /// Curved trapezoid: `curv-trap`
    Display,
    /// Divided rectangle: `div-rect`
    DividedProcess,
    /// Triangle: `tri`
    Extract,
    /// Window pane: `win-pane`
    InternalStorage,
    /// Filled circle: `f-circ`
    Junction,
    /// Lined document: `lin-doc`
    LinedDocument,
    /// Notched pentagon: `notch-pent`
    LoopLimit,
    /// Flipped triangle: `flip-tri`
    ManualFile,
    /// Sloped rectangle: `sl-rect`
    ManualInput,
    /// Stacked documents: `docs`
    MultiDocument,
    /// Stacked rectangles: `st-rect`
    MultiProcess,
    /// Flag: `flag`
    PaperTape,
    /// Bow-tie rectangle: `bow-rect`
    StoredData,
    /// Crossed circle: `cross-circ`
    Summary,
    /// Tagged document: `tag-doc`
    TaggedDocument,
    /// Tagged rectangle: `tag-rect`
    TaggedProcess,
}

impl NodeShape {
    /// Short name used in the `shape:` attribute
    pub fn code(&self) -> &'static str {
        match self {
            NodeShape::Process => "rect",
            NodeShape::Event => "rounded",
            NodeShape::Terminal => "stadium",
            NodeShape::Subprocess => "fr-rect",
            NodeShape::Database => "cyl",
            NodeShape::Start => "circle",
            NodeShape::Odd => "odd",
            NodeShape::Decision => "diam",
            NodeShape::Prepare => "hex",
            NodeShape::InOut => "lean-r",
            NodeShape::OutIn => "lean-l",
            NodeShape::PriorityAction => "trap-b",
            NodeShape::ManualOperation => "trap-t",
            NodeShape::Stop => "dbl-circ",
            NodeShape::Text => "text",
            NodeShape::Card => "notch-rect",
            NodeShape::LinedProcess => "lin-rect",
            NodeShape::SmallStart => "sm-circ",
            NodeShape::FramedStop => "framed-circle",
            NodeShape::Fork => "fork",
            NodeShape::Collate => "hourglass",
            NodeShape::Comment => "brace",
            NodeShape::CommentRight => "brace-r",
            NodeShape::CommentBoth => "braces",
            NodeShape::ComLink => "bolt",
            NodeShape::Document => "doc",
            NodeShape::Delay => "delay",
            NodeShape::DirectAccessStorage => "das",
            NodeShape::DiskStorage => "lin-cyl",
            NodeShape::Display => "curv-trap",
            NodeShape::DividedProcess => "div-rect",
            NodeShape::Extract => "tri",
            NodeShape::InternalStorage => "win-pane",
            NodeShape::Junction => "f-circ",
            NodeShape::LinedDocument => "lin-doc",
            NodeShape::LoopLimit => "notch-pent",
            NodeShape::ManualFile => "flip-tri",
            NodeShape::ManualInput => "sl-rect",
            NodeShape::MultiDocument => "docs",
            NodeShape::MultiProcess => "st-rect",
            NodeShape::PaperTape => "flag",
            NodeShape::StoredData => "bow-rect",
            NodeShape::Summary => "cross-circ",
            NodeShape::TaggedDocument => "tag-doc",
            NodeShape::TaggedProcess => "tag-rect",
        }
    }

    pub fn all() -> &'static [NodeShape] {
        use NodeShape::*;
        &[
            Process,
            Event,
            Terminal,
            Subprocess,
            Database,
            Start,
            Odd,
            Decision,
            Prepare,
            InOut,
            OutIn,
            PriorityAction,
            ManualOperation,
            Stop,
            Text,
            Card,
            LinedProcess,
            SmallStart,
            FramedStop,
            Fork,
            Collate,
            Comment,
            CommentRight,
            CommentBoth,
            ComLink,
            Document,
            Delay,
            DirectAccessStorage,
            DiskStorage,
            Display,
            DividedProcess,
            Extract,
            InternalStorage,
            Junction,
            LinedDocument,
            LoopLimit,
            ManualFile,
            ManualInput,
            MultiDocument,
            MultiProcess,
            PaperTape,
            StoredData,
            Summary,
            TaggedDocument,
            TaggedProcess,
        ]
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for NodeShape {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_lowercase();
        NodeShape::all()
            .iter()
            .copied()
            .find(|shape| shape.code() == code)
            .ok_or_else(|| DiagramError::unknown_variant("node shape", s))
    }
}

/// A flowchart vertex
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    text: String,
    shape: NodeShape,
    class: Option<String>,
    style: Option<NodeStyle>,
}

impl Node {
    /// Create a process-shaped node
    pub fn new(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            shape: NodeShape::default(),
            class: None,
            style: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> NodeShape {
        self.shape
    }

    /// Name of the attached style class
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn style(&self) -> Option<&NodeStyle> {
        self.style.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_shape(&mut self, shape: NodeShape) -> &mut Self {
        self.shape = shape;
        self
    }

    /// Attach a style class by name
    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.class = Some(class.into());
        self
    }

    /// Set an inline style, emitted as a `style` statement
    pub fn set_style(&mut self, style: NodeStyle) -> &mut Self {
        self.style = Some(style);
        self
    }

    /// Render the declaration line plus any class and style statements
    pub fn render(&self, indent: &str) -> String {
        let mut out = format!(
            "{}{}@{{ shape: {}, label: \"{}\"}}\n",
            indent,
            self.id,
            self.shape,
            escape_shape_label(&self.text)
        );
        if let Some(class) = &self.class {
            out.push_str(&format!("{}class {} {}\n", indent, self.id, class));
        }
        if let Some(style) = self.style.as_ref().filter(|style| !style.is_empty()) {
            out.push_str(&format!("{}style {} {}\n", indent, self.id, style));
        }
        out
    }
}
