//! Flowchart links
//!
//! The arrow token is assembled from three parts: an optional tail
//! marker, the line body for the link shape, and an optional head marker.
//! Extra length extends the body by one line character per step.

use std::str::FromStr;

use super::NodeId;
use crate::core::{bare_label, DiagramError};

/// Line style of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LinkShape {
    /// Solid line: `--`
    #[default]
    Open,
    /// Dotted line: `-.-`
    Dotted,
    /// Thick line: `==`
    Thick,
    /// Invisible link: `~~~`
    Invisible,
}

impl FromStr for LinkShape {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" | "solid" => Ok(LinkShape::Open),
            "dotted" => Ok(LinkShape::Dotted),
            "thick" => Ok(LinkShape::Thick),
            "invisible" => Ok(LinkShape::Invisible),
            _ => Err(DiagramError::unknown_variant("link shape", s)),
        }
    }
}

/// Marker drawn at either end of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LinkArrowType {
    #[default]
    None,
    Arrow,
    LeftArrow,
    Bullet,
    Cross,
}

impl LinkArrowType {
    /// Marker text at the target end
    pub fn head_marker(&self) -> &'static str {
        match self {
            LinkArrowType::None => "",
            LinkArrowType::Arrow | LinkArrowType::LeftArrow => ">",
            LinkArrowType::Bullet => "o",
            LinkArrowType::Cross => "x",
        }
    }

    /// Marker text at the source end
    pub fn tail_marker(&self) -> &'static str {
        match self {
            LinkArrowType::None => "",
            LinkArrowType::Arrow | LinkArrowType::LeftArrow => "<",
            LinkArrowType::Bullet => "o",
            LinkArrowType::Cross => "x",
        }
    }
}

impl FromStr for LinkArrowType {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LinkArrowType::None),
            "arrow" => Ok(LinkArrowType::Arrow),
            "left-arrow" | "leftarrow" => Ok(LinkArrowType::LeftArrow),
            "bullet" | "circle" => Ok(LinkArrowType::Bullet),
            "cross" => Ok(LinkArrowType::Cross),
            _ => Err(DiagramError::unknown_variant("arrow type", s)),
        }
    }
}

/// A directed edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    from: NodeId,
    to: NodeId,
    shape: LinkShape,
    head: LinkArrowType,
    tail: LinkArrowType,
    length: usize,
    text: Option<String>,
}

impl Link {
    /// Create an open link with an arrow head
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self {
            from,
            to,
            shape: LinkShape::Open,
            head: LinkArrowType::Arrow,
            tail: LinkArrowType::None,
            length: 0,
            text: None,
        }
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn shape(&self) -> LinkShape {
        self.shape
    }

    pub fn head(&self) -> LinkArrowType {
        self.head
    }

    pub fn tail(&self) -> LinkArrowType {
        self.tail
    }

    /// Extra length beyond the shortest link
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_shape(&mut self, shape: LinkShape) -> &mut Self {
        self.shape = shape;
        self
    }

    pub fn set_head(&mut self, head: LinkArrowType) -> &mut Self {
        self.head = head;
        self
    }

    pub fn set_tail(&mut self, tail: LinkArrowType) -> &mut Self {
        self.tail = tail;
        self
    }

    pub fn set_length(&mut self, length: usize) -> &mut Self {
        self.length = length;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// The arrow token between the two node ids, e.g. `-->` or `<-.->`
    pub fn arrow(&self) -> String {
        let extra = self.length;
        let head = self.head.head_marker();
        let tail = self.tail.tail_marker();

        // Without a head marker the last body character closes the token
        let closing = usize::from(head.is_empty());
        let body = match self.shape {
            LinkShape::Invisible => return "~".repeat(3 + extra),
            LinkShape::Open => "-".repeat(2 + extra + closing),
            LinkShape::Thick => "=".repeat(2 + extra + closing),
            LinkShape::Dotted => format!("-{}-", ".".repeat(1 + extra)),
        };
        format!("{}{}{}", tail, body, head)
    }

    /// Render the link statement
    pub fn render(&self, indent: &str) -> String {
        match self.text.as_deref().filter(|text| !text.is_empty()) {
            Some(text) => format!(
                "{}{} {}|{}| {}\n",
                indent,
                self.from,
                self.arrow(),
                bare_label(text),
                self.to
            ),
            None => format!("{}{} {} {}\n", indent, self.from, self.arrow(), self.to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> Link {
        Link::new(NodeId::new(0), NodeId::new(1))
    }

    #[test]
    fn test_default_link() {
        let link = link();
        assert_eq!(link.shape(), LinkShape::Open);
        assert_eq!(link.head(), LinkArrowType::Arrow);
        assert_eq!(link.tail(), LinkArrowType::None);
        assert_eq!(link.length(), 0);
        assert_eq!(link.render(""), "0 --> 1\n");
    }

    #[test]
    fn test_arrow_shapes() {
        let mut link = link();
        assert_eq!(link.set_shape(LinkShape::Dotted).arrow(), "-.->");
        assert_eq!(link.set_shape(LinkShape::Thick).arrow(), "==>");
        assert_eq!(link.set_shape(LinkShape::Invisible).arrow(), "~~~");
    }

    #[test]
    fn test_arrow_without_head() {
        let mut link = link();
        link.set_head(LinkArrowType::None);
        assert_eq!(link.arrow(), "---");
        assert_eq!(link.set_shape(LinkShape::Dotted).arrow(), "-.-");
        assert_eq!(link.set_shape(LinkShape::Thick).arrow(), "===");
    }

    #[test]
    fn test_arrow_markers() {
        let mut link = link();
        link.set_tail(LinkArrowType::Arrow);
        assert_eq!(link.arrow(), "<-->");
        link.set_head(LinkArrowType::Bullet).set_tail(LinkArrowType::Bullet);
        assert_eq!(link.arrow(), "o--o");
        link.set_head(LinkArrowType::Cross).set_tail(LinkArrowType::None);
        assert_eq!(link.arrow(), "--x");
        link.set_head(LinkArrowType::LeftArrow).set_tail(LinkArrowType::LeftArrow);
        assert_eq!(link.arrow(), "<-->");
    }

    #[test]
    fn test_arrow_length() {
        let mut link = link();
        link.set_length(2);
        assert_eq!(link.arrow(), "---->");
        assert_eq!(link.set_shape(LinkShape::Dotted).arrow(), "-...->");
        assert_eq!(link.set_shape(LinkShape::Thick).arrow(), "====>");
        assert_eq!(link.set_shape(LinkShape::Invisible).arrow(), "~~~~~");
        link.set_shape(LinkShape::Open).set_head(LinkArrowType::None);
        assert_eq!(link.arrow(), "-----");
    }

    #[test]
    fn test_invisible_ignores_markers() {
        let mut link = link();
        link.set_shape(LinkShape::Invisible).set_tail(LinkArrowType::Cross);
        assert_eq!(link.render(""), "0 ~~~ 1\n");
    }

    #[test]
    fn test_render_with_text() {
        let mut link = link();
        link.set_text("yes");
        assert_eq!(link.render("    "), "    0 -->|yes| 1\n");
        link.set_text("a|b");
        assert_eq!(link.render(""), "0 -->|\"a|b\"| 1\n");
    }

    #[test]
    fn test_empty_text_is_omitted() {
        let mut link = link();
        link.set_text("");
        assert_eq!(link.render(""), "0 --> 1\n");
    }

    #[test]
    fn test_parse_link_enums() {
        assert_eq!("dotted".parse::<LinkShape>().unwrap(), LinkShape::Dotted);
        assert_eq!("Thick".parse::<LinkShape>().unwrap(), LinkShape::Thick);
        assert!("wavy".parse::<LinkShape>().is_err());
        assert_eq!(
            "left-arrow".parse::<LinkArrowType>().unwrap(),
            LinkArrowType::LeftArrow
        );
        assert_eq!("circle".parse::<LinkArrowType>().unwrap(), LinkArrowType::Bullet);
        assert!("diamond".parse::<LinkArrowType>().is_err());
    }
}
