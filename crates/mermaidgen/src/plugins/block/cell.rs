//! Blocks: labelled cells in a block layout

use std::fmt;
use std::str::FromStr;

use crate::core::{escape_label, DiagramError};

/// Handle to a block, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(usize);

impl BlockId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outline of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BlockShape {
    /// `id["label"]`
    #[default]
    Square,
    /// `id("label")`
    Round,
    /// `id(["label"])`
    Stadium,
    /// `id[["label"]]`
    Subroutine,
    /// `id[("label")]`
    Cylinder,
    /// `id(("label"))`
    Circle,
    /// `id>"label"]`
    Asymmetric,
    /// `id{"label"}`
    Rhombus,
    /// `id{{"label"}}`
    Hexagon,
    /// `id((("label")))`
    DoubleCircle,
    /// `id[/"label"/]`
    Parallelogram,
    /// `id[\"label"\]`
    ParallelogramAlt,
    /// `id[/"label"\]`
    Trapezoid,
    /// `id[\"label"/]`
    TrapezoidAlt,
}

impl BlockShape {
    /// Opening and closing delimiters around the quoted label
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            BlockShape::Square => ("[", "]"),
            BlockShape::Round => ("(", ")"),
            BlockShape::Stadium => ("([", "])"),
            BlockShape::Subroutine => ("[[", "]]"),
            BlockShape::Cylinder => ("[(", ")]"),
            BlockShape::Circle => ("((", "))"),
            BlockShape::Asymmetric => (">", "]"),
            BlockShape::Rhombus => ("{", "}"),
            BlockShape::Hexagon => ("{{", "}}"),
            BlockShape::DoubleCircle => ("(((", ")))"),
            BlockShape::Parallelogram => ("[/", "/]"),
            BlockShape::ParallelogramAlt => ("[\\", "\\]"),
            BlockShape::Trapezoid => ("[/", "\\]"),
            BlockShape::TrapezoidAlt => ("[\\", "/]"),
        }
    }
}

impl FromStr for BlockShape {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "square" => Ok(BlockShape::Square),
            "round" => Ok(BlockShape::Round),
            "stadium" => Ok(BlockShape::Stadium),
            "subroutine" => Ok(BlockShape::Subroutine),
            "cylinder" => Ok(BlockShape::Cylinder),
            "circle" => Ok(BlockShape::Circle),
            "asymmetric" => Ok(BlockShape::Asymmetric),
            "rhombus" => Ok(BlockShape::Rhombus),
            "hexagon" => Ok(BlockShape::Hexagon),
            "doublecircle" => Ok(BlockShape::DoubleCircle),
            "parallelogram" => Ok(BlockShape::Parallelogram),
            "parallelogramalt" => Ok(BlockShape::ParallelogramAlt),
            "trapezoid" => Ok(BlockShape::Trapezoid),
            "trapezoidalt" => Ok(BlockShape::TrapezoidAlt),
            _ => Err(DiagramError::unknown_variant("block shape", s)),
        }
    }
}

/// A cell in a block layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    text: String,
    shape: BlockShape,
    width: Option<u32>,
}

impl Block {
    pub fn new(id: BlockId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            shape: BlockShape::default(),
            width: None,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> BlockShape {
        self.shape
    }

    /// Number of columns the block spans, if set
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn set_shape(&mut self, shape: BlockShape) -> &mut Self {
        self.shape = shape;
        self
    }

    pub fn set_width(&mut self, width: u32) -> &mut Self {
        self.width = Some(width);
        self
    }

    pub fn render(&self, indent: &str) -> String {
        let (open, close) = self.shape.delimiters();
        let mut out = format!(
            "{}{}{}\"{}\"{}",
            indent,
            self.id,
            open,
            escape_label(&self.text),
            close
        );
        if let Some(width) = self.width {
            out.push_str(&format!(":{}", width));
        }
        out.push('\n');
        out
    }
}
