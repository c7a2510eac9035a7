//! Core type definitions shared by every diagram kind
//!
//! Flow direction, theme selection and the catalogue of supported
//! diagram kinds.

use std::fmt;
use std::str::FromStr;

use super::DiagramError;

/// Flow direction for graph-style layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Direction {
    /// Top to bottom (TB)
    #[default]
    TopToBottom,
    /// Left to right (LR)
    LeftRight,
    /// Right to left (RL)
    RightLeft,
    /// Bottom to top (BT)
    BottomUp,
}

impl Direction {
    /// Two-letter code used in the notation
    pub fn code(&self) -> &'static str {
        match self {
            Direction::TopToBottom => "TB",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
            Direction::BottomUp => "BT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TB" | "TD" => Ok(Direction::TopToBottom),
            "LR" => Ok(Direction::LeftRight),
            "RL" => Ok(Direction::RightLeft),
            "BT" => Ok(Direction::BottomUp),
            _ => Err(DiagramError::unknown_variant("direction", s)),
        }
    }
}

/// Built-in renderer themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Theme {
    #[default]
    Default,
    Neutral,
    Dark,
    Forest,
    /// The only theme whose variables may be customised
    Base,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Default => write!(f, "default"),
            Theme::Neutral => write!(f, "neutral"),
            Theme::Dark => write!(f, "dark"),
            Theme::Forest => write!(f, "forest"),
            Theme::Base => write!(f, "base"),
        }
    }
}

impl FromStr for Theme {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "neutral" => Ok(Theme::Neutral),
            "dark" => Ok(Theme::Dark),
            "forest" => Ok(Theme::Forest),
            "base" => Ok(Theme::Base),
            _ => Err(DiagramError::unknown_variant("theme", s)),
        }
    }
}

/// Diagram kinds this crate can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Block,
    State,
}

impl DiagramKind {
    /// Every supported kind, in a stable order
    pub fn all() -> &'static [DiagramKind] {
        &[DiagramKind::Flowchart, DiagramKind::Block, DiagramKind::State]
    }

    /// Keyword that opens a diagram of this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "flowchart",
            DiagramKind::Block => "block-beta",
            DiagramKind::State => "stateDiagram-v2",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "Flowcharts with nodes, links, subgraphs and classes",
            DiagramKind::Block => "Grid-positioned blocks with links and spacing control",
            DiagramKind::State => "State machines with states and transitions",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramKind::Flowchart => write!(f, "flowchart"),
            DiagramKind::Block => write!(f, "block"),
            DiagramKind::State => write!(f, "state"),
        }
    }
}

impl FromStr for DiagramKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flowchart" | "graph" => Ok(DiagramKind::Flowchart),
            "block" | "block-beta" => Ok(DiagramKind::Block),
            "state" | "statediagram" | "statediagram-v2" => Ok(DiagramKind::State),
            _ => Err(DiagramError::unknown_variant("diagram kind", s)),
        }
    }
}
