//! Flowchart configuration keys and curve styles

use std::fmt;
use std::str::FromStr;

use crate::core::{DiagramError, PropertyKey};

/// Front-matter keys understood by flowcharts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FlowchartKey {
    TitleTopMargin,
    DiagramPadding,
    HtmlLabels,
    NodeSpacing,
    RankSpacing,
    Curve,
    Padding,
    DefaultRenderer,
    WrappingWidth,
    UseMaxWidth,
}

impl fmt::Display for FlowchartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowchartKey::TitleTopMargin => "titleTopMargin",
            FlowchartKey::DiagramPadding => "diagramPadding",
            FlowchartKey::HtmlLabels => "htmlLabels",
            FlowchartKey::NodeSpacing => "nodeSpacing",
            FlowchartKey::RankSpacing => "rankSpacing",
            FlowchartKey::Curve => "curve",
            FlowchartKey::Padding => "padding",
            FlowchartKey::DefaultRenderer => "defaultRenderer",
            FlowchartKey::WrappingWidth => "wrappingWidth",
            FlowchartKey::UseMaxWidth => "useMaxWidth",
        };
        f.write_str(name)
    }
}

impl PropertyKey for FlowchartKey {
    const SECTION: &'static str = "flowchart";
}

/// Interpolation used when drawing link curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CurveStyle {
    /// Renderer default; nothing is emitted
    #[default]
    None,
    Basis,
    BumpX,
    BumpY,
    Cardinal,
    CatmullRom,
    Linear,
    MonotoneX,
    MonotoneY,
    Natural,
    Step,
    StepAfter,
    StepBefore,
}

impl CurveStyle {
    /// Name used in configuration, `None` for the renderer default
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            CurveStyle::None => return None,
            CurveStyle::Basis => "basis",
            CurveStyle::BumpX => "bumpX",
            CurveStyle::BumpY => "bumpY",
            CurveStyle::Cardinal => "cardinal",
            CurveStyle::CatmullRom => "catmullRom",
            CurveStyle::Linear => "linear",
            CurveStyle::MonotoneX => "monotoneX",
            CurveStyle::MonotoneY => "monotoneY",
            CurveStyle::Natural => "natural",
            CurveStyle::Step => "step",
            CurveStyle::StepAfter => "stepAfter",
            CurveStyle::StepBefore => "stepBefore",
        };
        Some(name)
    }

    pub fn all() -> &'static [CurveStyle] {
        &[
            CurveStyle::None,
            CurveStyle::Basis,
            CurveStyle::BumpX,
            CurveStyle::BumpY,
            CurveStyle::Cardinal,
            CurveStyle::CatmullRom,
            CurveStyle::Linear,
            CurveStyle::MonotoneX,
            CurveStyle::MonotoneY,
            CurveStyle::Natural,
            CurveStyle::Step,
            CurveStyle::StepAfter,
            CurveStyle::StepBefore,
        ]
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("none"))
    }
}

impl FromStr for CurveStyle {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveStyle::all()
            .iter()
            .copied()
            .find(|style| style.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| DiagramError::unknown_variant("curve style", s))
    }
}
