//! Style classes and inline node styles

use std::fmt;

/// CSS-like style properties for nodes and classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub color: Option<String>,
    /// Stroke width in pixels
    pub stroke_width: Option<u32>,
    pub stroke_dasharray: Option<String>,
}

impl NodeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_stroke_dasharray(mut self, pattern: impl Into<String>) -> Self {
        self.stroke_dasharray = Some(pattern.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.color.is_none()
            && self.stroke_width.is_none()
            && self.stroke_dasharray.is_none()
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(fill) = &self.fill {
            parts.push(format!("fill:{}", fill));
        }
        if let Some(stroke) = &self.stroke {
            parts.push(format!("stroke:{}", stroke));
        }
        if let Some(color) = &self.color {
            parts.push(format!("color:{}", color));
        }
        if let Some(width) = self.stroke_width {
            parts.push(format!("stroke-width:{}px", width));
        }
        if let Some(pattern) = &self.stroke_dasharray {
            parts.push(format!("stroke-dasharray:{}", pattern));
        }
        f.write_str(&parts.join(","))
    }
}

/// A reusable style class, identified by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    style: NodeStyle,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: NodeStyle::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &NodeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: NodeStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// Render the `classDef` statement
    pub fn render(&self, indent: &str) -> String {
        if self.style.is_empty() {
            format!("{}classDef {}\n", indent, self.name)
        } else {
            format!("{}classDef {} {}\n", indent, self.name, self.style)
        }
    }
}
