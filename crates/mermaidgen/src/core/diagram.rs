//! Core diagram trait
//!
//! Implemented by every diagram aggregate. Rendering is pure: calling
//! [`Diagram::render`] repeatedly yields byte-identical text and never
//! mutates the diagram.

use std::path::Path;

use super::{write_diagram, DiagramError, DiagramKind};

/// A buildable diagram that serializes to notation text
pub trait Diagram {
    /// Which kind of diagram this is
    fn kind(&self) -> DiagramKind;

    /// Render the complete document: front-matter followed by the body
    fn render(&self) -> String;

    /// Render and write the document to `path`
    fn render_to_file(&self, path: impl AsRef<Path>) -> Result<(), DiagramError>
    where
        Self: Sized,
    {
        write_diagram(path, &self.render())
    }
}
