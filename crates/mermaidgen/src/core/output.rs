//! File output for rendered diagrams

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::DiagramError;

/// Write rendered diagram text to `path`.
///
/// Existing files are overwritten. Failures are returned as
/// [`DiagramError::IoError`] without retrying.
pub fn write_diagram(path: impl AsRef<Path>, text: &str) -> Result<(), DiagramError> {
    let path = path.as_ref();
    debug!(path = %path.display(), bytes = text.len(), "Writing diagram");
    fs::write(path, text).map_err(|source| {
        warn!(path = %path.display(), error = %source, "Failed to write diagram");
        DiagramError::io_error(path, source)
    })
}
