//! Core error types for diagram generation
//!
//! Building and serializing a diagram never fails. The only fallible
//! operations are writing rendered text to disk and parsing the public
//! enumerations from their textual names.

use std::path::PathBuf;

use thiserror::Error;

/// Core error types for diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("IO error writing '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DiagramError {
    /// Create a new IO error for the given path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a new error for an unrecognised enumeration name
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DiagramError::io_error("out/diagram.mmd", io_err);
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("out/diagram.mmd"));
        assert!(error_msg.contains("File not found"));
    }

    #[test]
    fn test_unknown_variant() {
        let error = DiagramError::unknown_variant("direction", "XY");
        let error_msg = format!("{}", error);
        assert_eq!(error_msg, "Unknown direction: XY");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error as _;
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = DiagramError::io_error("x.mmd", io_err);
        assert!(error.source().is_some());
    }
}
