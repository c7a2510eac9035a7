//! Logging infrastructure for diagram generation
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the application. This module provides the subscriber setup used by
//! the command-line front end.
//!
//! # Usage
//!
//! ```rust,no_run
//! use mermaidgen::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `MERMAIDGEN_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `MERMAIDGEN_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter directives
//!
//! # Filtering Logs
//!
//! ```bash
//! # Show every entity added to flowcharts
//! RUST_LOG="mermaidgen::plugins::flowchart=trace" mermaidgen sample flowchart
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use super::DiagramError;

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(DiagramError::unknown_variant("log format", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional log level or filter directive. If None, uses
///   `MERMAIDGEN_LOG_LEVEL` or `RUST_LOG`, or defaults to `warn`.
/// * `format` - Optional log format (compact|pretty|json). If None, uses
///   `MERMAIDGEN_LOG_FORMAT`, or defaults to `compact`.
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MERMAIDGEN_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MERMAIDGEN_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    let format = LogFormat::from_str(&log_format)?;

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Logs go to stderr so rendered diagrams on stdout stay clean
    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_format_variants() {
        let variants = LogFormat::variants();
        assert_eq!(variants.len(), 3);
        assert!(variants.contains(&"pretty"));
    }

    #[test]
    fn test_log_format_default() {
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
