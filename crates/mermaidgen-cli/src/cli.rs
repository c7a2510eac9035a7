//! Command-line interface for the mermaidgen utility
//!
//! Provides a CLI to generate Mermaid.js diagram markup, either from the
//! built-in samples or from a JSON description.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::description::DiagramDescription;
use crate::samples::{render_sample, SampleOptions};
use mermaidgen::core::logging::init_logging;
use mermaidgen::{DiagramKind, Direction, Theme};

/// Mermaidgen - Generate Mermaid.js diagram markup
#[derive(Parser)]
#[command(name = "mermaidgen")]
#[command(about = "A Rust utility to generate Mermaid.js diagram markup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show supported diagram types
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate a demonstration diagram
    Sample {
        /// Diagram kind to generate
        #[arg(value_enum)]
        kind: KindChoice,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Layout direction
        #[arg(long, value_enum)]
        direction: Option<DirectionChoice>,

        /// Diagram title
        #[arg(long)]
        title: Option<String>,

        /// Renderer theme
        #[arg(long, value_enum)]
        theme: Option<ThemeChoice>,
    },

    /// Build a diagram from a JSON description
    Build {
        /// Input file containing the JSON description (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Diagram kinds selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum KindChoice {
    Flowchart,
    Block,
    State,
}

impl From<KindChoice> for DiagramKind {
    fn from(value: KindChoice) -> Self {
        match value {
            KindChoice::Flowchart => DiagramKind::Flowchart,
            KindChoice::Block => DiagramKind::Block,
            KindChoice::State => DiagramKind::State,
        }
    }
}

/// Layout directions
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum DirectionChoice {
    /// Top to bottom
    #[value(alias = "td")]
    Tb,
    /// Left to right
    Lr,
    /// Right to left
    Rl,
    /// Bottom to top
    Bt,
}

impl From<DirectionChoice> for Direction {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Tb => Direction::TopToBottom,
            DirectionChoice::Lr => Direction::LeftRight,
            DirectionChoice::Rl => Direction::RightLeft,
            DirectionChoice::Bt => Direction::BottomUp,
        }
    }
}

/// Renderer themes
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ThemeChoice {
    Default,
    Neutral,
    Dark,
    Forest,
    Base,
}

impl From<ThemeChoice> for Theme {
    fn from(value: ThemeChoice) -> Self {
        match value {
            ThemeChoice::Default => Theme::Default,
            ThemeChoice::Neutral => Theme::Neutral,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Forest => Theme::Forest,
            ThemeChoice::Base => Theme::Base,
        }
    }
}

/// Main CLI application
#[derive(Debug, Default)]
pub struct MermaidgenApp;

impl MermaidgenApp {
    /// Create a new application instance
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("MERMAIDGEN_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var("MERMAIDGEN_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Mermaidgen v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Types { json } => self.types_command(json, cli.verbose),
            Commands::Sample {
                kind,
                output,
                direction,
                title,
                theme,
            } => {
                let options = SampleOptions {
                    direction: direction.map(Into::into),
                    title,
                    theme: theme.map(Into::into),
                };
                self.sample_command(kind.into(), &options, output, cli.verbose)
            }
            Commands::Build { input, output } => self.build_command(input, output, cli.verbose),
        }
    }

    /// Handle the types command
    fn types_command(&self, json: bool, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Listing supported diagram types");
        }
        println!("{}", self.types_listing(json)?);
        Ok(())
    }

    /// Text printed by the types command
    pub fn types_listing(&self, json: bool) -> Result<String> {
        let kinds = DiagramKind::all();
        if json {
            let types: Vec<_> = kinds
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind.to_string(),
                        "keyword": kind.keyword(),
                        "description": kind.description(),
                        "status": "supported"
                    })
                })
                .collect();
            let listing = serde_json::json!({
                "supported_types": types,
                "total": kinds.len()
            });
            Ok(serde_json::to_string_pretty(&listing)?)
        } else {
            let mut listing = String::from("Supported diagram types:\n");
            for kind in kinds {
                let name = kind.to_string();
                listing.push_str(&format!("  {:<10} - {}\n", name, kind.description()));
            }
            listing.push_str(&format!("\nTotal: {} diagram types supported", kinds.len()));
            Ok(listing)
        }
    }

    /// Handle the sample command
    fn sample_command(
        &self,
        kind: DiagramKind,
        options: &SampleOptions,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let text = render_sample(kind, options);
        info!(kind = %kind, bytes = text.len(), "Generated sample diagram");
        if verbose {
            eprintln!("Generated {} sample", kind);
        }
        self.write_output(output, &text)
    }

    /// Handle the build command
    fn build_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let description = DiagramDescription::from_json(&content)?;
        let text = description.render()?;
        info!(kind = %description.kind(), bytes = text.len(), "Built diagram");

        if verbose {
            eprintln!("Successfully built {} diagram", description.kind());
        }
        self.write_output(output, &text)
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                mermaidgen::write_diagram(&path, content)?;
            }
            _ => {
                print!("{}", content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}
