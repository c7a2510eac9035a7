//! Core abstractions for diagram generation
//!
//! This module holds everything shared by the diagram kinds: identity
//! allocation, the base diagram shell and its configuration properties,
//! text escaping, file output and errors.

mod base;
mod config;
mod diagram;
mod error;
mod id;
pub mod logging;
mod output;
mod text;
mod types;

pub use base::*;
pub use config::*;
pub use diagram::*;
pub use error::*;
pub use id::*;
pub use logging::*;
pub use output::*;
pub use text::*;
pub use types::*;
