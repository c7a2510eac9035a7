//! State diagram plugin
//!
//! Builds `stateDiagram-v2` documents.
//!
//! ```text
//! stateDiagram-v2
//! Idle : Waiting
//! [*] --> Idle
//! Idle --> Processing : start
//! Processing --> [*]
//! ```

mod config;
mod diagram;
mod node;
mod transition;

pub use config::StateKey;
pub use diagram::StateDiagram;
pub use node::{Note, NotePosition, State, StateId, StateType};
pub use transition::{Transition, TERMINAL_STATE};
