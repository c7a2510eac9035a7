//! States, including composite states with their own nested machine

use std::fmt;
use std::str::FromStr;

use super::Transition;
use crate::core::{flatten_lines, DiagramError, INDENT};

/// Caller-chosen state identifier
///
/// Uniqueness is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&StateId> for StateId {
    fn from(id: &StateId) -> Self {
        id.clone()
    }
}

/// Kind of state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum StateType {
    #[default]
    Simple,
    /// Contains a nested state machine
    Composite,
    /// Initial pseudo-state, drawn as `[*]`
    Start,
    /// Final pseudo-state, drawn as `[*]`
    End,
    Fork,
    Join,
    Choice,
}

impl StateType {
    /// Start and end states are referenced as `[*]` and never declared
    pub fn is_terminal(&self) -> bool {
        matches!(self, StateType::Start | StateType::End)
    }

    /// Stereotype for pseudo-states declared with `<<...>>`
    pub fn stereotype(&self) -> Option<&'static str> {
        match self {
            StateType::Fork => Some("fork"),
            StateType::Join => Some("join"),
            StateType::Choice => Some("choice"),
            _ => None,
        }
    }
}

impl fmt::Display for StateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateType::Simple => write!(f, "simple"),
            StateType::Composite => write!(f, "composite"),
            StateType::Start => write!(f, "start"),
            StateType::End => write!(f, "end"),
            StateType::Fork => write!(f, "fork"),
            StateType::Join => write!(f, "join"),
            StateType::Choice => write!(f, "choice"),
        }
    }
}

impl FromStr for StateType {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(StateType::Simple),
            "composite" => Ok(StateType::Composite),
            "start" => Ok(StateType::Start),
            "end" => Ok(StateType::End),
            "fork" => Ok(StateType::Fork),
            "join" => Ok(StateType::Join),
            "choice" => Ok(StateType::Choice),
            _ => Err(DiagramError::unknown_variant("state type", s)),
        }
    }
}

/// Side of the state a note is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NotePosition {
    Left,
    #[default]
    Right,
}

impl fmt::Display for NotePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotePosition::Left => write!(f, "left of"),
            NotePosition::Right => write!(f, "right of"),
        }
    }
}

impl FromStr for NotePosition {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim_end_matches(" of") {
            "left" => Ok(NotePosition::Left),
            "right" => Ok(NotePosition::Right),
            _ => Err(DiagramError::unknown_variant("note position", s)),
        }
    }
}

/// A note attached to a state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub position: NotePosition,
    pub text: String,
}

impl Note {
    /// Render the note for the state `id`.
    ///
    /// Multi-line text uses the `note ... end note` block. When one of its
    /// lines would itself read as `end note`, the text is folded onto a
    /// single `note ... : text` line instead.
    pub fn render(&self, indent: &str, id: &StateId) -> String {
        let closes_early = self
            .text
            .lines()
            .any(|line| line.trim().eq_ignore_ascii_case("end note"));
        if closes_early {
            return format!(
                "{}note {} {} : {}\n",
                indent,
                self.position,
                id,
                flatten_lines(&self.text)
            );
        }

        let mut out = format!("{}note {} {}\n", indent, self.position, id);
        for line in self.text.lines() {
            out.push_str(&format!("{}{}{}\n", indent, INDENT, line));
        }
        out.push_str(&format!("{}end note\n", indent));
        out
    }
}

/// A node in a state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    id: StateId,
    description: String,
    state_type: StateType,
    note: Option<Note>,
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl State {
    pub fn new(
        id: impl Into<StateId>,
        description: impl Into<String>,
        state_type: StateType,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            state_type,
            note: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    pub fn id(&self) -> &StateId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn state_type(&self) -> StateType {
        self.state_type
    }

    pub fn note(&self) -> Option<&Note> {
        self.note.as_ref()
    }

    /// Nested states of a composite state
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Nested transitions of a composite state
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    pub fn set_type(&mut self, state_type: StateType) -> &mut Self {
        self.state_type = state_type;
        self
    }

    /// Attach a note beside the state.
    ///
    /// Start and end states have no declaration to attach to, so a note on
    /// them is kept but never rendered.
    pub fn set_note(&mut self, position: NotePosition, text: impl Into<String>) -> &mut Self {
        self.note = Some(Note {
            position,
            text: text.into(),
        });
        self
    }

    /// Add a nested state. Nested content is only rendered for composite
    /// states.
    pub fn add_state(
        &mut self,
        id: impl Into<StateId>,
        description: impl Into<String>,
        state_type: StateType,
    ) -> &mut State {
        self.states.push(State::new(id, description, state_type));
        let index = self.states.len() - 1;
        &mut self.states[index]
    }

    /// Add a nested transition between states of this composite
    pub fn add_transition(
        &mut self,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        description: impl Into<String>,
    ) -> &mut Transition {
        self.transitions.push(Transition::new(from, to, description));
        let index = self.transitions.len() - 1;
        &mut self.transitions[index]
    }

    /// Find a direct child by id
    pub fn state_mut(&mut self, id: &StateId) -> Option<&mut State> {
        self.states.iter_mut().find(|state| &state.id == id)
    }

    /// Render the declaration. Start and end states produce no declaration.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        if self.state_type.is_terminal() {
            return out;
        }

        let description = flatten_lines(&self.description);
        let described = !description.is_empty();

        match self.state_type {
            StateType::Composite => {
                if described {
                    out.push_str(&format!("{}{} : {}\n", indent, self.id, description));
                }
                out.push_str(&format!("{}state {} {{\n", indent, self.id));
                let nested = format!("{}{}", indent, INDENT);
                for state in &self.states {
                    out.push_str(&state.render(&nested));
                }
                for transition in &self.transitions {
                    out.push_str(&transition.render(&nested, &self.states));
                }
                out.push_str(&format!("{}}}\n", indent));
            }
            state_type => {
                if let Some(stereotype) = state_type.stereotype() {
                    out.push_str(&format!("{}state {} <<{}>>\n", indent, self.id, stereotype));
                    if described {
                        out.push_str(&format!("{}{} : {}\n", indent, self.id, description));
                    }
                } else if described {
                    out.push_str(&format!("{}{} : {}\n", indent, self.id, description));
                } else {
                    out.push_str(&format!("{}{}\n", indent, self.id));
                }
            }
        }

        if let Some(note) = &self.note {
            out.push_str(&note.render(indent, &self.id));
        }
        out
    }
}
