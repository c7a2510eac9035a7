//! Transitions between states

use super::{State, StateId};
use crate::core::flatten_lines;

/// Notation for both the initial and the final pseudo-state
pub const TERMINAL_STATE: &str = "[*]";

/// A directed edge between two states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    from: StateId,
    to: StateId,
    description: String,
}

impl Transition {
    pub fn new(
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            description: description.into(),
        }
    }

    pub fn from(&self) -> &StateId {
        &self.from
    }

    pub fn to(&self) -> &StateId {
        &self.to
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Render the transition, resolving start and end states declared in
    /// `scope` to `[*]`. Ids not found in `scope` render unchanged.
    pub fn render(&self, indent: &str, scope: &[State]) -> String {
        let from = endpoint(&self.from, scope);
        let to = endpoint(&self.to, scope);
        let description = flatten_lines(&self.description);
        if description.is_empty() {
            format!("{}{} --> {}\n", indent, from, to)
        } else {
            format!("{}{} --> {} : {}\n", indent, from, to, description)
        }
    }
}

fn endpoint<'a>(id: &'a StateId, scope: &[State]) -> &'a str {
    let terminal = scope
        .iter()
        .any(|state| state.id() == id && state.state_type().is_terminal());
    if terminal {
        TERMINAL_STATE
    } else {
        id.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::state::StateType;

    #[test]
    fn test_render_plain() {
        let transition = Transition::new("Idle", "Busy", "");
        assert_eq!(transition.render("", &[]), "Idle --> Busy\n");
    }

    #[test]
    fn test_render_with_description() {
        let transition = Transition::new("Idle", "Busy", "start job");
        assert_eq!(transition.render("  ", &[]), "  Idle --> Busy : start job\n");
    }

    #[test]
    fn test_terminal_resolution() {
        let scope = vec![
            State::new("begin", "", StateType::Start),
            State::new("Idle", "", StateType::Simple),
            State::new("finish", "", StateType::End),
        ];
        assert_eq!(
            Transition::new("begin", "Idle", "").render("", &scope),
            "[*] --> Idle\n"
        );
        assert_eq!(
            Transition::new("Idle", "finish", "").render("", &scope),
            "Idle --> [*]\n"
        );
    }

    #[test]
    fn test_unknown_ids_render_raw() {
        let scope = vec![State::new("begin", "", StateType::Start)];
        assert_eq!(
            Transition::new("elsewhere", "nowhere", "").render("", &scope),
            "elsewhere --> nowhere\n"
        );
    }
}
