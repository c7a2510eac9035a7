//! State diagram aggregate

use std::fmt;

use tracing::{debug, span, trace, Level};

use super::{State, StateId, StateKey, StateType, Transition};
use crate::core::{BaseDiagram, ConfigurationProperties, Diagram, DiagramKind, Direction, Theme};

/// A state diagram under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDiagram {
    base: BaseDiagram<StateKey>,
    direction: Option<Direction>,
    states: Vec<State>,
    transitions: Vec<Transition>,
}

impl StateDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout direction; `None` leaves the renderer default
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.base.set_title(title);
        self
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.base.set_theme(theme);
        self
    }

    pub fn base(&self) -> &BaseDiagram<StateKey> {
        &self.base
    }

    pub fn properties_mut(&mut self) -> &mut ConfigurationProperties<StateKey> {
        self.base.properties_mut()
    }

    /// Add a state with a caller-chosen id
    pub fn add_state(
        &mut self,
        id: impl Into<StateId>,
        description: impl Into<String>,
        state_type: StateType,
    ) -> &mut State {
        let state = State::new(id, description, state_type);
        trace!(id = %state.id(), state_type = %state_type, "Added state");
        self.states.push(state);
        let index = self.states.len() - 1;
        &mut self.states[index]
    }

    /// Add a transition. The ids are not checked against this diagram.
    pub fn add_transition(
        &mut self,
        from: impl Into<StateId>,
        to: impl Into<StateId>,
        description: impl Into<String>,
    ) -> &mut Transition {
        let transition = Transition::new(from, to, description);
        trace!(from = %transition.from(), to = %transition.to(), "Added transition");
        self.transitions.push(transition);
        let index = self.transitions.len() - 1;
        &mut self.transitions[index]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.iter().find(|state| state.id() == id)
    }

    pub fn state_mut(&mut self, id: &StateId) -> Option<&mut State> {
        self.states.iter_mut().find(|state| state.id() == id)
    }

    /// Render the body without front-matter
    pub fn body(&self) -> String {
        let mut out = format!("{}\n", DiagramKind::State.keyword());
        if let Some(direction) = self.direction {
            out.push_str(&format!("direction {}\n", direction));
        }
        for state in &self.states {
            out.push_str(&state.render(""));
        }
        for transition in &self.transitions {
            out.push_str(&transition.render("", &self.states));
        }
        out
    }
}

impl Diagram for StateDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::State
    }

    fn render(&self) -> String {
        let render_span = span!(
            Level::DEBUG,
            "render_state",
            states = self.states.len(),
            transitions = self.transitions.len()
        );
        let _enter = render_span.enter();

        let text = self.base.wrap(&self.body());
        debug!(bytes = text.len(), "Rendered state diagram");
        text
    }
}

impl fmt::Display for StateDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_diagram() {
        let diagram = StateDiagram::new();
        assert!(diagram.states().is_empty());
        assert!(diagram.transitions().is_empty());
        assert_eq!(diagram.render(), "stateDiagram-v2\n");
    }

    #[test]
    fn test_states_then_transitions() {
        let mut diagram = StateDiagram::new();
        let start = diagram.add_state("start", "", StateType::Start).id().clone();
        let idle = diagram.add_state("Idle", "Waiting", StateType::Simple).id().clone();
        let done = diagram.add_state("done", "", StateType::End).id().clone();
        diagram.add_transition(&start, &idle, "");
        diagram.add_transition(&idle, &done, "shutdown");

        assert_eq!(
            diagram.render(),
            "stateDiagram-v2\nIdle : Waiting\n[*] --> Idle\nIdle --> [*] : shutdown\n"
        );
    }

    #[test]
    fn test_direction() {
        let mut diagram = StateDiagram::new();
        diagram.set_direction(Direction::LeftRight);
        assert_eq!(diagram.render(), "stateDiagram-v2\ndirection LR\n");
    }

    #[test]
    fn test_state_mut() {
        let mut diagram = StateDiagram::new();
        let id = diagram.add_state("A", "", StateType::Simple).id().clone();
        diagram
            .state_mut(&id)
            .unwrap()
            .set_description("renamed");
        assert_eq!(diagram.state(&id).unwrap().description(), "renamed");
        assert!(diagram.state_mut(&StateId::new("missing")).is_none());
    }

    #[test]
    fn test_transition_description_chain() {
        let mut diagram = StateDiagram::new();
        diagram.add_transition("A", "B", "").set_description("go");
        assert_eq!(diagram.transitions()[0].description(), "go");
    }

    #[test]
    fn test_theme_front_matter() {
        let mut diagram = StateDiagram::new();
        diagram.set_theme(Theme::Forest);
        assert_eq!(
            diagram.render(),
            "---\nconfig:\n  theme: forest\n---\nstateDiagram-v2\n"
        );
    }
}
