//! Demonstration diagrams for `mermaidgen sample`

use mermaidgen::prelude::*;

/// Shared options applied to every sample
#[derive(Debug, Clone, Default)]
pub struct SampleOptions {
    pub direction: Option<Direction>,
    pub title: Option<String>,
    pub theme: Option<Theme>,
}

/// Build the sample for `kind` and render it
pub fn render_sample(kind: DiagramKind, options: &SampleOptions) -> String {
    match kind {
        DiagramKind::Flowchart => flowchart(options).render(),
        DiagramKind::Block => block(options).render(),
        DiagramKind::State => state(options).render(),
    }
}

/// A small review workflow with a decision and a grouped back end
pub fn flowchart(options: &SampleOptions) -> Flowchart {
    let mut flowchart = Flowchart::new();
    flowchart.set_direction(options.direction.unwrap_or(Direction::LeftRight));
    if let Some(title) = &options.title {
        flowchart.set_title(title.as_str());
    }
    if let Some(theme) = options.theme {
        flowchart.set_theme(theme);
    }

    flowchart
        .add_class("accent")
        .set_style(NodeStyle::new().with_fill("#e8f4ff").with_stroke("#1f6feb"));

    let submit = flowchart
        .add_node("Submit request")
        .set_shape(NodeShape::Terminal)
        .id();
    let review = flowchart
        .add_node("Approved?")
        .set_shape(NodeShape::Decision)
        .id();
    let store = flowchart
        .add_node("Store result")
        .set_shape(NodeShape::Database)
        .set_class("accent")
        .id();
    let notify = flowchart.add_node("Notify requester").id();

    flowchart.add_subgraph("Back end").add_node(store);

    flowchart.add_link(submit, review);
    flowchart.add_link(review, store).set_text("yes");
    flowchart
        .add_link(review, notify)
        .set_text("no")
        .set_shape(LinkShape::Dotted);
    flowchart.add_link(store, notify);
    flowchart
}

/// A three-column service layout
pub fn block(options: &SampleOptions) -> BlockDiagram {
    let mut blocks = BlockDiagram::new();
    if let Some(title) = &options.title {
        blocks.set_title(title.as_str());
    }
    if let Some(theme) = options.theme {
        blocks.set_theme(theme);
    }

    blocks.set_columns(3);
    let web = blocks.add_block("Web").set_shape(BlockShape::Round).id();
    blocks.add_space();
    let api = blocks.add_block("API").id();
    let cache = blocks
        .add_block("Cache")
        .set_shape(BlockShape::Hexagon)
        .id();
    let db = blocks
        .add_block("Database")
        .set_shape(BlockShape::Cylinder)
        .set_width(2)
        .id();

    blocks.add_link(web, api).set_text("HTTP");
    blocks.add_link(api, cache);
    blocks.add_link(api, db);
    blocks
}

/// A job runner's lifecycle
pub fn state(options: &SampleOptions) -> StateDiagram {
    let mut machine = StateDiagram::new();
    if let Some(direction) = options.direction {
        machine.set_direction(direction);
    }
    if let Some(title) = &options.title {
        machine.set_title(title.as_str());
    }
    if let Some(theme) = options.theme {
        machine.set_theme(theme);
    }

    machine.add_state("start", "", StateType::Start);
    machine
        .add_state("Idle", "Waiting for jobs", StateType::Simple)
        .set_note(NotePosition::Right, "Polls the queue");

    let running = machine.add_state("Running", "", StateType::Composite);
    running.add_state("begin", "", StateType::Start);
    running.add_state("Fetching", "", StateType::Simple);
    running.add_state("Executing", "", StateType::Simple);
    running.add_transition("begin", "Fetching", "");
    running.add_transition("Fetching", "Executing", "inputs ready");

    machine.add_state("outcome", "", StateType::Choice);
    machine.add_state("stop", "", StateType::End);

    machine.add_transition("start", "Idle", "");
    machine.add_transition("Idle", "Running", "job queued");
    machine.add_transition("Running", "outcome", "");
    machine.add_transition("outcome", "Idle", "success");
    machine.add_transition("outcome", "stop", "fatal error");
    machine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_sample() {
        let options = SampleOptions::default();
        for kind in DiagramKind::all() {
            let text = render_sample(*kind, &options);
            assert!(text.starts_with(kind.keyword()), "{}", text);
        }
    }

    #[test]
    fn test_flowchart_sample_defaults_to_left_right() {
        let text = flowchart(&SampleOptions::default()).render();
        assert!(text.starts_with("flowchart LR\n"));
        assert!(text.contains("1 -.->|no| 3"));
    }

    #[test]
    fn test_options_are_applied() {
        let options = SampleOptions {
            direction: Some(Direction::BottomUp),
            title: Some("Demo".to_string()),
            theme: Some(Theme::Dark),
        };
        let text = render_sample(DiagramKind::State, &options);
        assert!(text.starts_with("---\ntitle: Demo\nconfig:\n  theme: dark\n---\n"));
        assert!(text.contains("direction BT\n"));
    }
}
