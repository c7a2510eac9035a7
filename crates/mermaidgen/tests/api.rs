//! Integration tests for the public API

use mermaidgen::prelude::*;

/// Position of `needle` in `haystack`, failing the test when absent
fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in:\n{}", needle, haystack))
}

#[test]
fn test_flowchart_two_nodes_and_link() {
    let mut flowchart = Flowchart::new();
    let n1 = flowchart.add_node("My Node 1").id();
    let n2 = flowchart.add_node("My Node 2").id();
    flowchart.add_link(n1, n2);

    let text = flowchart.render();
    assert!(text.contains("0@{ shape: rect, label: \"My Node 1\"}"));
    assert!(text.contains("1@{ shape: rect, label: \"My Node 2\"}"));
    assert!(text.contains("0 --> 1"));
}

#[test]
fn test_subgraph_continues_shared_sequence() {
    let mut flowchart = Flowchart::new();
    flowchart.add_node("a");
    flowchart.add_node("b");
    let id = flowchart.add_subgraph("My Subgraph").id();

    assert_eq!(id.value(), 2);
    assert!(flowchart.render().contains("subgraph 2 [My Subgraph]"));
}

#[test]
fn test_block_scenario_order() {
    let mut blocks = BlockDiagram::new();
    let b1 = blocks.add_block("Start").id();
    let b2 = blocks.add_block("End").id();
    blocks.add_link(b1, b2);

    let text = blocks.to_string();
    let header = position(&text, "block-beta");
    let start = position(&text, "[\"Start\"]");
    let end = position(&text, "[\"End\"]");
    let arrow = position(&text, "-->");
    assert!(header < start && start < end && end < arrow);
}

#[test]
fn test_state_header() {
    let machine = StateDiagram::new();
    assert!(machine.render().starts_with("stateDiagram-v2"));
}

#[test]
fn test_flowchart_section_order() {
    let mut flowchart = Flowchart::new();
    flowchart.set_direction(Direction::LeftRight);
    let a = flowchart.add_node("A").id();
    flowchart
        .add_class("hot")
        .set_style(NodeStyle::new().with_fill("#f00"));
    let b = flowchart.add_node("B").set_class("hot").id();
    flowchart.add_link(a, b).set_text("go");
    flowchart.add_subgraph("Group").add_node(a);

    let text = flowchart.render();
    let header = position(&text, "flowchart LR");
    let class = position(&text, "classDef hot fill:#f00");
    let node = position(&text, "0@{");
    let subgraph = position(&text, "subgraph 2 [Group]");
    let link = position(&text, "0 -->|go| 1");
    assert!(header < class && class < node && node < subgraph && subgraph < link);
}

#[test]
fn test_empty_flowchart_has_only_header() {
    assert_eq!(Flowchart::new().render(), "flowchart TB\n");
}

#[test]
fn test_render_is_pure() {
    let mut flowchart = Flowchart::new();
    let a = flowchart.add_node("A").id();
    let b = flowchart.add_node("B").id();
    flowchart.add_link(a, b);

    let first = flowchart.render();
    let second = flowchart.render();
    assert_eq!(first, second);
    assert_eq!(flowchart.to_string(), first);
}

#[test]
fn test_mutation_through_handle_is_rendered() {
    let mut flowchart = Flowchart::new();
    let id = flowchart.add_node("before").id();
    flowchart
        .node_mut(id)
        .unwrap()
        .set_text("after")
        .set_shape(NodeShape::Database);

    let text = flowchart.render();
    assert!(text.contains("0@{ shape: cyl, label: \"after\"}"));
    assert!(!text.contains("before"));
}

#[test]
fn test_dangling_link_renders_raw_ids() {
    let mut flowchart = Flowchart::new();
    flowchart.add_link(NodeId::new(40), NodeId::new(41));
    assert!(flowchart.render().contains("40 --> 41"));
}

#[test]
fn test_configured_flowchart_front_matter() {
    let mut flowchart = Flowchart::new();
    flowchart
        .set_title("Pipeline")
        .set_theme(Theme::Dark)
        .set_curve_style(CurveStyle::Basis);
    flowchart
        .properties_mut()
        .set(FlowchartKey::NodeSpacing, 40);

    assert_eq!(
        flowchart.render(),
        "---\ntitle: Pipeline\nconfig:\n  theme: dark\n  flowchart:\n    nodeSpacing: 40\n    curve: basis\n---\nflowchart TB\n"
    );
}

#[test]
fn test_block_spacing_and_columns() {
    let mut blocks = BlockDiagram::new();
    blocks.set_columns(3);
    blocks.add_block("a");
    blocks.add_space();
    blocks.add_block("b").set_width(2);
    blocks.add_space_with_width(4);

    assert_eq!(
        blocks.render(),
        "block-beta\ncolumns 3\n0[\"a\"]\nspace\n1[\"b\"]:2\nspace:4\n"
    );
}

#[test]
fn test_state_machine_with_composite() {
    let mut machine = StateDiagram::new();
    machine.add_state("start", "", StateType::Start);
    let active = machine.add_state("Active", "", StateType::Composite);
    active.add_state("inner", "", StateType::Start);
    active.add_state("Working", "", StateType::Simple);
    active.add_transition("inner", "Working", "");
    machine.add_state("done", "", StateType::End);
    machine.add_transition("start", "Active", "");
    machine.add_transition("Active", "done", "finished");

    assert_eq!(
        machine.render(),
        "stateDiagram-v2\n\
         state Active {\n    Working\n    [*] --> Working\n}\n\
         [*] --> Active\n\
         Active --> [*] : finished\n"
    );
}

#[test]
fn test_diagram_kind_of_each_aggregate() {
    assert_eq!(Flowchart::new().kind(), DiagramKind::Flowchart);
    assert_eq!(BlockDiagram::new().kind(), DiagramKind::Block);
    assert_eq!(StateDiagram::new().kind(), DiagramKind::State);
}
