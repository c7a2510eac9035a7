//! Snapshot tests for rendered diagram text
//!
//! These tests compare rendered output against golden files in tests/fixtures/.
//! To update fixtures after an intended output change, run the tests with UPDATE_FIXTURES=1

use std::fs;
use std::path::Path;

use mermaidgen::prelude::*;

/// Compare rendered output to a fixture file
fn assert_fixture(name: &str, diagram: &impl Diagram) {
    let output = diagram.render();
    let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{}.mmd", name));

    if std::env::var("UPDATE_FIXTURES").is_ok() {
        fs::write(&fixture_path, &output).expect("failed to write fixture");
        println!("Updated fixture: {}", fixture_path.display());
        return;
    }

    let expected = fs::read_to_string(&fixture_path).unwrap_or_else(|_| {
        panic!(
            "Fixture not found: {}\nRun with UPDATE_FIXTURES=1 to create it.\n\nActual output:\n{}",
            fixture_path.display(),
            output
        )
    });

    if output != expected {
        panic!(
            "Snapshot mismatch for '{}'!\n\n=== Expected ===\n{}\n=== Actual ===\n{}\nRun with UPDATE_FIXTURES=1 to update.",
            name, expected, output
        );
    }
}

#[test]
fn test_order_pipeline_flowchart() {
    let mut flowchart = Flowchart::new();
    flowchart
        .set_direction(Direction::LeftRight)
        .set_title("Order pipeline");
    flowchart.add_class("critical").set_style(
        NodeStyle::new()
            .with_fill("#f96")
            .with_stroke("#333")
            .with_stroke_width(2),
    );

    let received = flowchart
        .add_node("Order received")
        .set_shape(NodeShape::Terminal)
        .id();
    let valid = flowchart
        .add_node("Valid?")
        .set_shape(NodeShape::Decision)
        .id();
    let store = flowchart
        .add_node("Store order")
        .set_shape(NodeShape::Database)
        .set_class("critical")
        .id();
    let reject = flowchart.add_node("Reject").id();

    flowchart
        .add_subgraph("Backend")
        .set_direction(Direction::TopToBottom)
        .add_node(store);

    flowchart.add_link(received, valid);
    flowchart.add_link(valid, store).set_text("yes");
    flowchart
        .add_link(valid, reject)
        .set_text("no")
        .set_shape(LinkShape::Dotted);

    assert_fixture("order_pipeline", &flowchart);
}

#[test]
fn test_service_blocks() {
    let mut blocks = BlockDiagram::new();
    blocks.set_columns(3);
    let frontend = blocks
        .add_block("Frontend")
        .set_shape(BlockShape::Round)
        .id();
    blocks.add_space();
    let backend = blocks.add_block("Backend").id();
    let database = blocks
        .add_block("Database")
        .set_shape(BlockShape::Cylinder)
        .set_width(3)
        .id();
    blocks.add_link(frontend, backend).set_text("REST");
    blocks.add_link(backend, database);

    assert_fixture("service_blocks", &blocks);
}

#[test]
fn test_worker_states() {
    let mut machine = StateDiagram::new();
    machine
        .set_direction(Direction::LeftRight)
        .set_theme(Theme::Neutral);

    machine.add_state("start", "", StateType::Start);
    machine
        .add_state("Idle", "Waiting for work", StateType::Simple)
        .set_note(NotePosition::Right, "Polls the queue");

    let running = machine.add_state("Running", "", StateType::Composite);
    running.add_state("fetch", "", StateType::Start);
    running.add_state("Fetching", "", StateType::Simple);
    running.add_state("Processing", "", StateType::Simple);
    running.add_transition("fetch", "Fetching", "");
    running.add_transition("Fetching", "Processing", "batch ready");

    machine.add_state("check", "", StateType::Choice);
    machine.add_state("stop", "", StateType::End);

    machine.add_transition("start", "Idle", "");
    machine.add_transition("Idle", "Running", "job queued");
    machine.add_transition("Running", "check", "");
    machine.add_transition("check", "Idle", "more work");
    machine.add_transition("check", "stop", "shutdown");

    assert_fixture("worker_states", &machine);
}
