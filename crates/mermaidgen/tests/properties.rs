//! Property tests for builder invariants

use mermaidgen::prelude::*;
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,12}"
}

proptest! {
    #[test]
    fn flowchart_ids_are_sequential(labels in prop::collection::vec(label(), 0..20)) {
        let mut flowchart = Flowchart::new();
        let ids: Vec<u64> = labels
            .iter()
            .map(|text| flowchart.add_node(text.as_str()).id().value())
            .collect();
        let expected: Vec<u64> = (0..labels.len() as u64).collect();
        prop_assert_eq!(ids, expected);
    }

    #[test]
    fn flowchart_nodes_render_in_insertion_order(labels in prop::collection::vec(label(), 1..15)) {
        let mut flowchart = Flowchart::new();
        for text in &labels {
            flowchart.add_node(text.as_str());
        }
        let text = flowchart.render();

        let mut cursor = 0;
        for (index, label) in labels.iter().enumerate() {
            let line = format!("{}@{{ shape: rect, label: \"{}\"}}", index, label);
            let found = text[cursor..].find(&line);
            prop_assert!(found.is_some(), "missing {:?}", line);
            cursor += found.unwrap_or_default() + line.len();
        }
    }

    #[test]
    fn render_is_deterministic(nodes in 0usize..10, links in prop::collection::vec((0u64..10, 0u64..10), 0..10)) {
        let mut flowchart = Flowchart::new();
        for index in 0..nodes {
            flowchart.add_node(format!("node {}", index));
        }
        for (from, to) in links {
            flowchart.add_link(NodeId::new(from), NodeId::new(to));
        }
        prop_assert_eq!(flowchart.render(), flowchart.render());
    }

    #[test]
    fn block_columns_track_adjustments(adds in 0i64..20, removes in 0i64..20) {
        let mut blocks = BlockDiagram::new();
        for _ in 0..adds {
            blocks.add_column();
        }
        for _ in 0..removes {
            blocks.remove_column();
        }
        prop_assert_eq!(blocks.columns(), adds - removes);
        prop_assert_eq!(blocks.render().contains("columns "), adds != removes);
    }

    #[test]
    fn block_ids_follow_insertion(count in 0usize..20) {
        let mut blocks = BlockDiagram::new();
        for index in 0..count {
            let id = blocks.add_block(format!("b{}", index)).id();
            prop_assert_eq!(id.index(), index);
        }
    }

    #[test]
    fn state_transitions_keep_order(names in prop::collection::vec("[A-Z][a-z]{2,6}", 2..10)) {
        let mut machine = StateDiagram::new();
        for name in &names {
            machine.add_state(name.as_str(), "", StateType::Simple);
        }
        for pair in names.windows(2) {
            machine.add_transition(pair[0].as_str(), pair[1].as_str(), "");
        }
        let text = machine.render();

        let mut cursor = 0;
        for pair in names.windows(2) {
            let line = format!("{} --> {}\n", pair[0], pair[1]);
            let found = text[cursor..].find(&line);
            prop_assert!(found.is_some(), "missing {:?}", line);
            cursor += found.unwrap_or_default() + line.len();
        }
    }
}
