//! JSON diagram descriptions accepted by `mermaidgen build`
//!
//! A description names the diagram kind in its `kind` field and lists the
//! entities to add. Flowchart nodes and blocks are given caller-chosen
//! keys that links refer to; the generated ids are assigned on build.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use mermaidgen::prelude::*;

/// Top-level description, tagged by diagram kind
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DiagramDescription {
    Flowchart(FlowchartDescription),
    Block(BlockDescription),
    State(StateDescription),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlowchartDescription {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub direction: Option<String>,
    pub curve: Option<String>,
    pub classes: Vec<ClassEntry>,
    pub nodes: Vec<NodeEntry>,
    pub subgraphs: Vec<SubgraphEntry>,
    pub links: Vec<LinkEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StyleEntry {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub color: Option<String>,
    pub stroke_width: Option<u32>,
    pub stroke_dasharray: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClassEntry {
    pub name: String,
    #[serde(flatten)]
    pub style: StyleEntry,
}

#[derive(Debug, Deserialize)]
pub struct NodeEntry {
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<StyleEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SubgraphEntry {
    pub title: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LinkEntry {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub head: Option<String>,
    #[serde(default)]
    pub tail: Option<String>,
    #[serde(default)]
    pub length: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlockDescription {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub columns: Option<i64>,
    pub items: Vec<BlockItem>,
    pub links: Vec<BlockLinkEntry>,
}

/// One entry of the block layout stream
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BlockItem {
    Block(BlockEntry),
    Space(SpaceEntry),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockEntry {
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub shape: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
}

/// `{"space": null}` for a single cell, `{"space": n}` for n cells
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpaceEntry {
    #[serde(deserialize_with = "required_width")]
    pub space: Option<u32>,
}

/// Deserialize an `Option` without letting a missing key default to `None`
fn required_width<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u32>::deserialize(deserializer)
}

#[derive(Debug, Deserialize)]
pub struct BlockLinkEntry {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StateDescription {
    pub title: Option<String>,
    pub theme: Option<String>,
    pub direction: Option<String>,
    pub states: Vec<StateEntry>,
    pub transitions: Vec<TransitionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct StateEntry {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub state_type: Option<String>,
    #[serde(default)]
    pub note: Option<NoteEntry>,
    #[serde(default)]
    pub states: Vec<StateEntry>,
    #[serde(default)]
    pub transitions: Vec<TransitionEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NoteEntry {
    #[serde(default)]
    pub position: Option<String>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TransitionEntry {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub description: String,
}

/// Parse an optional enumeration name, falling back to the default
fn parse_or_default<T>(value: Option<&str>) -> Result<T>
where
    T: std::str::FromStr<Err = DiagramError> + Default,
{
    match value {
        Some(name) => Ok(name.parse()?),
        None => Ok(T::default()),
    }
}

impl StyleEntry {
    fn to_style(&self) -> NodeStyle {
        NodeStyle {
            fill: self.fill.clone(),
            stroke: self.stroke.clone(),
            color: self.color.clone(),
            stroke_width: self.stroke_width,
            stroke_dasharray: self.stroke_dasharray.clone(),
        }
    }
}

impl DiagramDescription {
    /// Parse a description from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid diagram description")
    }

    pub fn kind(&self) -> DiagramKind {
        match self {
            DiagramDescription::Flowchart(_) => DiagramKind::Flowchart,
            DiagramDescription::Block(_) => DiagramKind::Block,
            DiagramDescription::State(_) => DiagramKind::State,
        }
    }

    /// Build the diagram and render it to notation text
    pub fn render(&self) -> Result<String> {
        debug!(kind = %self.kind(), "Building diagram from description");
        match self {
            DiagramDescription::Flowchart(description) => Ok(description.build()?.render()),
            DiagramDescription::Block(description) => Ok(description.build()?.render()),
            DiagramDescription::State(description) => Ok(description.build()?.render()),
        }
    }
}

impl FlowchartDescription {
    pub fn build(&self) -> Result<Flowchart> {
        let mut flowchart = Flowchart::new();
        if let Some(title) = &self.title {
            flowchart.set_title(title.as_str());
        }
        if let Some(theme) = &self.theme {
            flowchart.set_theme(theme.parse()?);
        }
        flowchart
            .set_direction(parse_or_default(self.direction.as_deref())?)
            .set_curve_style(parse_or_default(self.curve.as_deref())?);

        for class in &self.classes {
            flowchart
                .add_class(class.name.as_str())
                .set_style(class.style.to_style());
        }

        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        for entry in &self.nodes {
            let node = flowchart.add_node(entry.text.as_str());
            node.set_shape(parse_or_default(entry.shape.as_deref())?);
            if let Some(class) = &entry.class {
                node.set_class(class.as_str());
            }
            if let Some(style) = &entry.style {
                node.set_style(style.to_style());
            }
            if ids.insert(entry.key.as_str(), node.id()).is_some() {
                return Err(anyhow!("Duplicate node key '{}'", entry.key));
            }
        }

        let lookup = |key: &str| {
            ids.get(key)
                .copied()
                .ok_or_else(|| anyhow!("Unknown node '{}'", key))
        };

        for entry in &self.subgraphs {
            let members = entry
                .members
                .iter()
                .map(|key| lookup(key))
                .collect::<Result<Vec<_>>>()?;
            let subgraph = flowchart.add_subgraph(entry.title.as_str());
            if let Some(direction) = &entry.direction {
                subgraph.set_direction(direction.parse()?);
            }
            for member in members {
                subgraph.add_node(member);
            }
        }

        for entry in &self.links {
            let from = lookup(&entry.from)?;
            let to = lookup(&entry.to)?;
            let link = flowchart.add_link(from, to);
            link.set_length(entry.length);
            if let Some(shape) = &entry.shape {
                link.set_shape(shape.parse()?);
            }
            if let Some(head) = &entry.head {
                link.set_head(head.parse()?);
            }
            if let Some(tail) = &entry.tail {
                link.set_tail(tail.parse()?);
            }
            if let Some(text) = &entry.text {
                link.set_text(text.as_str());
            }
        }

        Ok(flowchart)
    }
}

impl BlockDescription {
    pub fn build(&self) -> Result<BlockDiagram> {
        let mut blocks = BlockDiagram::new();
        if let Some(title) = &self.title {
            blocks.set_title(title.as_str());
        }
        if let Some(theme) = &self.theme {
            blocks.set_theme(theme.parse()?);
        }
        if let Some(columns) = self.columns {
            blocks.set_columns(columns);
        }

        let mut ids: HashMap<&str, BlockId> = HashMap::new();
        for item in &self.items {
            match item {
                BlockItem::Block(entry) => {
                    let block = blocks.add_block(entry.text.as_str());
                    block.set_shape(parse_or_default(entry.shape.as_deref())?);
                    if let Some(width) = entry.width {
                        block.set_width(width);
                    }
                    if ids.insert(entry.key.as_str(), block.id()).is_some() {
                        return Err(anyhow!("Duplicate block key '{}'", entry.key));
                    }
                }
                BlockItem::Space(SpaceEntry { space: None }) => {
                    blocks.add_space();
                }
                BlockItem::Space(SpaceEntry { space: Some(width) }) => {
                    blocks.add_space_with_width(*width);
                }
            }
        }

        for entry in &self.links {
            let from = ids
                .get(entry.from.as_str())
                .copied()
                .ok_or_else(|| anyhow!("Unknown block '{}'", entry.from))?;
            let to = ids
                .get(entry.to.as_str())
                .copied()
                .ok_or_else(|| anyhow!("Unknown block '{}'", entry.to))?;
            let link = blocks.add_link(from, to);
            if let Some(text) = &entry.text {
                link.set_text(text.as_str());
            }
        }

        Ok(blocks)
    }
}

impl StateEntry {
    /// Apply type, note and nested content to a freshly added state
    fn apply(&self, state: &mut mermaidgen::plugins::state::State) -> Result<()> {
        if let Some(note) = &self.note {
            state.set_note(parse_or_default(note.position.as_deref())?, note.text.as_str());
        }
        for child in &self.states {
            let nested = state.add_state(
                child.id.as_str(),
                child.description.as_str(),
                parse_or_default(child.state_type.as_deref())?,
            );
            child.apply(nested)?;
        }
        for transition in &self.transitions {
            state.add_transition(
                transition.from.as_str(),
                transition.to.as_str(),
                transition.description.as_str(),
            );
        }
        Ok(())
    }
}

impl StateDescription {
    pub fn build(&self) -> Result<StateDiagram> {
        let mut machine = StateDiagram::new();
        if let Some(title) = &self.title {
            machine.set_title(title.as_str());
        }
        if let Some(theme) = &self.theme {
            machine.set_theme(theme.parse()?);
        }
        if let Some(direction) = &self.direction {
            machine.set_direction(direction.parse()?);
        }

        for entry in &self.states {
            let state = machine.add_state(
                entry.id.as_str(),
                entry.description.as_str(),
                parse_or_default(entry.state_type.as_deref())?,
            );
            entry.apply(state)?;
        }
        for transition in &self.transitions {
            machine.add_transition(
                transition.from.as_str(),
                transition.to.as_str(),
                transition.description.as_str(),
            );
        }

        Ok(machine)
    }
}
