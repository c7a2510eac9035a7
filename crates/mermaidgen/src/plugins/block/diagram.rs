//! Block diagram aggregate
//!
//! Blocks and spacing directives share one ordered layout stream. Links
//! follow the whole stream, and the column count is a diagram-wide setting
//! emitted right after the header.

use std::fmt;

use tracing::{debug, span, trace, Level};

use super::{Block, BlockId, BlockKey, BlockLink};
use crate::core::{BaseDiagram, ConfigurationProperties, Diagram, DiagramKind, Theme};

/// One entry of the layout stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayoutItem {
    Block(usize),
    Space,
    SpaceWithWidth(u32),
}

/// A block diagram under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockDiagram {
    base: BaseDiagram<BlockKey>,
    columns: i64,
    blocks: Vec<Block>,
    links: Vec<BlockLink>,
    layout: Vec<LayoutItem>,
}

impl BlockDiagram {
    /// Create an empty block diagram with no column count
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored column count; zero means unset
    pub fn columns(&self) -> i64 {
        self.columns
    }

    pub fn set_columns(&mut self, columns: i64) -> &mut Self {
        self.columns = columns;
        self
    }

    /// Increment the column count by one
    pub fn add_column(&mut self) -> &mut Self {
        self.columns += 1;
        self
    }

    /// Decrement the column count by one. The count is not clamped at zero.
    pub fn remove_column(&mut self) -> &mut Self {
        self.columns -= 1;
        self
    }

    /// Append a one-cell blank at the current position
    pub fn add_space(&mut self) -> &mut Self {
        self.layout.push(LayoutItem::Space);
        self
    }

    /// Append a blank spanning `width` cells at the current position
    pub fn add_space_with_width(&mut self, width: u32) -> &mut Self {
        self.layout.push(LayoutItem::SpaceWithWidth(width));
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

    pub fn base(&self) -> &BaseDiagram<BlockKey> {
        &self.base
    }

    pub fn properties_mut(&mut self) -> &mut ConfigurationProperties<BlockKey> {
        self.base.properties_mut()
    }

    /// Add a square block; its id is its position among blocks
    pub fn add_block(&mut self, text: impl Into<String>) -> &mut Block {
        let index = self.blocks.len();
        let block = Block::new(BlockId::new(index), text);
        trace!(id = index, text = block.text(), "Added block");
        self.blocks.push(block);
        self.layout.push(LayoutItem::Block(index));
        &mut self.blocks[index]
    }

    /// Add a link between two blocks. Ids are not checked against this
    /// diagram.
    pub fn add_link(&mut self, from: BlockId, to: BlockId) -> &mut BlockLink {
        let index = self.links.len();
        trace!(from = %from, to = %to, "Added block link");
        self.links.push(BlockLink::new(from, to));
        &mut self.links[index]
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn links(&self) -> &[BlockLink] {
        &self.links
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(id.index())
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(id.index())
    }

    /// Render the body without front-matter
    pub fn body(&self) -> String {
        let mut out = format!("{}\n", DiagramKind::Block.keyword());
        if self.columns != 0 {
            out.push_str(&format!("columns {}\n", self.columns));
        }
        for item in &self.layout {
            match *item {
                LayoutItem::Block(index) => out.push_str(&self.blocks[index].render("")),
                LayoutItem::Space => out.push_str("space\n"),
                LayoutItem::SpaceWithWidth(width) => out.push_str(&format!("space:{}\n", width)),
            }
        }
        for link in &self.links {
            out.push_str(&link.render(""));
        }
        out
    }
}

impl Diagram for BlockDiagram {
    fn kind(&self) -> DiagramKind {
        DiagramKind::Block
    }

    fn render(&self) -> String {
        let render_span = span!(
            Level::DEBUG,
            "render_block",
            blocks = self.blocks.len(),
            links = self.links.len()
        );
        let _enter = render_span.enter();

        let text = self.base.wrap(&self.body());
        debug!(bytes = text.len(), "Rendered block diagram");
        text
    }
}

impl fmt::Display for BlockDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
