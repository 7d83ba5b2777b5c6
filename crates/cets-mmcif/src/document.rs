use std::fmt;

use crate::SEPARATOR;
use crate::block::LoopBlock;

/// A single `data_` block with its category tables in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct MmcifDocument {
    name: String,
    blocks: Vec<LoopBlock>,
}

impl MmcifDocument {
    pub fn new(name: impl Into<String>, blocks: Vec<LoopBlock>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn blocks(&self) -> &[LoopBlock] {
        &self.blocks
    }

    /// Blocks that contribute lines to the output.
    pub fn non_empty_blocks(&self) -> impl Iterator<Item = &LoopBlock> {
        self.blocks.iter().filter(|block| !block.is_empty())
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("data_{}", self.name), SEPARATOR.to_string()];
        for block in &self.blocks {
            lines.extend(block.lines());
        }
        lines
    }

    /// Newline-joined document text with a trailing newline.
    pub fn render(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }
}

impl fmt::Display for MmcifDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
