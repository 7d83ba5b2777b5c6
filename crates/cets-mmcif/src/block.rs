//! `loop_` tables.

use crate::error::{MmcifError, Result};
use crate::value::CifValue;
use crate::{LOOP_KEYWORD, SEPARATOR};

/// A looped mmCIF category with a fixed column set.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopBlock {
    category: String,
    columns: Vec<String>,
    rows: Vec<Vec<CifValue>>,
}

impl LoopBlock {
    pub fn new(category: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            category: category.into(),
            columns: columns.iter().map(|column| (*column).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CifValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row in column order.
    ///
    /// # Errors
    ///
    /// Returns [`MmcifError::RowWidth`] if the row does not have one value
    /// per column.
    pub fn push_row(&mut self, values: Vec<CifValue>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(MmcifError::RowWidth {
                category: self.category.clone(),
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Full data name of a column, e.g. `_em_map.file`.
    pub fn tag(&self, column: &str) -> String {
        format!("_{}.{}", self.category, column)
    }

    /// Text lines of the block.
    ///
    /// An empty block has no lines at all; otherwise the layout is the
    /// separator, `loop_`, one tag per column, one line per row, and a
    /// closing separator.
    pub fn lines(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let mut lines = Vec::with_capacity(3 + self.columns.len() + self.rows.len());
        lines.push(SEPARATOR.to_string());
        lines.push(LOOP_KEYWORD.to_string());
        for column in &self.columns {
            lines.push(self.tag(column));
        }
        for row in &self.rows {
            let tokens: Vec<String> = row.iter().map(ToString::to_string).collect();
            lines.push(tokens.join(" "));
        }
        lines.push(SEPARATOR.to_string());
        lines
    }
}
