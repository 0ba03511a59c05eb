//! Data extraction seam
//!
//! Turning a simulation deck into tables is the job of a [`FrameSource`].
//! Exporters ask the source for a table and hand the result to the share
//! writer; they never look at deck contents themselves.

pub mod inventory;

use std::path::Path;

use crate::error::{Error, Result};
use crate::submodules::SubmoduleOptions;

pub use inventory::KeywordInventory;

/// Produces the table one submodule exports for one datafile
pub trait FrameSource {
    fn frame(&self, datafile: &Path, options: &SubmoduleOptions) -> Result<Table>;
}

/// A rectangular table of string cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Mark columns that identify a row. Names not among the columns are ignored.
    pub fn with_index<S: AsRef<str>>(mut self, index: impl IntoIterator<Item = S>) -> Self {
        self.index = index
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|name| self.columns.contains(name))
            .collect();
        self
    }

    /// Append a row; its width must match the column count
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::RaggedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column, in row order
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}
