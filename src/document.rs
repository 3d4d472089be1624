//! Plain-text document loading.
//!
//! The pager renders files verbatim, one line per row. Tabs are expanded
//! and carriage returns stripped at load time so rendering and width
//! accounting work on clean lines.

use std::path::Path;

use anyhow::{Context, Result};

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| {
                let line = line.trim_end_matches('\r');
                if line.contains('\t') {
                    line.replace('\t', &" ".repeat(TAB_WIDTH))
                } else {
                    line.to_string()
                }
            })
            .collect();
        Self { lines }
    }

    /// Read a file from disk. Invalid UTF-8 is replaced rather than
    /// rejected, so the pager can still show mostly-text files.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self::from_text(&String::from_utf8_lossy(&bytes)))
    }

    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_at(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
