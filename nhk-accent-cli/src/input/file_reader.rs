//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }
}

/// One row of a word list: `expression<TAB>reading<TAB>pronunciation<TAB>...`
///
/// Only the expression is required. Columns after the pronunciation are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRow {
    pub expression: String,
    pub reading: Option<String>,
    pub pronunciation: Option<String>,
    pub extra: Vec<String>,
}

fn non_empty(column: Option<&str>) -> Option<String> {
    column
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

impl WordRow {
    pub fn parse(line: &str) -> Self {
        let mut columns = line.split('\t');
        let expression = columns.next().unwrap_or_default().to_string();
        let reading = non_empty(columns.next());
        let pronunciation = non_empty(columns.next());
        Self {
            expression,
            reading,
            pronunciation,
            extra: columns.map(str::to_string).collect(),
        }
    }

    /// Render the row back, always with the pronunciation column present
    pub fn to_line(&self) -> String {
        let mut columns = vec![
            self.expression.as_str(),
            self.reading.as_deref().unwrap_or_default(),
            self.pronunciation.as_deref().unwrap_or_default(),
        ];
        columns.extend(self.extra.iter().map(String::as_str));
        columns.join("\t")
    }
}
