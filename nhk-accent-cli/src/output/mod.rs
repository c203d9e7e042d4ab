//! Output formatting module

use anyhow::{Context, Result};
use nhk_accent_core::LookupOutput;
use std::fs;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the result of one lookup
    fn format_lookup(&mut self, lookup: &LookupOutput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Appended to a file name while its replacement is being written
pub const STAGING_SUFFIX: &str = ".tmp";

/// Replace `path` with `content` via a temporary sibling and a rename
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(STAGING_SUFFIX);
    fs::write(&tmp, content).with_context(|| format!("Failed to write {}", path.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.tsv");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("words.tsv.tmp").exists());
    }
}
