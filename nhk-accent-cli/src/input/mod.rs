//! Input handling module

pub mod file_reader;

pub use file_reader::{FileReader, WordRow};

use crate::error::CliError;
use crate::output::STAGING_SUFFIX;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

fn is_staging_file(path: &Path) -> bool {
    path.to_str().is_some_and(|name| name.ends_with(STAGING_SUFFIX))
}

/// Expand word-list patterns into a sorted, de-duplicated file list.
///
/// Staging files left behind by an interrupted in-place run are skipped.
/// A pattern matching nothing only warns; matching nothing overall fails.
pub fn resolve_word_lists(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path in paths {
            let path = path.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if !path.is_file() {
                continue;
            }
            if is_staging_file(&path) {
                log::warn!("Skipping leftover staging file {}", path.display());
                continue;
            }
            files.push(path);
        }
        if files.len() == before {
            log::warn!("Pattern '{pattern}' matched no word lists");
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();
    Ok(files)
}
