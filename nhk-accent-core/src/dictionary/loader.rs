//! Dictionary initialization from whichever persisted form is freshest
//!
//! Three files are involved:
//!
//! - the source dictionary (read-only input),
//! - the derivative cache, rebuilt when absent or older than the source,
//! - the binary snapshot, rebuilt when not newer than the derivative cache.

use crate::dictionary::{cache, snapshot, Dictionary, DictionaryCompiler};
use crate::error::{AccentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Locations of the source dictionary and its derivatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabasePaths {
    /// Source accent dictionary
    pub source: PathBuf,
    /// Tab-separated derivative cache
    pub derivative: PathBuf,
    /// Binary snapshot of the loaded dictionary
    pub snapshot: PathBuf,
}

impl Default for DatabasePaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl DatabasePaths {
    /// Conventional file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            source: dir.join("ACCDB_unicode.csv"),
            derivative: dir.join("nhk_pronunciation.csv"),
            snapshot: dir.join("nhk_pronunciation.bin"),
        }
    }

    /// Whether the derivative cache must be regenerated from the source
    pub fn derivative_is_stale(&self) -> bool {
        if !self.source.exists() {
            return false;
        }
        match (modified(&self.source), modified(&self.derivative)) {
            (Some(source), Some(derivative)) => source > derivative,
            _ => true,
        }
    }

    /// Whether the snapshot can be used instead of the derivative cache
    pub fn snapshot_is_fresh(&self) -> bool {
        match (modified(&self.snapshot), modified(&self.derivative)) {
            (Some(snapshot), Some(derivative)) => snapshot > derivative,
            _ => false,
        }
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Regenerate the derivative cache from the source dictionary
pub fn rebuild_derivative(paths: &DatabasePaths) -> Result<Dictionary> {
    let (dictionary, _) = DictionaryCompiler::compile_file(&paths.source)?;
    cache::write_file(&dictionary, &paths.derivative)?;
    Ok(dictionary)
}

/// Load the dictionary, rebuilding stale derivatives on the way
pub fn load_or_build(paths: &DatabasePaths) -> Result<Dictionary> {
    if !paths.source.exists() && !paths.derivative.exists() {
        return Err(AccentError::MissingDatabase {
            accent_db: paths.source.clone(),
            derivative: paths.derivative.clone(),
        });
    }

    let dictionary = if paths.derivative_is_stale() {
        log::info!(
            "Derivative cache {} is missing or stale, rebuilding",
            paths.derivative.display()
        );
        rebuild_derivative(paths)?
    } else {
        if paths.snapshot_is_fresh() {
            match snapshot::read_file(&paths.snapshot) {
                Ok(dictionary) => {
                    log::info!("Loaded dictionary snapshot {}", paths.snapshot.display());
                    return Ok(dictionary);
                }
                Err(e) => log::warn!(
                    "Ignoring unreadable snapshot {}: {e}",
                    paths.snapshot.display()
                ),
            }
        }
        let dictionary = cache::read_file(&paths.derivative)?;
        log::info!(
            "Loaded {} keys from {}",
            dictionary.len(),
            paths.derivative.display()
        );
        dictionary
    };

    if let Err(e) = snapshot::write_file(&dictionary, &paths.snapshot) {
        log::warn!("Could not write snapshot {}: {e}", paths.snapshot.display());
    }
    Ok(dictionary)
}
