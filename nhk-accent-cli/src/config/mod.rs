//! Configuration loading for CLI commands

use crate::error::CliError;
use anyhow::Result;
use nhk_accent_core::{AccentConfig, DatabasePaths};
use std::path::Path;

/// Load the engine configuration.
///
/// Without a file the defaults are used. `data_dir`, when given, replaces the
/// configured database locations with the conventional file names inside it.
pub fn load_config(path: Option<&Path>, data_dir: Option<&Path>) -> Result<AccentConfig> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            AccentConfig::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()))?
        }
        None => AccentConfig::default(),
    };

    if let Some(dir) = data_dir {
        config.database = DatabasePaths::in_dir(dir);
    }

    config
        .validate()
        .map_err(|e| CliError::ConfigError(e.to_string()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None, None).unwrap();
        assert_eq!(config, AccentConfig::default());
    }

    #[test]
    fn test_data_dir_overrides_database() {
        let dir = TempDir::new().unwrap();
        let config = load_config(None, Some(dir.path())).unwrap();
        assert_eq!(config.database.source, dir.path().join("ACCDB_unicode.csv"));
    }

    #[test]
    fn test_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nhk-accent.toml");
        fs::write(&path, "[lookup]\npronunciation_hiragana = true\n").unwrap();

        let config = load_config(Some(&path), None).unwrap();
        assert!(config.lookup.pronunciation_hiragana);
    }

    #[test]
    fn test_invalid_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[lookup\n").unwrap();

        let err = load_config(Some(&path), None).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().starts_with("Configuration error:"));
    }
}
