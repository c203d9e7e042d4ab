//! Build command implementation

use crate::commands::GlobalArgs;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use nhk_accent_core::dictionary::{cache, snapshot};
use nhk_accent_core::DictionaryCompiler;
use std::path::PathBuf;

/// Arguments for the build command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Source dictionary (default: the configured one)
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl BuildArgs {
    /// Execute the build command
    pub fn execute(&self) -> Result<()> {
        self.global.init_logging();
        let mut paths = self.global.load_config()?.database;
        if let Some(source) = &self.source {
            paths.source = source.clone();
        }

        if !paths.source.is_file() {
            return Err(CliError::FileNotFound(paths.source.display().to_string()).into());
        }

        log::info!("Compiling {}", paths.source.display());
        let (dictionary, stats) = DictionaryCompiler::compile_file(&paths.source)
            .with_context(|| format!("Failed to compile {}", paths.source.display()))?;
        cache::write_file(&dictionary, &paths.derivative)
            .with_context(|| format!("Failed to write {}", paths.derivative.display()))?;
        snapshot::write_file(&dictionary, &paths.snapshot)
            .with_context(|| format!("Failed to write {}", paths.snapshot.display()))?;

        if !self.global.quiet {
            println!(
                "Compiled {} records into {} keys ({} entries), skipped {}",
                stats.records,
                dictionary.len(),
                dictionary.entry_count(),
                stats.skipped
            );
            println!("  Derivative cache: {}", paths.derivative.display());
            println!("  Snapshot: {}", paths.snapshot.display());
        }
        Ok(())
    }
}
