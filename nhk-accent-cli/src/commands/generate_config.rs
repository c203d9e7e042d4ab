//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use nhk_accent_core::AccentConfig;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = AccentConfig::template()?;

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if output.exists() && !self.force {
            return Err(CliError::OutputExists(output.display().to_string()).into());
        }

        fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Point [database] at your copy of the accent dictionary");
        println!("2. Build the derivative files:");
        println!("   nhk-accent build --config {}", output.display());
        println!("3. Look something up:");
        println!("   nhk-accent lookup 雨 --config {}", output.display());

        Ok(())
    }
}
