//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use nhk_accent_core::AccentConfig;
use std::path::PathBuf;

pub mod annotate;
pub mod build;
pub mod generate_config;
pub mod lookup;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compile the source dictionary into the derivative cache and snapshot
    Build(build::BuildArgs),

    /// Look up the pronunciation of an expression
    Lookup(lookup::LookupArgs),

    /// Add a pronunciation column to tab-separated word lists
    Annotate(annotate::AnnotateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Build(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::Annotate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by the commands that touch the dictionary
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "NHK_ACCENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the source dictionary and its derivatives
    #[arg(short = 'd', long, value_name = "DIR", env = "NHK_ACCENT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second init (e.g. in tests) is harmless
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }

    /// Load the configuration these options point at
    pub fn load_config(&self) -> Result<AccentConfig> {
        crate::config::load_config(self.config.as_deref(), self.data_dir.as_deref())
    }
}
