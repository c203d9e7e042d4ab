//! Lookup command implementation

use crate::commands::GlobalArgs;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use anyhow::Result;
use clap::Args;
use nhk_accent_core::{FormatOptions, Pronouncer};
use std::io;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Expression to look up; `|` separates the words of a phrase
    #[arg(value_name = "EXPRESSION")]
    pub expression: String,

    /// Kana reading used to pick among candidates
    #[arg(short, long, value_name = "KANA")]
    pub reading: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print every key with its candidates on separate lines
    #[arg(long)]
    pub view: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Joined pronunciation markup
    Text,
    /// JSON array with every key and candidate
    Json,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        self.global.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.global.load_config()?;
        let pronouncer = Pronouncer::from_config(&config)?;
        let lookup = pronouncer.lookup(&self.expression, self.reading.as_deref());
        if lookup.is_empty() {
            log::warn!("No pronunciation found for '{}'", self.expression);
        }

        let mut formatter = self.create_formatter();
        formatter.format_lookup(&lookup)?;
        formatter.finish()
    }

    fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self.format {
            OutputFormat::Text => {
                let options = if self.view {
                    FormatOptions::lookup_view()
                } else {
                    FormatOptions::default()
                };
                Box::new(TextFormatter::stdout(options))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout())),
        }
    }
}
