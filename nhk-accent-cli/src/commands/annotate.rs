//! Annotate command implementation
//!
//! Fills the pronunciation column of tab-separated word lists, the batch
//! counterpart of `lookup`.

use crate::commands::GlobalArgs;
use crate::input::{resolve_word_lists, FileReader, WordRow};
use crate::output::write_atomic;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use nhk_accent_core::{FormatOptions, Pronouncer};
use std::io::{self, Write};

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Word lists or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Rewrite the input files instead of printing to stdout
    #[arg(long)]
    pub in_place: bool,

    /// Replace pronunciations that are already present
    #[arg(long)]
    pub regenerate: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// What happened to one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Added,
    Kept,
    Missing,
    Blank,
}

/// Row counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotateStats {
    pub added: usize,
    pub kept: usize,
    pub missing: usize,
}

impl AnnotateStats {
    fn record(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::Added => self.added += 1,
            RowOutcome::Kept => self.kept += 1,
            RowOutcome::Missing => self.missing += 1,
            RowOutcome::Blank => {}
        }
    }
}

/// Layout for a single TSV cell: no newlines between keys
pub fn cell_format() -> FormatOptions {
    FormatOptions {
        multi_separator: "<br/>".to_string(),
        ..FormatOptions::default()
    }
}

/// Annotate one line of a word list
pub fn annotate_line(
    pronouncer: &Pronouncer,
    line: &str,
    regenerate: bool,
    options: &FormatOptions,
) -> (String, RowOutcome) {
    if line.trim().is_empty() {
        return (line.to_string(), RowOutcome::Blank);
    }

    let mut row = WordRow::parse(line);
    if row.pronunciation.is_some() && !regenerate {
        return (line.to_string(), RowOutcome::Kept);
    }

    let formatted = pronouncer.formatted(&row.expression, row.reading.as_deref(), options);
    let outcome = if formatted.is_empty() {
        log::warn!("No pronunciation found for '{}'", row.expression);
        RowOutcome::Missing
    } else {
        RowOutcome::Added
    };
    row.pronunciation = Some(formatted).filter(|p| !p.is_empty());
    (row.to_line(), outcome)
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.global.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = self.global.load_config()?;
        let pronouncer = Pronouncer::from_config(&config)?;
        let files = resolve_word_lists(&self.input)?;
        log::info!("Annotating {} file(s)", files.len());

        let contents = files
            .iter()
            .map(|path| FileReader::read_text(path))
            .collect::<Result<Vec<_>>>()?;
        let total_rows: usize = contents.iter().map(|c| c.lines().count()).sum();

        let mut progress = ProgressReporter::new(self.global.quiet);
        progress.init_rows(total_rows as u64);

        let options = cell_format();
        let mut stats = AnnotateStats::default();
        let mut stdout = io::stdout().lock();

        for (path, content) in files.iter().zip(&contents) {
            progress.start_file(&path.display().to_string());

            let mut annotated = String::with_capacity(content.len() * 2);
            for line in content.lines() {
                let (line, outcome) = annotate_line(&pronouncer, line, self.regenerate, &options);
                stats.record(outcome);
                annotated.push_str(&line);
                annotated.push('\n');
                progress.row_completed();
            }

            if self.in_place {
                write_atomic(path, &annotated)?;
            } else {
                stdout.write_all(annotated.as_bytes())?;
            }
        }
        stdout.flush()?;
        progress.finish();

        if !self.global.quiet {
            eprintln!(
                "Added {} pronunciation(s), kept {}, not found {}",
                stats.added, stats.kept, stats.missing
            );
        }
        Ok(())
    }
}
