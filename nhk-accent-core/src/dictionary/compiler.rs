//! Source dictionary compilation

use crate::dictionary::Dictionary;
use crate::domain::{AccentRecord, DatabaseEntry};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Counters reported after a compile run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    /// Records registered in the dictionary
    pub records: usize,
    /// Lines or records skipped as malformed
    pub skipped: usize,
}

/// Builds a [`Dictionary`] from source records
#[derive(Debug, Default)]
pub struct DictionaryCompiler {
    dictionary: Dictionary,
    stats: CompileStats,
}

impl DictionaryCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one record under its NHK-form and kanji-expression keys
    pub fn add_record(&mut self, record: &AccentRecord) -> Result<()> {
        let entry = DatabaseEntry::from_record(record)?;
        for key in record.lookup_keys() {
            if key.is_empty() {
                continue;
            }
            self.dictionary.insert(key, entry.clone());
        }
        self.stats.records += 1;
        Ok(())
    }

    /// Parse and register one source line, skipping it when malformed.
    ///
    /// Blank lines are ignored.
    pub fn add_line(&mut self, line_no: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let added = AccentRecord::parse(line).and_then(|record| self.add_record(&record));
        if let Err(e) = added {
            log::warn!("Skipping source line {line_no}: {e}");
            self.stats.skipped += 1;
        }
    }

    pub fn stats(&self) -> CompileStats {
        self.stats
    }

    pub fn finish(self) -> (Dictionary, CompileStats) {
        (self.dictionary, self.stats)
    }

    /// Compile already parsed records, skipping the malformed ones
    pub fn compile<'a>(records: impl IntoIterator<Item = &'a AccentRecord>) -> Dictionary {
        let mut compiler = Self::new();
        for record in records {
            if let Err(e) = compiler.add_record(record) {
                log::warn!("Skipping record {}: {e}", record.nid);
                compiler.stats.skipped += 1;
            }
        }
        compiler.finish().0
    }

    /// Compile source text, one record per line
    pub fn compile_str(source: &str) -> (Dictionary, CompileStats) {
        let mut compiler = Self::new();
        for (i, line) in source.lines().enumerate() {
            compiler.add_line(i + 1, line);
        }
        compiler.finish()
    }

    /// Compile the source dictionary file
    pub fn compile_file(path: &Path) -> Result<(Dictionary, CompileStats)> {
        let source = fs::read_to_string(path)?;
        let (dictionary, stats) = Self::compile_str(&source);
        log::info!(
            "Compiled {} records into {} keys from {} ({} skipped)",
            stats.records,
            dictionary.len(),
            path.display(),
            stats.skipped
        );
        Ok((dictionary, stats))
    }
}
