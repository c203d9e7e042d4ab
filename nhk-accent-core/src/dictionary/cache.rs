//! Derivative cache: a tab-separated dump of the compiled dictionary
//!
//! One row per (key, entry) pair:
//!
//! ```text
//! key<TAB>kana<TAB>accent<TAB>nasal positions<TAB>no-pronounce positions
//! ```
//!
//! Rows are written in dictionary insertion order, so compiling an unchanged
//! source twice yields byte-identical files.

use crate::dictionary::{temp_sibling, Dictionary};
use crate::domain::DatabaseEntry;
use crate::error::{AccentError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const COLUMN_COUNT: usize = 5;

/// Write the dictionary rows to `writer`
pub fn write_rows<W: Write>(dictionary: &Dictionary, mut writer: W) -> Result<()> {
    for (key, candidates) in dictionary.iter() {
        for entry in candidates {
            writeln!(
                writer,
                "{key}\t{}\t{}\t{}\t{}",
                entry.kana, entry.accent, entry.nasal, entry.no_pronounce
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Parse one cache row into its key and entry
pub fn parse_row(line: &str) -> Result<(String, DatabaseEntry)> {
    let columns: Vec<&str> = line.split('\t').collect();
    let [key, kana, accent, nasal, no_pronounce] = columns.as_slice() else {
        return Err(AccentError::malformed(format!(
            "expected {COLUMN_COUNT} cache columns, found {}",
            columns.len()
        )));
    };

    let entry = DatabaseEntry::new(*kana, *accent, nasal.parse()?, no_pronounce.parse()?)?;
    Ok((key.to_string(), entry))
}

/// Read dictionary rows from `reader`
pub fn read_rows<R: BufRead>(reader: R) -> Result<Dictionary> {
    let mut dictionary = Dictionary::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        let (key, entry) = parse_row(line).map_err(|e| {
            AccentError::malformed(format!("derivative cache line {}: {e}", i + 1))
        })?;
        dictionary.insert(&key, entry);
    }
    Ok(dictionary)
}

/// Write the derivative cache to `path`.
///
/// The rows go to a sibling temporary file first and are renamed into place,
/// so readers never observe a partially written cache.
pub fn write_file(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let tmp = temp_sibling(path);
    {
        let file = File::create(&tmp)?;
        write_rows(dictionary, BufWriter::new(file))?;
    }
    fs::rename(&tmp, path)?;
    log::info!(
        "Wrote {} cache rows to {}",
        dictionary.entry_count(),
        path.display()
    );
    Ok(())
}

/// Read the derivative cache at `path`
pub fn read_file(path: &Path) -> Result<Dictionary> {
    let file = File::open(path)?;
    read_rows(BufReader::new(file))
}
