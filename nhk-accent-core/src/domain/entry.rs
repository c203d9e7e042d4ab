//! Compact dictionary entries derived from source records

use crate::domain::record::AccentRecord;
use crate::error::{AccentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Persisted form of an empty position list
pub const NO_POSITIONS: &str = "-";

/// 1-based mora indices that carry a nasal or devoicing mark.
///
/// The source stores these as digit strings padded with `0`; an empty list is
/// written as [`NO_POSITIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoraPositions(Vec<u8>);

impl MoraPositions {
    /// Positions from the raw source field, dropping the `0` padding
    pub fn from_source_field(raw: &str) -> Result<Self> {
        let mut positions = Vec::new();
        for c in raw.trim().chars() {
            match c.to_digit(10) {
                Some(0) => {}
                Some(d) => positions.push(d as u8),
                None => {
                    return Err(AccentError::malformed(format!(
                        "position field '{raw}' contains non-digit '{c}'"
                    )))
                }
            }
        }
        Ok(Self(positions))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the 1-based mora index is marked
    pub fn contains(&self, mora: usize) -> bool {
        self.0.iter().any(|&p| p as usize == mora)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().map(|&p| p as usize)
    }
}

impl fmt::Display for MoraPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NO_POSITIONS);
        }
        for p in &self.0 {
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

impl FromStr for MoraPositions {
    type Err = AccentError;

    /// Parse the persisted form written by [`fmt::Display`]
    fn from_str(s: &str) -> Result<Self> {
        if s == NO_POSITIONS {
            return Ok(Self::default());
        }
        let positions = Self::from_source_field(s)?;
        if positions.is_empty() {
            return Err(AccentError::malformed(format!(
                "empty position list must be written as '{NO_POSITIONS}', found '{s}'"
            )));
        }
        Ok(positions)
    }
}

/// One pronunciation candidate stored under a lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseEntry {
    /// Katakana spelling of the headword
    pub kana: String,
    /// Accent code, possibly shorter than the spelling
    pub accent: String,
    pub nasal: MoraPositions,
    pub no_pronounce: MoraPositions,
}

impl DatabaseEntry {
    /// Create a validated entry
    pub fn new(
        kana: impl Into<String>,
        accent: impl Into<String>,
        nasal: MoraPositions,
        no_pronounce: MoraPositions,
    ) -> Result<Self> {
        let entry = Self {
            kana: kana.into(),
            accent: accent.into(),
            nasal,
            no_pronounce,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Derive the entry for a source record.
    ///
    /// The spelling comes from `midashigo`, not the devoicing-adjusted
    /// `midashigo1`, so renderings start from a clean base string.
    pub fn from_record(record: &AccentRecord) -> Result<Self> {
        Self::new(
            record.midashigo.as_str(),
            record.ac.as_str(),
            MoraPositions::from_source_field(&record.nasal_sound_pos)?,
            MoraPositions::from_source_field(&record.no_pronounce_pos)?,
        )
    }

    /// Check the accent code against the spelling
    pub fn validate(&self) -> Result<()> {
        validate_accent(&self.accent, self.kana.chars().count())
    }
}

/// Accent digits must be 0, 1 or 2 and fit within `text_len` morae
pub fn validate_accent(accent: &str, text_len: usize) -> Result<()> {
    if let Some(c) = accent.chars().find(|c| !matches!(c, '0' | '1' | '2')) {
        return Err(AccentError::malformed(format!(
            "accent code '{accent}' contains invalid digit '{c}'"
        )));
    }
    let accent_len = accent.chars().count();
    if accent_len > text_len {
        return Err(AccentError::malformed(format!(
            "accent code '{accent}' has {accent_len} digits for {text_len} morae"
        )));
    }
    Ok(())
}
