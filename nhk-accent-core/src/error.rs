//! Error types for dictionary compilation and pronunciation lookup

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, loading or querying the accent dictionary
#[derive(Debug, Error)]
pub enum AccentError {
    /// A source line or derived entry does not have the expected shape
    #[error("malformed record: {reason}")]
    MalformedRecord {
        /// What was wrong with the record
        reason: String,
    },

    /// Expression-side and reading-side particles disagree
    #[error("ambiguous particle: expression has '{expression}', reading has '{reading}'")]
    AmbiguousParticle {
        /// Particle found (or inferred) on the expression side
        expression: String,
        /// Particle found (or inferred) on the reading side
        reading: String,
    },

    /// The external reading segmenter could not answer a request
    #[error("segmenter unavailable: {0}")]
    SegmenterUnavailable(String),

    /// Neither the source dictionary nor the derivative cache exists
    #[error(
        "could not locate the source dictionary ({}) or the derivative cache ({})",
        accent_db.display(),
        derivative.display()
    )]
    MissingDatabase {
        /// Expected path of the source dictionary
        accent_db: PathBuf,
        /// Expected path of the derivative cache
        derivative: PathBuf,
    },

    /// Binary snapshot could not be written or read back
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AccentError {
    /// Shorthand for [`AccentError::MalformedRecord`]
    pub fn malformed(reason: impl Into<String>) -> Self {
        AccentError::MalformedRecord {
            reason: reason.into(),
        }
    }
}

/// Result type for accent operations
pub type Result<T> = std::result::Result<T, AccentError>;
