//! nhk-accent CLI library
//!
//! This library provides the command-line interface for the NHK pitch-accent
//! dictionary: building the derivative files, looking up expressions and
//! annotating word lists.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
