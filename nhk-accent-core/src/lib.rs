//! NHK pitch-accent dictionary compiler and pronunciation engine
//!
//! This crate turns the NHK accent dictionary into styled pitch-accent markup
//! for Japanese words and phrases. Source rows are compiled into a compact
//! [`Dictionary`], persisted as a tab-separated derivative cache plus a binary
//! snapshot, and queried through a [`LookupResolver`] that falls back to
//! splitting expressions when they are not keys themselves.
//!
//! # Architecture
//!
//! - **Domain layer**: records, entries, kana and markup helpers, pitch rendering
//! - **Dictionary layer**: compilation and the persisted forms
//! - **Application layer**: resolution tiers, particles and phrase composition
//! - **API layer**: the [`Pronouncer`] facade used by hosts and the CLI
//!
//! # Example
//!
//! ```rust
//! use nhk_accent_core::{AccentConfig, DictionaryCompiler, FormatOptions, Pronouncer};
//! use std::sync::Arc;
//!
//! let source = "1,10,A1,1,1,アメ,アメ,雨,アメ,2,0,0,,,,アメ,1,1,12\n";
//! let (dictionary, _stats) = DictionaryCompiler::compile_str(source);
//!
//! let mut config = AccentConfig::default();
//! config.style.inline_style = false;
//! let pronouncer = Pronouncer::new(Arc::new(dictionary), &config);
//!
//! let markup = pronouncer.formatted("雨", None, &FormatOptions::default());
//! assert_eq!(
//!     markup,
//!     "<span class='pitch-high'>ア</span><span class='pitch-fall'>メ</span>"
//! );
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod dictionary;
pub mod domain;
pub mod error;

pub use api::{FormatOptions, LookupEntry, LookupOutput, Pronouncer, RenderedPronunciation};
pub use application::{
    LookupRequest, LookupResolver, MecabSegmenter, PhraseComposer, Pronunciations,
    ReadingSegmenter,
};
pub use config::AccentConfig;
pub use dictionary::{CompileStats, DatabasePaths, Dictionary, DictionaryCompiler};
pub use domain::{DatabaseEntry, PitchAccentFormatter, Pronunciation};
pub use error::{AccentError, Result};
