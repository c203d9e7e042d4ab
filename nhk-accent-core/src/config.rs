//! Configuration structures and validation
//!
//! This module defines the TOML schema consumed by the lookup engine. Every
//! section is optional; missing keys fall back to the defaults below.

use crate::dictionary::DatabasePaths;
use crate::domain::pitch::{
    CLASS_DEVOICED, CLASS_FALL, CLASS_HIGH, CLASS_LOW_POST, CLASS_LOW_PRE, CLASS_NASAL,
    CLASS_PARTICLE_HIGH, CLASS_PARTICLE_LOW,
};
use crate::error::{AccentError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// Separator between a word and its particle, e.g. `箸-が`
    pub const PARTICLE_SEPARATORS: &[char] = &['-'];

    /// Separator between the words of a phrase, e.g. `今日|は|雨`
    pub const WORD_SEPARATORS: &[char] = &['|'];

    /// How long to wait for one reply from the external segmenter
    pub const SEGMENTER_TIMEOUT_MS: u64 = 5_000;
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccentConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub segmenter: SegmenterConfig,
    #[serde(default)]
    pub database: DatabasePaths,
}

/// Expression parsing and rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub particle_separators: Vec<char>,
    pub word_separators: Vec<char>,
    pub parse_particles: bool,
    pub parse_words: bool,
    /// Render over the user's reading instead of the dictionary spelling
    pub preserve_spelling: bool,
    /// Render dictionary spellings in hiragana
    pub pronunciation_hiragana: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            particle_separators: defaults::PARTICLE_SEPARATORS.to_vec(),
            word_separators: defaults::WORD_SEPARATORS.to_vec(),
            parse_particles: true,
            parse_words: true,
            preserve_spelling: true,
            pronunciation_hiragana: false,
        }
    }
}

/// Markup styling options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub annotate_nasal: bool,
    pub annotate_devoiced: bool,
    /// Replace class attributes with the inline styles in `classes`
    pub inline_style: bool,
    /// Class attribute to inline style attribute
    pub classes: BTreeMap<String, String>,
}

fn class_attr(class: &str) -> String {
    format!("class='{class}'")
}

impl Default for StyleConfig {
    fn default() -> Self {
        let classes = [
            (CLASS_LOW_PRE, "style='color:#3366cc'"),
            (CLASS_HIGH, "style='color:#cc3333;text-decoration:overline'"),
            (
                CLASS_FALL,
                "style='color:#cc3333;text-decoration:overline;border-right:1px solid #cc3333'",
            ),
            (CLASS_LOW_POST, "style='color:#3366cc'"),
            (CLASS_NASAL, "style='color:#aa55aa'"),
            (CLASS_DEVOICED, "style='color:#999999'"),
            (CLASS_PARTICLE_HIGH, "style='color:#cc3333;font-size:80%'"),
            (CLASS_PARTICLE_LOW, "style='color:#3366cc;font-size:80%'"),
        ]
        .into_iter()
        .map(|(class, style)| (class_attr(class), style.to_string()))
        .collect();

        Self {
            annotate_nasal: true,
            annotate_devoiced: true,
            inline_style: true,
            classes,
        }
    }
}

impl StyleConfig {
    /// Apply the inline style map to rendered markup
    pub fn inline(&self, markup: &str) -> String {
        if !self.inline_style {
            return markup.to_string();
        }
        self.classes
            .iter()
            .fold(markup.to_string(), |text, (class, style)| {
                text.replace(class.as_str(), style)
            })
    }
}

/// External morphological segmenter options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub enabled: bool,
    /// Directory holding a MeCab build with its dictionary and `mecabrc`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,
    /// Explicit executable, taking precedence over `base_path`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<PathBuf>,
    pub timeout_ms: u64,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_path: None,
            command: None,
            timeout_ms: defaults::SEGMENTER_TIMEOUT_MS,
        }
    }
}

impl AccentConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AccentError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: AccentConfig = toml::from_str(&content).map_err(|e| {
            AccentError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let lookup = &self.lookup;
        if let Some(c) = lookup
            .particle_separators
            .iter()
            .find(|c| lookup.word_separators.contains(c))
        {
            return Err(AccentError::Configuration(format!(
                "'{c}' is configured both as a particle and a word separator"
            )));
        }

        if lookup.parse_particles && lookup.particle_separators.is_empty() {
            return Err(AccentError::Configuration(
                "particle parsing is enabled but no particle separators are defined".into(),
            ));
        }

        if lookup.parse_words && lookup.word_separators.is_empty() {
            return Err(AccentError::Configuration(
                "word parsing is enabled but no word separators are defined".into(),
            ));
        }

        if self.segmenter.timeout_ms == 0 {
            return Err(AccentError::Configuration(
                "segmenter timeout_ms must be greater than 0".into(),
            ));
        }

        if self.segmenter.enabled
            && self.segmenter.base_path.is_none()
            && self.segmenter.command.is_none()
        {
            return Err(AccentError::Configuration(
                "segmenter is enabled but neither base_path nor command is set".into(),
            ));
        }

        Ok(())
    }

    /// Render the default configuration as commented TOML
    pub fn template() -> Result<String> {
        let body = toml::to_string_pretty(&AccentConfig::default())
            .map_err(|e| AccentError::Configuration(e.to_string()))?;
        Ok(format!(
            "# NHK pitch-accent lookup configuration\n\
             #\n\
             # [lookup]   expression parsing and rendering\n\
             # [style]    markup annotations and inline styles\n\
             # [segmenter] optional external MeCab fallback\n\
             # [database] source dictionary and derivative files\n\n{body}"
        ))
    }
}
