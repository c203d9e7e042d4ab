//! Serializable lookup results

use crate::application::Pronunciations;
use serde::{Deserialize, Serialize};

/// One rendered candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPronunciation {
    pub markup: String,
    pub ends_high: bool,
}

/// Candidates found for one sub-expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub key: String,
    pub pronunciations: Vec<RenderedPronunciation>,
}

/// Everything found for one expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOutput {
    pub expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    pub entries: Vec<LookupEntry>,
}

impl LookupOutput {
    pub(crate) fn new(expression: &str, reading: Option<&str>, found: &Pronunciations) -> Self {
        let entries = found
            .iter()
            .map(|(key, candidates)| LookupEntry {
                key: key.to_string(),
                pronunciations: candidates
                    .iter()
                    .map(|p| RenderedPronunciation {
                        markup: p.markup.clone(),
                        ends_high: p.ends_high,
                    })
                    .collect(),
            })
            .collect();

        Self {
            expression: expression.to_string(),
            reading: reading.map(str::to_string),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
