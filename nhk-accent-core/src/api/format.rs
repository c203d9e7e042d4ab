//! Joining pronunciations into one string

use crate::api::LookupOutput;
use crate::application::Pronunciations;

/// Separators used when flattening [`Pronunciations`] into text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Between the candidates of one key
    pub single_separator: String,
    /// Between keys
    pub multi_separator: String,
    /// When set, each key is printed before its candidates followed by this
    pub expression_separator: Option<String>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            single_separator: " *** ".to_string(),
            multi_separator: "<br/>\n".to_string(),
            expression_separator: None,
        }
    }
}

impl FormatOptions {
    /// Layout for showing a manual lookup: one candidate per line, keys as headings
    pub fn lookup_view() -> Self {
        Self {
            single_separator: "<br/>\n".to_string(),
            multi_separator: "<br/><br/>\n".to_string(),
            expression_separator: Some(":<br/>\n".to_string()),
        }
    }

    pub fn format(&self, pronunciations: &Pronunciations) -> String {
        self.join(pronunciations.iter().map(|(key, candidates)| {
            (key, candidates.iter().map(|p| p.markup.as_str()).collect())
        }))
    }

    /// Same layout for an already serialized lookup
    pub fn format_lookup(&self, output: &LookupOutput) -> String {
        self.join(output.entries.iter().map(|entry| {
            (
                entry.key.as_str(),
                entry.pronunciations.iter().map(|p| p.markup.as_str()).collect(),
            )
        }))
    }

    fn join<'a>(&self, groups: impl Iterator<Item = (&'a str, Vec<&'a str>)>) -> String {
        groups
            .map(|(key, markups)| {
                let joined = markups.join(&self.single_separator);
                match &self.expression_separator {
                    Some(sep) => format!("{key}{sep}{joined}"),
                    None => joined,
                }
            })
            .collect::<Vec<_>>()
            .join(&self.multi_separator)
    }
}
