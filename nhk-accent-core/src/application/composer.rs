//! Phrases with explicit word boundaries
//!
//! `今日|は|雨` is looked up word by word. A word that ends high makes the
//! next one start high, so the rendered phrase reads as one pitch contour.

use crate::application::resolver::{LookupRequest, LookupResolver};
use crate::domain::Pronunciation;

/// Composes phrase pronunciations from per-word lookups
pub struct PhraseComposer<'a> {
    resolver: &'a LookupResolver,
}

impl<'a> PhraseComposer<'a> {
    pub fn new(resolver: &'a LookupResolver) -> Self {
        Self { resolver }
    }

    fn separators(&self) -> &[char] {
        &self.resolver.lookup_config().word_separators
    }

    /// Whether `expr` carries word boundaries the composer should handle
    pub fn is_phrase(&self, expr: &str) -> bool {
        self.resolver.lookup_config().parse_words && expr.contains(self.separators())
    }

    /// Render the whole phrase, or `""` when any word has no pronunciation
    pub fn compose(&self, expr: &str, reading: Option<&str>) -> String {
        self.compose_pronunciation(expr, reading)
            .map(|p| p.markup)
            .unwrap_or_default()
    }

    /// Like [`compose`](Self::compose), keeping the final pitch state
    pub fn compose_pronunciation(&self, expr: &str, reading: Option<&str>) -> Option<Pronunciation> {
        if !self.is_phrase(expr) {
            return None;
        }

        let words: Vec<&str> = expr.split(self.separators()).collect();
        let readings: Option<Vec<&str>> = reading
            .map(|r| r.split(self.separators()).collect::<Vec<_>>())
            .filter(|parts| parts.len() == words.len());
        if reading.is_some() && readings.is_none() {
            log::debug!("Ignoring reading for '{expr}': word counts differ");
        }

        let mut markup = String::new();
        let mut carry_high = false;
        for (i, word) in words.iter().enumerate() {
            let request = LookupRequest::new(word)
                .reading(readings.as_ref().map(|r| r[i]))
                .carry_high(carry_high);
            let found = self.resolver.resolve(request);
            let Some(pronunciation) = found.first() else {
                log::debug!("No pronunciation for word '{word}' of '{expr}'");
                return None;
            };
            markup.push_str(&pronunciation.markup);
            carry_high = pronunciation.ends_high;
        }

        Some(Pronunciation {
            markup,
            ends_high: carry_high,
        })
    }
}
