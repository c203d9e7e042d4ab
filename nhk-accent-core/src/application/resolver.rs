//! Expression lookup
//!
//! [`LookupResolver`] turns an expression (plus an optional reading hint)
//! into rendered pronunciations. An exact dictionary hit wins; otherwise the
//! configured [`FallbackTier`]s are tried in order until one produces
//! something.

use crate::application::fallback::{ExternalSegmenterTier, FallbackTier, SeparatorSplitTier};
use crate::application::particle::{reconcile, ParticleSplit};
use crate::application::reading::ReadingSegmenter;
use crate::config::{AccentConfig, LookupConfig, StyleConfig};
use crate::dictionary::Dictionary;
use crate::domain::kana::{contains_katakana, hiragana_to_katakana, katakana_to_hiragana};
use crate::domain::markup::strip_html_markup;
use crate::domain::pitch::{styled, CLASS_PARTICLE_HIGH, CLASS_PARTICLE_LOW};
use crate::domain::{DatabaseEntry, PitchAccentFormatter, Pronunciation};
use crate::error::Result;
use indexmap::IndexMap;
use std::sync::Arc;

/// Sub-expression to its rendered candidates, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronunciations(IndexMap<String, Vec<Pronunciation>>);

impl Pronunciations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&[Pronunciation]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Set the candidates for `key`. A key already present keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, candidates: Vec<Pronunciation>) {
        self.0.insert(key.into(), candidates);
    }

    /// Merge `other` into `self`, later keys overwriting earlier ones in place
    pub fn merge(&mut self, other: Pronunciations) {
        self.0.extend(other.0);
    }

    /// First candidate of the first key
    pub fn first(&self) -> Option<&Pronunciation> {
        self.0.values().next().and_then(|candidates| candidates.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.0
            .iter()
            .map(|(key, candidates)| (key.as_str(), candidates.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<Pronunciation>> {
        self.0
    }
}

impl FromIterator<(String, Vec<Pronunciation>)> for Pronunciations {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Pronunciation>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupRequest<'a> {
    pub expr: &'a str,
    pub reading: Option<&'a str>,
    /// Strip markup and surrounding whitespace from the expression
    pub sanitize: bool,
    /// Allow the fallback tiers to run
    pub recurse: bool,
    /// The previous word of a phrase ended high
    pub carry_high: bool,
}

impl<'a> LookupRequest<'a> {
    pub fn new(expr: &'a str) -> Self {
        Self {
            expr,
            reading: None,
            sanitize: true,
            recurse: true,
            carry_high: false,
        }
    }

    pub fn reading(mut self, reading: Option<&'a str>) -> Self {
        self.reading = reading;
        self
    }

    pub fn sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }

    pub fn carry_high(mut self, carry_high: bool) -> Self {
        self.carry_high = carry_high;
        self
    }
}

/// Resolves expressions against a shared dictionary
pub struct LookupResolver {
    dictionary: Arc<Dictionary>,
    lookup: LookupConfig,
    style: StyleConfig,
    formatter: PitchAccentFormatter,
    tiers: Vec<Box<dyn FallbackTier>>,
}

impl LookupResolver {
    /// Resolver with the separator-split fallback only
    pub fn new(dictionary: Arc<Dictionary>, config: &AccentConfig) -> Self {
        Self {
            dictionary,
            lookup: config.lookup.clone(),
            style: config.style.clone(),
            formatter: PitchAccentFormatter::new(
                config.style.annotate_nasal,
                config.style.annotate_devoiced,
            ),
            tiers: vec![Box::new(SeparatorSplitTier::new())],
        }
    }

    /// Add the external segmenter as the last fallback
    pub fn with_reading_segmenter(mut self, segmenter: Box<dyn ReadingSegmenter>) -> Self {
        self.tiers.push(Box::new(ExternalSegmenterTier::new(segmenter)));
        self
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn lookup_config(&self) -> &LookupConfig {
        &self.lookup
    }

    /// Names of the fallback tiers, in the order they run
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }

    /// Resolve one request. No match is an empty result, not an error.
    pub fn resolve(&self, request: LookupRequest<'_>) -> Pronunciations {
        let (expr, reading) = if request.sanitize {
            (
                strip_html_markup(request.expr, false).trim().to_string(),
                request
                    .reading
                    .map(|r| strip_html_markup(r, false).trim().to_string()),
            )
        } else {
            (
                request.expr.to_string(),
                request.reading.map(str::to_string),
            )
        };
        let reading = reading.filter(|r| !r.is_empty());

        if expr.is_empty() {
            return Pronunciations::new();
        }

        let direct = match self.split_particle(&expr, reading.as_deref()) {
            Ok(ParticleSplit {
                expr: word,
                reading,
                particle: Some(particle),
            }) => {
                log::debug!("Looking up '{word}' with particle '{particle}'");
                self.lookup_direct(&word, reading.as_deref(), request.carry_high)
                    .map(|candidates| (word, self.attach_particle(candidates, &particle)))
            }
            Ok(split) => self
                .lookup_direct(&split.expr, split.reading.as_deref(), request.carry_high)
                .map(|candidates| (split.expr, candidates)),
            Err(e) => {
                log::debug!("No pronunciation for '{expr}': {e}");
                return Pronunciations::new();
            }
        };

        if let Some((key, candidates)) = direct {
            return Pronunciations::from_iter([(key, candidates)]);
        }

        if !request.recurse {
            return Pronunciations::new();
        }

        for tier in &self.tiers {
            let found = tier.resolve(self, &expr, request.carry_high);
            if !found.is_empty() {
                log::debug!("'{expr}' resolved by the {} tier", tier.name());
                return found;
            }
        }
        Pronunciations::new()
    }

    /// Particle parsing only applies to expressions that are not keys themselves
    fn split_particle(
        &self,
        expr: &str,
        reading: Option<&str>,
    ) -> Result<ParticleSplit> {
        if !self.lookup.parse_particles || self.dictionary.contains_key(expr) {
            return Ok(ParticleSplit {
                expr: expr.to_string(),
                reading: reading.map(str::to_string),
                particle: None,
            });
        }
        reconcile(expr, reading, &self.lookup.particle_separators)
    }

    /// Render the candidates of an exact key, `None` when nothing survives
    fn lookup_direct(
        &self,
        expr: &str,
        reading: Option<&str>,
        carry_high: bool,
    ) -> Option<Vec<Pronunciation>> {
        let candidates = self.dictionary.get(expr)?;
        let rendered = self.render(expr, candidates, reading, carry_high);
        (!rendered.is_empty()).then_some(rendered)
    }

    fn render(
        &self,
        expr: &str,
        candidates: &[DatabaseEntry],
        reading: Option<&str>,
        carry_high: bool,
    ) -> Vec<Pronunciation> {
        let wanted = reading.map(hiragana_to_katakana);
        let spelling = reading.filter(|_| self.lookup.preserve_spelling).map(|r| {
            if contains_katakana(expr) {
                r.to_string()
            } else {
                katakana_to_hiragana(r)
            }
        });

        let mut rendered: Vec<Pronunciation> = Vec::new();
        for entry in candidates {
            if let Some(wanted) = &wanted {
                if hiragana_to_katakana(&entry.kana) != *wanted {
                    continue;
                }
            }

            let mut pronunciation =
                match self
                    .formatter
                    .format(entry, spelling.as_deref(), carry_high)
                {
                    Ok(p) => p,
                    Err(e) => {
                        log::warn!("Skipping candidate {} for '{expr}': {e}", entry.kana);
                        continue;
                    }
                };

            if self.lookup.pronunciation_hiragana && spelling.is_none() {
                pronunciation.markup = katakana_to_hiragana(&pronunciation.markup);
            }
            pronunciation.markup = self.style.inline(&pronunciation.markup);

            if !rendered.contains(&pronunciation) {
                rendered.push(pronunciation);
            }
        }
        rendered
    }

    /// Append a particle styled after the pitch its word ends on
    fn attach_particle(
        &self,
        candidates: Vec<Pronunciation>,
        particle: &str,
    ) -> Vec<Pronunciation> {
        if particle.is_empty() {
            return candidates;
        }
        let mut attached: Vec<Pronunciation> = Vec::with_capacity(candidates.len());
        for mut pronunciation in candidates {
            let class = if pronunciation.ends_high {
                CLASS_PARTICLE_HIGH
            } else {
                CLASS_PARTICLE_LOW
            };
            pronunciation
                .markup
                .push_str(&self.style.inline(&styled(class, particle)));
            if !attached.contains(&pronunciation) {
                attached.push(pronunciation);
            }
        }
        attached
    }
}
