//! Main pronunciation lookup entry point

use std::sync::Arc;

use crate::api::{FormatOptions, LookupOutput};
use crate::application::{
    LookupRequest, LookupResolver, MecabSegmenter, PhraseComposer, Pronunciations,
    ReadingSegmenter,
};
use crate::config::AccentConfig;
use crate::dictionary::{loader, Dictionary};
use crate::domain::markup::strip_html_markup;
use crate::error::Result;

/// Expression and reading in, pronunciations out
pub struct Pronouncer {
    resolver: LookupResolver,
}

impl Pronouncer {
    /// Create a pronouncer over an already loaded dictionary
    ///
    /// The external segmenter is attached when `config` enables it; its
    /// process is only started by the first lookup that needs it.
    pub fn new(dictionary: Arc<Dictionary>, config: &AccentConfig) -> Self {
        let mut resolver = LookupResolver::new(dictionary, config);
        if let Some(segmenter) = MecabSegmenter::from_config(&config.segmenter) {
            resolver = resolver.with_reading_segmenter(Box::new(segmenter));
        }
        Self { resolver }
    }

    /// Validate `config` and load (or rebuild) the dictionary it points at
    pub fn from_config(config: &AccentConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = loader::load_or_build(&config.database)?;
        Ok(Self::new(Arc::new(dictionary), config))
    }

    /// Replace the last-resort segmenter, e.g. with an in-process one
    pub fn with_reading_segmenter(self, segmenter: Box<dyn ReadingSegmenter>) -> Self {
        Self {
            resolver: self.resolver.with_reading_segmenter(segmenter),
        }
    }

    pub fn resolver(&self) -> &LookupResolver {
        &self.resolver
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        self.resolver.dictionary()
    }

    /// All pronunciations found for `expr`.
    ///
    /// Word-separated phrases are composed as a whole; a phrase with a
    /// missing word yields nothing rather than a partial rendering.
    pub fn pronunciations(&self, expr: &str, reading: Option<&str>) -> Pronunciations {
        let composer = PhraseComposer::new(&self.resolver);
        if composer.is_phrase(expr) {
            if let Some(phrase) = composer.compose_pronunciation(expr, reading) {
                let separators = &self.resolver.lookup_config().word_separators;
                let key = strip_html_markup(expr, false)
                    .trim()
                    .replace(separators.as_slice(), "");
                return Pronunciations::from_iter([(key, vec![phrase])]);
            }
            log::debug!("Phrase '{expr}' has a word without pronunciation");
            return Pronunciations::new();
        }
        self.resolver.resolve(LookupRequest::new(expr).reading(reading))
    }

    /// Pronunciations flattened with `options`
    pub fn formatted(&self, expr: &str, reading: Option<&str>, options: &FormatOptions) -> String {
        options.format(&self.pronunciations(expr, reading))
    }

    /// Pronunciations as a serializable report
    pub fn lookup(&self, expr: &str, reading: Option<&str>) -> LookupOutput {
        LookupOutput::new(expr, reading, &self.pronunciations(expr, reading))
    }
}
