//! Fallback tiers for expressions that are not dictionary keys
//!
//! Tiers run in order after a failed direct lookup; the first one that
//! produces anything wins. Sub-lookups made by a tier never recurse, which
//! keeps the external segmenter from being consulted for its own output.

use crate::application::reading::ReadingSegmenter;
use crate::application::resolver::{LookupRequest, LookupResolver, Pronunciations};
use crate::application::segmenter::ExpressionSegmenter;

/// One way of breaking an expression into lookups
pub trait FallbackTier: Send + Sync {
    /// Resolve the parts of `expr`, empty when the tier does not apply
    fn resolve(&self, resolver: &LookupResolver, expr: &str, carry_high: bool) -> Pronunciations;

    /// Tier name for logging
    fn name(&self) -> &'static str;
}

/// Resolve each part of `parts` without recursion and merge in order
fn resolve_parts<'a>(
    resolver: &LookupResolver,
    parts: impl IntoIterator<Item = &'a str>,
    carry_high: bool,
) -> Pronunciations {
    let mut merged = Pronunciations::new();
    for part in parts {
        merged.merge(
            resolver.resolve(
                LookupRequest::new(part)
                    .recurse(false)
                    .carry_high(carry_high),
            ),
        );
    }
    merged
}

/// Split on punctuation and non-Japanese characters
#[derive(Debug, Clone, Copy, Default)]
pub struct SeparatorSplitTier {
    segmenter: ExpressionSegmenter,
}

impl SeparatorSplitTier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FallbackTier for SeparatorSplitTier {
    fn resolve(&self, resolver: &LookupResolver, expr: &str, carry_high: bool) -> Pronunciations {
        let parts = self.segmenter.segment(expr);
        if parts.len() <= 1 {
            return Pronunciations::new();
        }
        resolve_parts(resolver, parts.iter().map(String::as_str), carry_high)
    }

    fn name(&self) -> &'static str {
        "separator-split"
    }
}

/// Ask an external morphological segmenter for reading tokens
pub struct ExternalSegmenterTier {
    segmenter: Box<dyn ReadingSegmenter>,
}

impl ExternalSegmenterTier {
    pub fn new(segmenter: Box<dyn ReadingSegmenter>) -> Self {
        Self { segmenter }
    }
}

impl FallbackTier for ExternalSegmenterTier {
    fn resolve(&self, resolver: &LookupResolver, expr: &str, carry_high: bool) -> Pronunciations {
        match self.segmenter.reading(expr) {
            Ok(reply) => resolve_parts(resolver, reply.split_whitespace(), carry_high),
            Err(e) => {
                log::warn!("Segmenter fallback failed for '{expr}': {e}");
                Pronunciations::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "external-segmenter"
    }
}
