//! Application layer: expression resolution
//!
//! This module orchestrates the domain types over a loaded [`Dictionary`]:
//!
//! - [`LookupResolver`] performs direct lookups with particle handling and
//!   runs the fallback tiers on a miss
//! - [`PhraseComposer`] renders word-separated phrases as one contour
//! - [`MecabSegmenter`] wraps the optional external segmenter process
//!
//! [`Dictionary`]: crate::dictionary::Dictionary

pub mod composer;
pub mod fallback;
pub mod particle;
pub mod reading;
pub mod resolver;
pub mod segmenter;

pub use composer::PhraseComposer;
pub use fallback::{ExternalSegmenterTier, FallbackTier, SeparatorSplitTier};
pub use particle::{reconcile, ParticleSplit};
pub use reading::{MecabSegmenter, ReadingSegmenter};
pub use resolver::{LookupRequest, LookupResolver, Pronunciations};
pub use segmenter::ExpressionSegmenter;
