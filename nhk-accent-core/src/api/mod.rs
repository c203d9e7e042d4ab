//! Public facade over the lookup engine
//!
//! [`Pronouncer`] bundles a shared dictionary, the resolver and the phrase
//! composer behind the single function hosts need: expression and optional
//! reading in, formatted pronunciation markup out.

mod format;
mod output;
mod pronouncer;

#[cfg(test)]
mod tests;

pub use format::FormatOptions;
pub use output::{LookupEntry, LookupOutput, RenderedPronunciation};
pub use pronouncer::Pronouncer;
