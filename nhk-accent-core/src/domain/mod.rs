//! Pure data types and transformations: records, entries, kana and markup
//! helpers, and pitch rendering. Nothing here performs I/O.

pub mod entry;
pub mod kana;
pub mod markup;
pub mod pitch;
pub mod record;

pub use entry::{DatabaseEntry, MoraPositions, NO_POSITIONS};
pub use pitch::{PitchAccentFormatter, PitchRuns, Pronunciation};
pub use record::{AccentRecord, FIELD_COUNT};
