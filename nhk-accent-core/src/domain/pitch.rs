//! Pitch-accent rendering
//!
//! Every word has at most one rise and at most one fall in pitch, so its
//! accent code splits into four contiguous runs:
//!
//! 1. low pitch before the rise (leading `0`s)
//! 2. high pitch (the `1` and everything after it up to the fall)
//! 3. the fall itself (the `2`, zero or one mora)
//! 4. low pitch after the fall
//!
//! Each non-empty run is wrapped in its own styled span.

use crate::domain::entry::{validate_accent, DatabaseEntry, MoraPositions};
use crate::error::Result;

pub const CLASS_LOW_PRE: &str = "pitch-low-pre";
pub const CLASS_HIGH: &str = "pitch-high";
pub const CLASS_FALL: &str = "pitch-fall";
pub const CLASS_LOW_POST: &str = "pitch-low-post";
pub const CLASS_NASAL: &str = "nasal";
pub const CLASS_DEVOICED: &str = "nopron";
pub const CLASS_PARTICLE_HIGH: &str = "particle-high";
pub const CLASS_PARTICLE_LOW: &str = "particle-low";

/// Wrap `text` in a span carrying `class`
pub fn styled(class: &str, text: &str) -> String {
    format!("<span class='{class}'>{text}</span>")
}

/// A rendered pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pronunciation {
    pub markup: String,
    /// True when the word has no fall, so a following word stays high
    pub ends_high: bool,
}

/// Lengths of the four pitch runs, in mora
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PitchRuns {
    pub low_pre: usize,
    pub high: usize,
    pub fall: usize,
    pub low_post: usize,
}

impl PitchRuns {
    /// Partition a (padded) accent code into runs
    pub fn from_accent(accent: &str) -> Self {
        let digits: Vec<char> = accent.chars().collect();
        let fall_at = digits.iter().position(|&d| d == '2');
        let pre_fall = &digits[..fall_at.unwrap_or(digits.len())];
        let rise_at = pre_fall.iter().position(|&d| d == '1');

        let low_pre = rise_at.unwrap_or(pre_fall.len());
        let fall = usize::from(fall_at.is_some());
        Self {
            low_pre,
            high: pre_fall.len() - low_pre,
            fall,
            low_post: digits.len() - pre_fall.len() - fall,
        }
    }

    /// Start the word already high: the pre-rise run joins the high run
    pub fn carried_high(self) -> Self {
        Self {
            low_pre: 0,
            high: self.low_pre + self.high,
            ..self
        }
    }

    pub fn total(&self) -> usize {
        self.low_pre + self.high + self.fall + self.low_post
    }

    pub fn ends_high(&self) -> bool {
        self.fall == 0
    }

    /// Runs paired with their style class, in rendering order
    pub fn segments(&self) -> [(&'static str, usize); 4] {
        [
            (CLASS_LOW_PRE, self.low_pre),
            (CLASS_HIGH, self.high),
            (CLASS_FALL, self.fall),
            (CLASS_LOW_POST, self.low_post),
        ]
    }
}

/// Left-pad `accent` with low-pitch digits to `len` morae
pub fn pad_accent(accent: &str, len: usize) -> String {
    let missing = len.saturating_sub(accent.chars().count());
    let mut padded = "0".repeat(missing);
    padded.push_str(accent);
    padded
}

/// Renders dictionary entries as pitch-accent markup
#[derive(Debug, Clone, Copy)]
pub struct PitchAccentFormatter {
    annotate_nasal: bool,
    annotate_devoiced: bool,
}

impl PitchAccentFormatter {
    pub fn new(annotate_nasal: bool, annotate_devoiced: bool) -> Self {
        Self {
            annotate_nasal,
            annotate_devoiced,
        }
    }

    /// Render `entry`, optionally over a caller-supplied spelling.
    ///
    /// `carry_high` marks a word that continues a high plateau from the
    /// previous word of a phrase; it is rendered without a rise.
    pub fn format(
        &self,
        entry: &DatabaseEntry,
        override_spelling: Option<&str>,
        carry_high: bool,
    ) -> Result<Pronunciation> {
        let text = override_spelling.unwrap_or(&entry.kana);
        let morae = self.annotate(text, entry);
        validate_accent(&entry.accent, morae.len())?;

        let mut runs = PitchRuns::from_accent(&pad_accent(&entry.accent, morae.len()));
        if carry_high {
            runs = runs.carried_high();
        }

        let mut markup = String::new();
        let mut rest = morae.as_slice();
        for (class, len) in runs.segments() {
            if len == 0 {
                continue;
            }
            let (chunk, tail) = rest.split_at(len);
            markup.push_str(&styled(class, &chunk.concat()));
            rest = tail;
        }

        Ok(Pronunciation {
            markup,
            ends_high: runs.ends_high(),
        })
    }

    /// Split `text` into per-mora cells carrying nasal/devoiced marks
    fn annotate(&self, text: &str, entry: &DatabaseEntry) -> Vec<String> {
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let mut cell = c.to_string();
                if self.annotate_nasal && marked(&entry.nasal, i) {
                    cell = styled(CLASS_NASAL, &cell);
                }
                if self.annotate_devoiced && marked(&entry.no_pronounce, i) {
                    cell = styled(CLASS_DEVOICED, &cell);
                }
                cell
            })
            .collect()
    }
}

impl Default for PitchAccentFormatter {
    fn default() -> Self {
        Self::new(true, true)
    }
}

fn marked(positions: &MoraPositions, index: usize) -> bool {
    !positions.is_empty() && positions.contains(index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccentError;

    fn entry(kana: &str, accent: &str) -> DatabaseEntry {
        DatabaseEntry::new(
            kana,
            accent,
            MoraPositions::default(),
            MoraPositions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_runs_for_nakadaka() {
        let runs = PitchRuns::from_accent("0120");
        assert_eq!(
            runs,
            PitchRuns {
                low_pre: 1,
                high: 1,
                fall: 1,
                low_post: 1
            }
        );
        assert!(!runs.ends_high());
    }

    #[test]
    fn test_runs_without_fall_or_rise() {
        let heiban = PitchRuns::from_accent("0111");
        assert_eq!((heiban.low_pre, heiban.high, heiban.fall), (1, 3, 0));
        assert!(heiban.ends_high());

        let atamadaka = PitchRuns::from_accent("200");
        assert_eq!((atamadaka.low_pre, atamadaka.high), (0, 0));
        assert_eq!((atamadaka.fall, atamadaka.low_post), (1, 2));

        let flat = PitchRuns::from_accent("000");
        assert_eq!(flat.low_pre, 3);
        assert!(flat.ends_high());
    }

    #[test]
    fn test_format_america() {
        let formatter = PitchAccentFormatter::default();
        let pron = formatter.format(&entry("アメリカ", "0120"), None, false).unwrap();
        assert_eq!(
            pron.markup,
            "<span class='pitch-low-pre'>ア</span>\
             <span class='pitch-high'>メ</span>\
             <span class='pitch-fall'>リ</span>\
             <span class='pitch-low-post'>カ</span>"
        );
        assert!(!pron.ends_high);
    }

    #[test]
    fn test_short_accent_is_left_padded() {
        let formatter = PitchAccentFormatter::default();
        let pron = formatter.format(&entry("アメリカ", "12"), None, false).unwrap();
        assert!(pron
            .markup
            .starts_with("<span class='pitch-low-pre'>アメ</span>"));
        assert_eq!(pad_accent("12", 4), "0012");
    }

    #[test]
    fn test_carry_high_merges_pre_rise() {
        let formatter = PitchAccentFormatter::default();
        let pron = formatter.format(&entry("ハシ", "01"), None, true).unwrap();
        assert_eq!(pron.markup, "<span class='pitch-high'>ハシ</span>");
        assert!(pron.ends_high);
    }

    #[test]
    fn test_override_spelling() {
        let formatter = PitchAccentFormatter::default();
        let pron = formatter
            .format(&entry("ハシ", "12"), Some("はし"), false)
            .unwrap();
        assert_eq!(
            pron.markup,
            "<span class='pitch-high'>は</span><span class='pitch-fall'>し</span>"
        );
    }

    #[test]
    fn test_empty_text() {
        let formatter = PitchAccentFormatter::default();
        let pron = formatter.format(&entry("", ""), None, false).unwrap();
        assert_eq!(pron.markup, "");
        assert!(pron.ends_high);
    }

    #[test]
    fn test_accent_longer_than_override_is_malformed() {
        let formatter = PitchAccentFormatter::default();
        let err = formatter
            .format(&entry("アメリカ", "0120"), Some("あめ"), false)
            .unwrap_err();
        assert!(matches!(err, AccentError::MalformedRecord { .. }));
    }

    #[test]
    fn test_nasal_and_devoiced_marks_overlap() {
        let entry = DatabaseEntry::new(
            "キク",
            "12",
            MoraPositions::from_source_field("2").unwrap(),
            MoraPositions::from_source_field("20").unwrap(),
        )
        .unwrap();

        let pron = PitchAccentFormatter::default()
            .format(&entry, None, false)
            .unwrap();
        assert_eq!(
            pron.markup,
            "<span class='pitch-high'>キ</span>\
             <span class='pitch-fall'><span class='nopron'><span class='nasal'>ク</span></span></span>"
        );

        let plain = PitchAccentFormatter::new(false, false)
            .format(&entry, None, false)
            .unwrap();
        assert_eq!(
            plain.markup,
            "<span class='pitch-high'>キ</span><span class='pitch-fall'>ク</span>"
        );
    }
}
