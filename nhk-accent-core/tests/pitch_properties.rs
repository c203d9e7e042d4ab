//! Property tests for pitch rendering

use nhk_accent_core::domain::markup::strip_html_markup;
use nhk_accent_core::domain::pitch::{pad_accent, PitchRuns};
use nhk_accent_core::domain::MoraPositions;
use nhk_accent_core::{DatabaseEntry, PitchAccentFormatter};
use proptest::prelude::*;

/// A katakana spelling with an accent code no longer than it
fn entry_strategy() -> impl Strategy<Value = (String, String)> {
    "[アイウエオカキクケコサシスセソタチツテト]{1,10}".prop_flat_map(|kana| {
        let len = kana.chars().count();
        let accent = proptest::collection::vec(prop_oneof![Just('0'), Just('1'), Just('2')], 0..=len)
            .prop_map(|digits| digits.into_iter().collect::<String>());
        (Just(kana), accent)
    })
}

proptest! {
    #[test]
    fn runs_cover_the_whole_word((kana, accent) in entry_strategy()) {
        let len = kana.chars().count();
        let runs = PitchRuns::from_accent(&pad_accent(&accent, len));
        prop_assert_eq!(runs.total(), len);
        prop_assert!(runs.fall <= 1);
        prop_assert_eq!(runs.carried_high().total(), len);
    }

    #[test]
    fn ends_high_iff_no_fall((kana, accent) in entry_strategy()) {
        let entry = DatabaseEntry::new(
            kana.as_str(),
            accent.as_str(),
            MoraPositions::default(),
            MoraPositions::default(),
        ).unwrap();
        let pronunciation = PitchAccentFormatter::default().format(&entry, None, false).unwrap();
        prop_assert_eq!(pronunciation.ends_high, !pronunciation.markup.contains("pitch-fall"));
        // Spans only wrap the text, never change it
        prop_assert_eq!(strip_html_markup(&pronunciation.markup, false), kana);
    }

    #[test]
    fn carry_high_merges_pre_rise_into_high((kana, accent) in entry_strategy()) {
        let entry = DatabaseEntry::new(
            kana.as_str(),
            accent.as_str(),
            MoraPositions::default(),
            MoraPositions::default(),
        ).unwrap();
        let formatter = PitchAccentFormatter::default();
        let plain = formatter.format(&entry, None, false).unwrap();
        let carried = formatter.format(&entry, None, true).unwrap();

        prop_assert!(!carried.markup.contains("pitch-low-pre"));
        prop_assert_eq!(carried.ends_high, plain.ends_high);
        prop_assert_eq!(strip_html_markup(&carried.markup, false), kana);
        if !plain.markup.contains("pitch-low-pre") {
            prop_assert_eq!(carried.markup, plain.markup);
        }
    }
}
