//! Kana script helpers
//!
//! Hiragana and katakana occupy parallel Unicode blocks offset by 0x60, so
//! conversion is a per-character shift restricted to the letters that have a
//! counterpart in the other script. Everything else (ASCII markup, the long
//! vowel mark `ー`, kanji) passes through unchanged.

const SCRIPT_OFFSET: u32 = 0x60;

/// Hiragana letters ぁ..ゖ plus the iteration marks ゝゞ
fn has_katakana_counterpart(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{3096}' | '\u{309D}'..='\u{309E}')
}

/// Katakana letters ァ..ヶ plus the iteration marks ヽヾ
fn has_hiragana_counterpart(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}')
}

/// Whether `c` is a katakana letter (the long vowel mark is not counted)
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A1}'..='\u{30FA}')
}

/// Whether the text contains at least one katakana letter
pub fn contains_katakana(text: &str) -> bool {
    text.chars().any(is_katakana)
}

/// Convert hiragana to katakana
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if has_katakana_counterpart(c) {
                char::from_u32(c as u32 + SCRIPT_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Convert katakana to hiragana
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| {
            if has_hiragana_counterpart(c) {
                char::from_u32(c as u32 - SCRIPT_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}
