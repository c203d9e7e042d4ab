//! Separator-based expression splitting
//!
//! Fallback used when an expression is not a dictionary key as a whole:
//! anything that is not Japanese text, and any Japanese punctuation mark,
//! is treated as a word separator.

use crate::domain::markup::strip_html_markup;
use regex::Regex;
use std::sync::OnceLock;

static NON_JAPANESE: OnceLock<Regex> = OnceLock::new();
static JAPANESE_SEPARATOR: OnceLock<Regex> = OnceLock::new();

/// Runs of characters outside the CJK punctuation, kana, half-width kana and
/// CJK ideograph blocks
fn non_japanese() -> &'static Regex {
    NON_JAPANESE.get_or_init(|| {
        Regex::new(
            r"[^\u{3000}-\u{303f}\u{3040}-\u{309f}\u{30a0}-\u{30ff}\u{ff66}-\u{ff9f}\u{4e00}-\u{9fff}\u{3400}-\u{4dbf}]+",
        )
        .expect("non-Japanese pattern is valid")
    })
}

/// Runs of Japanese punctuation and symbol marks
fn japanese_separator() -> &'static Regex {
    JAPANESE_SEPARATOR.get_or_init(|| {
        Regex::new(
            "[・、※【】「」〒◎×〃゜『』《》〜〽。〄〇〈〉〓〔〕〖〗〘〙〚〛〝〞〟〠〡〢〣〥〦〧〨〭〮〯〫〬〶〷〸〹〺〻〼〾〿]+",
        )
        .expect("Japanese separator pattern is valid")
    })
}

/// Splits expressions into lookup candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionSegmenter;

impl ExpressionSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Split `expr` on separators.
    ///
    /// The result always has at least one element: an input without
    /// separators (including the empty string) comes back as a single
    /// element, which callers read as "no split occurred".
    pub fn segment(&self, expr: &str) -> Vec<String> {
        let text = strip_html_markup(expr, false);
        let text = non_japanese().replace_all(text.trim(), " ");
        let text = japanese_separator().replace_all(&text, " ");
        text.split(' ').map(str::to_string).collect()
    }
}
