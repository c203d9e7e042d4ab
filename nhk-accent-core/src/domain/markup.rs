//! HTML markup handling for note field content

use regex::Regex;
use std::sync::OnceLock;

static TAG: OnceLock<Regex> = OnceLock::new();
static LINE_BREAK: OnceLock<Regex> = OnceLock::new();
static CHAR_REF: OnceLock<Regex> = OnceLock::new();

const NEWLINE_PLACEHOLDER: &str = "---newline---";

fn tag_regex() -> &'static Regex {
    TAG.get_or_init(|| Regex::new(r"<[^<>]*>").expect("tag pattern is valid"))
}

fn line_break_regex() -> &'static Regex {
    LINE_BREAK.get_or_init(|| Regex::new(r"<br( /)?>").expect("line break pattern is valid"))
}

fn char_ref_regex() -> &'static Regex {
    CHAR_REF.get_or_init(|| {
        Regex::new(r"&(?:#([0-9]{1,7})|#[xX]([0-9a-fA-F]{1,6})|(lt|gt|quot|apos|nbsp|amp));")
            .expect("character reference pattern is valid")
    })
}

/// Decode named and numeric character references in one pass.
///
/// References that do not name a valid scalar value are left as written.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    char_ref_regex()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let decoded = if let Some(dec) = caps.get(1) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("quot") => Some('"'),
                    Some("apos") => Some('\''),
                    Some("nbsp") => Some('\u{a0}'),
                    Some("amp") => Some('&'),
                    _ => None,
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// Strip tags from `html`, keeping only text content.
///
/// With `recursive` set, stripping repeats until the text stops changing, which
/// also removes markup that was itself escaped inside the field.
pub fn strip_html_markup(html: &str, recursive: bool) -> String {
    let mut current = html.to_string();
    loop {
        let stripped = decode_entities(&tag_regex().replace_all(&current, ""));
        if !recursive || stripped == current {
            return stripped;
        }
        current = stripped;
    }
}

/// Prepare text for a line-oriented external process.
///
/// Newlines become spaces, the full-width tilde is folded to ASCII, markup is
/// stripped recursively, and explicit `<br>` breaks survive as `<br>`.
pub fn escape_for_segmenter(text: &str) -> String {
    let text = text.replace('\n', " ").replace('\u{ff5e}', "~");
    let text = line_break_regex().replace_all(&text, NEWLINE_PLACEHOLDER);
    strip_html_markup(&text, true).replace(NEWLINE_PLACEHOLDER, "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_markup() {
        assert_eq!(strip_html_markup("<b>食べる</b>", false), "食べる");
        assert_eq!(strip_html_markup("<div>箸<br/>橋</div>", false), "箸橋");
        assert_eq!(strip_html_markup("plain", false), "plain");
    }

    #[test]
    fn test_strip_escaped_markup_requires_recursion() {
        let escaped = "&lt;b&gt;雨&lt;/b&gt;";
        assert_eq!(strip_html_markup(escaped, false), "<b>雨</b>");
        assert_eq!(strip_html_markup(escaped, true), "雨");
    }

    #[test]
    fn test_numeric_character_references() {
        assert_eq!(strip_html_markup("&#38632;", false), "雨");
        assert_eq!(strip_html_markup("&#x96E8;&#x98f4;", false), "雨飴");
        assert_eq!(strip_html_markup("&#39;a&#39;", false), "'a'");
        // Not a scalar value
        assert_eq!(strip_html_markup("&#xD800;", false), "&#xD800;");
    }

    #[test]
    fn test_references_decode_once() {
        assert_eq!(strip_html_markup("&amp;lt;", false), "&lt;");
        assert_eq!(strip_html_markup("&#38;gt;", false), "&gt;");
        assert_eq!(strip_html_markup("&amp;lt;", true), "<");
    }

    #[test]
    fn test_escape_for_segmenter() {
        assert_eq!(escape_for_segmenter("雨\n<b>飴</b>"), "雨 飴");
        assert_eq!(escape_for_segmenter("一<br />二"), "一<br>二");
        assert_eq!(escape_for_segmenter("A～B"), "A~B");
    }
}
