//! Source dictionary records
//!
//! The source dictionary is a comma-separated file with 19 positional fields
//! per line. Some fields contain bracketed alternatives such as `{雨,飴}` or
//! `(食べ,喰べ)` whose inner commas are not field boundaries; those commas are
//! rewritten to `;` before the line is split.

use crate::error::{AccentError, Result};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Number of fields in a source record
pub const FIELD_COUNT: usize = 19;

/// Separator substituted for commas inside bracketed groups
pub const GROUP_SEPARATOR: char = ';';

static BRACE_GROUP: OnceLock<Regex> = OnceLock::new();
static PAREN_GROUP: OnceLock<Regex> = OnceLock::new();

fn brace_group() -> &'static Regex {
    BRACE_GROUP.get_or_init(|| Regex::new(r"\{.*?,.*?\}").expect("brace pattern is valid"))
}

fn paren_group() -> &'static Regex {
    PAREN_GROUP.get_or_init(|| Regex::new(r"\(.*?,.*?\)").expect("paren pattern is valid"))
}

/// One row of the source accent dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccentRecord {
    pub nid: String,
    pub id: String,
    pub wav_name: String,
    pub k_fld: String,
    pub act: String,
    /// Headword in kana
    pub midashigo: String,
    /// NHK-form lookup key
    pub nhk: String,
    /// Kanji expression lookup key
    pub kanji_expr: String,
    pub nhk_expr: String,
    pub number_chars: String,
    /// Raw digit string of morae that are not pronounced (devoiced)
    pub no_pronounce_pos: String,
    /// Raw digit string of nasalized morae
    pub nasal_sound_pos: String,
    pub majiri: String,
    pub kaisi: String,
    pub kwav: String,
    /// Kana spelling adjusted for devoicing
    pub midashigo1: String,
    pub akusentosuu: String,
    pub bunshou: String,
    /// Accent code, one digit per mora
    pub ac: String,
}

impl AccentRecord {
    /// Parse a single source line
    pub fn parse(line: &str) -> Result<Self> {
        let escaped = escape_group_commas(line.trim());
        let fields: Vec<&str> = escaped.split(',').collect();

        let [
            nid,
            id,
            wav_name,
            k_fld,
            act,
            midashigo,
            nhk,
            kanji_expr,
            nhk_expr,
            number_chars,
            no_pronounce_pos,
            nasal_sound_pos,
            majiri,
            kaisi,
            kwav,
            midashigo1,
            akusentosuu,
            bunshou,
            ac,
        ] = fields.as_slice()
        else {
            return Err(AccentError::malformed(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            )));
        };

        Ok(Self {
            nid: nid.to_string(),
            id: id.to_string(),
            wav_name: wav_name.to_string(),
            k_fld: k_fld.to_string(),
            act: act.to_string(),
            midashigo: midashigo.to_string(),
            nhk: nhk.to_string(),
            kanji_expr: kanji_expr.to_string(),
            nhk_expr: nhk_expr.to_string(),
            number_chars: number_chars.to_string(),
            no_pronounce_pos: no_pronounce_pos.to_string(),
            nasal_sound_pos: nasal_sound_pos.to_string(),
            majiri: majiri.to_string(),
            kaisi: kaisi.to_string(),
            kwav: kwav.to_string(),
            midashigo1: midashigo1.to_string(),
            akusentosuu: akusentosuu.to_string(),
            bunshou: bunshou.to_string(),
            ac: ac.to_string(),
        })
    }

    /// The two keys this record is registered under
    pub fn lookup_keys(&self) -> [&str; 2] {
        [&self.nhk, &self.kanji_expr]
    }
}

/// Replace commas inside `{..,..}` and `(..,..)` groups with [`GROUP_SEPARATOR`]
pub fn escape_group_commas(line: &str) -> String {
    let line = brace_group().replace_all(line, rewrite_group);
    paren_group().replace_all(&line, rewrite_group).into_owned()
}

fn rewrite_group(caps: &Captures<'_>) -> String {
    caps[0].replace(',', &GROUP_SEPARATOR.to_string())
}
