//! Tests for the facade

use std::sync::Arc;

use crate::api::{FormatOptions, Pronouncer};
use crate::config::AccentConfig;
use crate::dictionary::{DatabasePaths, DictionaryCompiler};
use crate::error::AccentError;

const SOURCE: &str = "\
1,10,A1,1,1,ハシ,ハシ,箸,ハシ,2,0,0,,,,ハシ,1,1,12
2,20,A2,1,1,ハシ,ハシ,橋,ハシ,2,0,0,,,,ハシ,1,1,01
3,30,A3,1,1,ミズ,ミズ,水,ミズ,2,0,0,,,,ミズ,1,1,0
4,40,A4,1,1,アメ,アメ,雨,アメ,2,0,0,,,,アメ,1,1,12
";

fn pronouncer() -> Pronouncer {
    let mut config = AccentConfig::default();
    config.style.inline_style = false;
    let (dictionary, _) = DictionaryCompiler::compile_str(SOURCE);
    Pronouncer::new(Arc::new(dictionary), &config)
}

#[test]
fn test_default_format_joins_candidates() {
    let text = pronouncer().formatted("ハシ", None, &FormatOptions::default());
    assert_eq!(
        text,
        "<span class='pitch-high'>ハ</span><span class='pitch-fall'>シ</span> *** \
         <span class='pitch-low-pre'>ハ</span><span class='pitch-high'>シ</span>"
    );
}

#[test]
fn test_lookup_view_prefixes_keys() {
    let text = pronouncer().formatted("雨/水", None, &FormatOptions::lookup_view());
    assert_eq!(
        text,
        "雨:<br/>\n<span class='pitch-high'>ア</span><span class='pitch-fall'>メ</span>\
         <br/><br/>\n\
         水:<br/>\n<span class='pitch-low-pre'>ミズ</span>"
    );
}

#[test]
fn test_no_match_formats_to_empty_string() {
    assert_eq!(pronouncer().formatted("晴れ", None, &FormatOptions::default()), "");
}

#[test]
fn test_phrase_is_one_entry() {
    let found = pronouncer().pronunciations("水|雨", None);
    assert_eq!(found.keys().collect::<Vec<_>>(), vec!["水雨"]);
    assert!(!found.first().unwrap().ends_high);
}

#[test]
fn test_incomplete_phrase_renders_nothing() {
    let pronouncer = pronouncer();
    assert!(pronouncer.pronunciations("水|晴れ", None).is_empty());
    assert_eq!(
        pronouncer.formatted("水|晴れ", None, &FormatOptions::default()),
        ""
    );
    assert!(pronouncer.lookup("晴れ|水", None).is_empty());
}

#[test]
fn test_lookup_output_serializes() {
    let output = pronouncer().lookup("雨", Some("あめ"));
    assert_eq!(output.entries.len(), 1);
    let json = serde_json::to_string(&output).unwrap();
    assert!(json.contains("\"key\":\"雨\""));
    assert!(json.contains("\"reading\":\"あめ\""));

    let empty = pronouncer().lookup("晴れ", None);
    assert!(empty.is_empty());
}

#[test]
fn test_from_config_requires_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = AccentConfig {
        database: DatabasePaths::in_dir(dir.path()),
        ..AccentConfig::default()
    };
    let err = Pronouncer::from_config(&config).err().unwrap();
    assert!(matches!(err, AccentError::MissingDatabase { .. }));
}

#[test]
fn test_from_config_builds_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let paths = DatabasePaths::in_dir(dir.path());
    std::fs::write(&paths.source, SOURCE).unwrap();
    let config = AccentConfig {
        database: paths,
        ..AccentConfig::default()
    };
    let pronouncer = Pronouncer::from_config(&config).unwrap();
    assert!(pronouncer.dictionary().contains_key("箸"));
}

#[test]
fn test_serialized_lookup_formats_the_same() {
    let pronouncer = pronouncer();
    let options = FormatOptions::lookup_view();
    let output = pronouncer.lookup("雨/ハシ", None);
    assert_eq!(
        options.format_lookup(&output),
        pronouncer.formatted("雨/ハシ", None, &options)
    );
}
