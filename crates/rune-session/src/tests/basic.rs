use std::sync::Arc;

use rune_core::RuneTable;

use super::*;

// --- Typing ---

#[test]
fn test_type_single_letter() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Insert("f".into()));
    assert!(resp.changed);
    assert!(!resp.truncated);
    assert_eq!(resp.glyphs, "ᚠ");
    assert_eq!(resp.legend.len(), 1);
    assert_eq!(resp.legend[0].name, "Fehu");
    assert!(resp.unknown.is_empty());
}

#[test]
fn test_digraph_forms_across_keystrokes() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Insert("t".into()));
    assert_eq!(resp.glyphs, "ᛏ");

    let resp = session.handle(EditEvent::Insert("h".into()));
    assert_eq!(resp.glyphs, "ᚦ");
    assert_eq!(session.result().len(), 1);
    assert_eq!(session.result().units()[0].original, "th");
}

#[test]
fn test_type_sentence() {
    let mut session = make_session();
    let resp = type_string(&mut session, "The King");
    assert_eq!(session.text(), "The King");
    assert_eq!(resp.glyphs, "ᚦᛖ ᚲᛁᛜ");
    let legend: Vec<&str> = resp.legend.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(legend, vec!["Thurisaz", "Ehwaz", "Kenaz", "Isa", "Ingwaz"]);
}

#[test]
fn test_paste_insert() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Insert("aabba".into()));
    assert_eq!(resp.glyphs, "ᚨᚨᛒᛒᚨ");
    let legend: Vec<&str> = resp.legend.iter().map(|u| u.glyph.as_str()).collect();
    assert_eq!(legend, vec!["ᚨ", "ᛒ"]);
}

#[test]
fn test_unknown_letters_reported() {
    let mut session = make_session();
    let resp = type_string(&mut session, "Xerox q");
    assert_eq!(resp.unknown, vec!["X", "x", "q"]);
    assert!(resp.glyphs.contains('?'));
    assert!(resp.legend.iter().all(|u| u.glyph != "?"));
}

#[test]
fn test_dropped_characters_keep_text() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Insert("a1!".into()));
    assert!(resp.changed);
    assert_eq!(session.text(), "a1!");
    assert_eq!(resp.glyphs, "ᚨ");
}

#[test]
fn test_empty_insert_is_unchanged() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Insert(String::new()));
    assert!(!resp.changed);
    assert!(resp.glyphs.is_empty());
}

// --- Backspace / clear ---

#[test]
fn test_backspace_splits_digraph() {
    let mut session = make_session();
    type_string(&mut session, "ng");
    assert_eq!(session.result().len(), 1);

    let resp = session.handle(EditEvent::Backspace);
    assert!(resp.changed);
    assert_eq!(session.text(), "n");
    assert_eq!(resp.glyphs, "ᚾ");
}

#[test]
fn test_backspace_multibyte() {
    let mut session = make_session();
    type_string(&mut session, "až");
    let resp = session.handle(EditEvent::Backspace);
    assert_eq!(session.text(), "a");
    assert_eq!(resp.glyphs, "ᚨ");
}

#[test]
fn test_backspace_on_empty() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Backspace);
    assert!(!resp.changed);
    assert!(session.is_empty());
}

#[test]
fn test_clear() {
    let mut session = make_session();
    type_string(&mut session, "rune");
    let resp = session.handle(EditEvent::Clear);
    assert!(resp.changed);
    assert!(session.is_empty());
    assert!(session.result().is_empty());
    assert!(resp.glyphs.is_empty());
    assert!(resp.legend.is_empty());

    let resp = session.handle(EditEvent::Clear);
    assert!(!resp.changed);
}

// --- Replace ---

#[test]
fn test_replace() {
    let mut session = make_session();
    type_string(&mut session, "old");
    let resp = session.handle(EditEvent::Replace("Odin".into()));
    assert!(resp.changed);
    assert_eq!(session.text(), "Odin");
    assert_eq!(resp.glyphs, "ᛟᛞᛁᚾ");

    let resp = session.handle(EditEvent::Replace("Odin".into()));
    assert!(!resp.changed);
    assert_eq!(resp.glyphs, "ᛟᛞᛁᚾ");
}

// --- Length cap ---

#[test]
fn test_insert_truncated_at_cap() {
    let mut session = make_session();
    let long = "a".repeat(MAX_INPUT_CHARS + 10);
    let resp = session.handle(EditEvent::Insert(long));
    assert!(resp.changed);
    assert!(resp.truncated);
    assert_eq!(session.text().chars().count(), MAX_INPUT_CHARS);

    let resp = session.handle(EditEvent::Insert("b".into()));
    assert!(!resp.changed);
    assert!(resp.truncated);
    assert_eq!(session.text().chars().count(), MAX_INPUT_CHARS);
}

#[test]
fn test_cap_counts_chars_not_bytes() {
    let mut session = make_session();
    let long = "ž".repeat(MAX_INPUT_CHARS);
    let resp = session.handle(EditEvent::Insert(long));
    assert!(!resp.truncated);
    assert_eq!(session.result().len(), MAX_INPUT_CHARS);
}

#[test]
fn test_replace_truncated() {
    let mut session = make_session();
    let resp = session.handle(EditEvent::Replace("š".repeat(MAX_INPUT_CHARS + 1)));
    assert!(resp.truncated);
    assert_eq!(session.text().chars().count(), MAX_INPUT_CHARS);

    // room opens up again after backspace
    session.handle(EditEvent::Backspace);
    let resp = session.handle(EditEvent::Insert("a".into()));
    assert!(resp.changed);
    assert!(!resp.truncated);
}

// --- Custom table ---

#[test]
fn test_custom_table() {
    let table = RuneTable::from_toml(
        r#"
[[runes]]
grapheme = "a"
glyph = "ᚫ"
name = "Aesc"
"#,
    )
    .unwrap();
    let mut session = ConverterSession::new(Arc::new(table));
    let resp = session.handle(EditEvent::Insert("ab".into()));
    assert_eq!(resp.glyphs, "ᚫ?");
    assert_eq!(resp.unknown, vec!["b"]);
}
