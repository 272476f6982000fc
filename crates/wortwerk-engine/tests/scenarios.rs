//! End-to-end checks against the German fixture dictionaries.
//!
//! Fixtures live in `tests/data`: `de.json` (words, grammar, formats),
//! `abbr.json` (abbreviations) and `scenarios.json` (text in, markup out,
//! with `|` standing for a soft hyphen).

use std::path::PathBuf;

use serde::Deserialize;
use wortwerk_core::{Entry, NodeId, Variant};
use wortwerk_engine::{
    CheckOptions, Dictionary, DictionaryError, ProcessorRegistry, Spellchecker,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

fn load(name: &str) -> Dictionary {
    Dictionary::from_json(&fixture(name), &ProcessorRegistry::new())
        .unwrap_or_else(|e| panic!("failed to build {name}: {e}"))
}

fn german() -> Spellchecker {
    let mut checker = Spellchecker::new();
    checker.add_dictionary(load("de.json"));
    checker.add_dictionary(load("abbr.json"));
    checker
}

/// Soft hyphens shown as `|`.
fn visible(text: &str) -> String {
    text.replace('\u{00AD}', "|")
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    text: String,
    expected: String,
}

// ---------------------------------------------------------------------------
// Golden scenarios
// ---------------------------------------------------------------------------

#[test]
fn golden_scenarios() {
    let scenarios: Vec<Scenario> = serde_json::from_str(&fixture("scenarios.json")).unwrap();
    let checker = german();
    let mut failures = Vec::new();
    for s in &scenarios {
        let actual = visible(&checker.check_text(&s.text));
        if actual != s.expected {
            failures.push(format!(
                "{}: {:?}\n  expected: {}\n  actual:   {}",
                s.name, s.text, s.expected, actual
            ));
        }
    }
    assert!(
        failures.is_empty(),
        "{} of {} scenarios failed:\n{}",
        failures.len(),
        scenarios.len(),
        failures.join("\n")
    );
}

// ---------------------------------------------------------------------------
// Elision
// ---------------------------------------------------------------------------

#[test]
fn leading_fragment_reconstructs_full_word() {
    let checker = german();
    let mut session = checker.new_session();
    checker.check(&mut session, "Be- und Verarbeitung", NodeId(0));
    checker.analyze(&mut session);

    let elisions: Vec<&Variant> = session.findings()[0]
        .variants()
        .iter()
        .filter(|v| v.word_type == "elision")
        .collect();
    assert_eq!(elisions.len(), 1);
    assert_eq!(elisions[0].surface, "Be-");
    assert_eq!(elisions[0].elision_of.as_deref(), Some("Be|ar|bei|tung"));
}

#[test]
fn enumeration_inside_sentence() {
    let checker = german();
    let mut session = checker.new_session();
    session.set_assume_start_of_sentence(false);
    checker.check(&mut session, "die Mit- und Zusammenarbeit", NodeId(0));
    checker.analyze(&mut session);
    let out = checker.apply_findings(&mut session);
    assert_eq!(visible(&out[0].content), "die Mit- und Zu|sam|men|ar|beit");
}

#[test]
fn enumeration_across_nodes() {
    let checker = german();
    let mut session = checker.new_session();
    checker.check(&mut session, "Be- ", NodeId(1));
    checker.check(&mut session, "und Verarbeitung", NodeId(2));
    checker.analyze(&mut session);
    let out = checker.apply_findings(&mut session);
    assert_eq!(out[0].content, "Be- ");
    assert_eq!(visible(&out[1].content), "und Ver|ar|bei|tung");
}

// ---------------------------------------------------------------------------
// Cursor markers
// ---------------------------------------------------------------------------

#[test]
fn unknown_word_with_empty_dictionary() {
    let mut checker = Spellchecker::new();
    checker.add_dictionary(Dictionary::builder("empty").build().unwrap());
    assert_eq!(
        checker.check_text("filter"),
        "<span class=\"spellcheck highlight error unknown\">filter</span>"
    );
    assert_eq!(
        checker.check_text("\u{2038}filter"),
        "<span class=\"spellcheck highlight error unknown\">\u{2038}filter</span>"
    );
    assert_eq!(
        checker.check_text("\u{2038} filter"),
        "\u{2038} <span class=\"spellcheck highlight error unknown\">filter</span>"
    );
    assert_eq!(checker.check_text("\u{2038}"), "\u{2038}");
}

#[test]
fn cursor_keeps_hyphenation_at_edges() {
    let checker = german();
    assert_eq!(
        visible(&checker.check_text("Haustür\u{2038}")),
        "Haus|tür\u{2038}"
    );
    assert_eq!(checker.check_text("Haus\u{2038}tür"), "Haus\u{2038}tür");
}

// ---------------------------------------------------------------------------
// Session hints and nodes
// ---------------------------------------------------------------------------

#[test]
fn case_insensitive_hint_suppresses_warning() {
    let checker = german();
    let mut session = checker.new_session();
    session.set_case_insensitive_for_next_word(true);
    checker.check(&mut session, "haus", NodeId(0));
    checker.analyze(&mut session);
    assert_eq!(checker.apply_findings(&mut session)[0].content, "haus");
}

#[test]
fn words_split_over_nodes() {
    let checker = german();

    let mut session = checker.new_session();
    checker.check(&mut session, "Das Haus", NodeId(1));
    checker.check(&mut session, "die", NodeId(2));
    checker.analyze(&mut session);
    let out = checker.apply_findings(&mut session);
    assert_eq!(
        out[0].content,
        "Das <span class=\"spellcheck highlight error missing-whitespace-end\">Haus</span>"
    );
    assert_eq!(
        out[1].content,
        "<span class=\"spellcheck highlight error missing-whitespace-begin\">die</span>"
    );

    let mut session = checker.new_session();
    checker.check(&mut session, "Haus", NodeId(1));
    checker.check(&mut session, "tür", NodeId(2));
    checker.analyze(&mut session);
    let f = session.findings();
    assert!(!f[0].has_missing_whitespace_at_end());
    assert!(!f[1].has_missing_whitespace_at_begin());
}

#[test]
fn punctuation_opening_a_node_touches_previous_word() {
    let checker = german();
    let mut session = checker.new_session();
    checker.check(&mut session, "Haus", NodeId(1));
    checker.check(&mut session, ".", NodeId(2));
    checker.analyze(&mut session);

    let f = session.findings();
    assert!(f[1].is_touching_previous());
    assert!(!f[1].has_missing_whitespace_at_begin());

    let out = checker.apply_findings(&mut session);
    let contents: Vec<&str> = out.iter().map(|o| o.content.as_str()).collect();
    assert_eq!(contents, ["Haus", "."]);
}

#[test]
fn session_keeps_caches_between_checks() {
    let checker = german();
    let mut session = checker.new_session();
    checker.check(&mut session, "Lösungsvorschläge", NodeId(0));
    let cached = session.cached_lookups();
    assert!(cached > 0);
    session.reset();
    checker.check(&mut session, "Lösungsvorschläge", NodeId(0));
    assert_eq!(session.cached_lookups(), cached);
}

#[test]
fn added_word_is_found_in_running_session() {
    let mut checker = german();
    let mut session = checker.new_session();
    checker.check(&mut session, "Xylophon", NodeId(0));
    assert!(session.findings()[0].variants().is_empty());

    assert!(checker.add_word("de", Entry::new("Xy|lo|phon", "noun")));
    session.reset();
    checker.check(&mut session, "Xylophon", NodeId(0));
    assert_eq!(session.findings()[0].variants()[0].surface, "Xy|lo|phon");
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn options_from_json() {
    let checker = german();
    let options = checker
        .options()
        .merged_json(r#"{"hyphenation": false, "highlightKnownWords": true}"#)
        .unwrap();
    assert_eq!(
        checker.check_text_with("Haustür", &options),
        "<span class=\"spellcheck highlight ok\">Haustür</span>"
    );
}

#[test]
fn invalid_option_pattern_is_rejected() {
    let err = CheckOptions::default()
        .merged_json(r#"{"patternsToMark": ["[a-"]}"#)
        .unwrap_err();
    assert!(err.to_string().contains("[a-"));
}

#[test]
fn language_without_dictionaries_loses_grammar() {
    let checker = german();
    let options = CheckOptions::default().with_language("en");
    assert_eq!(
        checker.check_text_with("Lösungsvorschläge", &options),
        "<span class=\"spellcheck highlight error unknown\">Lösungsvorschläge</span>"
    );
    let options = CheckOptions::default().with_language("de");
    assert_eq!(
        visible(&checker.check_text_with("Lösungsvorschläge", &options)),
        "Lö|sungs|vor|schlä|ge"
    );
}

// ---------------------------------------------------------------------------
// Dictionary construction
// ---------------------------------------------------------------------------

#[test]
fn unknown_processor_is_a_construction_error() {
    let err = Dictionary::from_json(
        r#"{"name": "x", "processor": "nope", "words": []}"#,
        &ProcessorRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(err, DictionaryError::UnknownProcessor(name) if name == "nope"));
}

#[test]
fn invalid_format_is_a_construction_error() {
    let err = Dictionary::from_json(
        r#"{"name": "x", "dateformats": ["[0-9"]}"#,
        &ProcessorRegistry::new(),
    )
    .unwrap_err();
    assert!(matches!(err, DictionaryError::InvalidPattern { .. }));
}

#[test]
fn registered_processor_shapes_readings() {
    let mut registry = ProcessorRegistry::new();
    registry.register("abbreviate", |variants: Vec<Variant>| {
        variants
            .into_iter()
            .map(|mut v| {
                v.surface.push('.');
                v
            })
            .collect()
    });
    let dictionary = Dictionary::from_json(
        r#"{"name": "units", "processor": "abbreviate", "words": [{"w": "Nr", "type": "abbr"}]}"#,
        &registry,
    )
    .unwrap();
    let mut checker = Spellchecker::new();
    checker.add_dictionary(dictionary);
    assert_eq!(
        checker.check_text("Nr"),
        "<span class=\"spellcheck highlight warn mismatch\">Nr</span>"
    );
    assert_eq!(checker.check_text("Nr."), "<span class=\"spellcheck highlight error unknown\">Nr.</span>");
}
