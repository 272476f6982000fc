//! Property tests for resolution and rendering invariants.

use proptest::prelude::*;
use wortwerk_core::character::strip_break_markers;
use wortwerk_core::{CaseTransform, CompositeRule, Entry, NodeId};
use wortwerk_engine::{CheckOptions, Dictionary, Spellchecker};

// -- Strategy helpers --

/// A dictionary surface: capitalized syllables joined by break markers.
fn arb_surface() -> impl Strategy<Value = String> {
    ("[A-ZÄÖÜ]", prop::collection::vec("[a-zäöüß]{1,4}", 1..4)).prop_map(|(first, syllables)| {
        let mut surface = first;
        surface.push_str(&syllables.join("|"));
        surface
    })
}

fn arb_noun() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,6}"
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z.,-]{1,10}", 0..8).prop_map(|words| words.join(" "))
}

fn checker_with(entries: Vec<Entry>) -> Spellchecker {
    let mut checker = Spellchecker::new();
    checker.add_dictionary(
        Dictionary::builder("generated")
            .words(entries)
            .rule(
                "noun",
                "noun",
                CompositeRule::joining("noun").with_trailing_case(CaseTransform::Lower),
            )
            .build()
            .unwrap(),
    );
    checker
}

proptest! {
    /// Every inserted entry resolves to itself.
    #[test]
    fn inserted_entries_resolve(surfaces in prop::collection::vec(arb_surface(), 1..6)) {
        let entries: Vec<Entry> = surfaces.iter().map(|s| Entry::new(s.clone(), "noun")).collect();
        let checker = checker_with(entries);
        for surface in &surfaces {
            let plain = strip_break_markers(surface);
            let variants = checker.resolve(&plain);
            prop_assert!(
                variants.iter().any(|v| v.plain_surface() == plain),
                "{} not resolved: {:?}", plain, variants
            );
        }
    }

    /// Two known nouns compose into a reading that reconstructs their concatenation.
    #[test]
    fn known_nouns_compose(a in arb_noun(), b in arb_noun()) {
        let checker = checker_with(vec![Entry::new(a.clone(), "noun"), Entry::new(b.clone(), "noun")]);
        let word = format!("{a}{}", b.to_lowercase());
        let variants = checker.resolve(&word);
        prop_assert!(
            variants.iter().any(|v| v.plain_surface() == word),
            "{} not composed: {:?}", word, variants
        );
    }

    /// Resolution terminates and memoizes each (dictionary, suffix) pair at most once.
    #[test]
    fn resolution_is_bounded(word in "[abeinrstu]{1,24}") {
        let checker = checker_with(vec![
            Entry::new("ab", "noun"),
            Entry::new("ein", "noun"),
            Entry::new("rast", "noun"),
            Entry::new("tu", "noun"),
            Entry::new("b", "noun"),
        ]);
        let mut session = checker.new_session();
        checker.check(&mut session, &word, NodeId(0));
        prop_assert!(session.cached_lookups() <= word.chars().count());
    }

    /// With highlighting off, checking changes nothing, so checking twice equals checking once.
    #[test]
    fn highlighting_off_is_idempotent(text in arb_text()) {
        let checker = checker_with(vec![Entry::new("Haus", "noun")]);
        let options = CheckOptions { highlighting: false, ..CheckOptions::default() };
        let once = checker.check_text_with(&text, &options);
        let twice = checker.check_text_with(&once, &options);
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(once, twice);
    }
}
