// Enumeration elision: "Be- und Verarbeitung", "Haustür und -fenster"
//
// A fragment ending in a hyphen borrows the tail of the next full word; a
// fragment starting with a hyphen borrows the head of a neighbouring one.
// Each candidate splice is re-queried against the dictionaries and kept
// only when attested.

use wortwerk_core::Morpheme;
use wortwerk_core::Variant;
use wortwerk_core::character::{break_positions, char_slice, strip_break_markers};
use wortwerk_core::entry::word_types;

use crate::analysis::finding::Finding;
use crate::analysis::inspect_fragment;
use crate::composition::{Lexicon, LookupScope};
use crate::dictionary::Dictionary;

/// Trailing hyphen of an elided fragment, with or without a comma.
fn elision_suffix(word: &str) -> Option<&'static str> {
    if word.ends_with('-') {
        Some("-")
    } else if word.ends_with("-,") {
        Some("-,")
    } else {
        None
    }
}

/// Two distinct findings, mutably.
fn pair_mut(findings: &mut [Finding], a: usize, b: usize) -> (&mut Finding, &mut Finding) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = findings.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = findings.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Search outward from a fragment for its partner in an enumeration.
///
/// Conjunctions and other fragments of the same kind are skipped.
pub(crate) fn join_enumerations(
    findings: &mut [Finding],
    i: usize,
    scopes: &mut [LookupScope],
    dictionaries: &[Dictionary],
) {
    let clean = findings[i].clean_word.clone();
    let scope = findings[i].scope;

    if elision_suffix(&clean).is_some() {
        let partner = (i + 1..findings.len()).find(|&p| {
            let f = &findings[p];
            !(f.is_conjunction() || elision_suffix(&f.clean_word).is_some())
        });
        if let Some(p) = partner {
            let (leading, trailing) = pair_mut(findings, i, p);
            check_joinable(leading, trailing, &mut scopes[scope].lexicon(dictionaries));
        }
    }

    if clean.starts_with('-') {
        let is_partner = |f: &Finding| !(f.is_conjunction() || f.clean_word.starts_with('-'));
        if let Some(p) = (0..i).rev().find(|&p| is_partner(&findings[p])) {
            let (leading, trailing) = pair_mut(findings, p, i);
            check_joinable(leading, trailing, &mut scopes[scope].lexicon(dictionaries));
        }
        if let Some(p) = (i + 1..findings.len()).find(|&p| is_partner(&findings[p])) {
            let (leading, trailing) = pair_mut(findings, p, i);
            check_joinable(leading, trailing, &mut scopes[scope].lexicon(dictionaries));
        }
    }
}

/// Try to complete elided fragments between `leading` and `trailing`.
///
/// - `leading` ends with `-`: its stem is spliced onto every breakable
///   joint of the trailing readings. Hits give `leading` an elision
///   reading, then the leading readings' heads are spliced onto the
///   trailing word in turn.
/// - `trailing` starts with `-`: the heads of the leading readings are
///   spliced onto it.
pub fn check_joinable(leading: &mut Finding, trailing: &mut Finding, lexicon: &mut Lexicon<'_>) {
    let leading_word = leading.clean_word.clone();
    if trailing.is_resolved() {
        if let Some(suffix) = elision_suffix(&leading_word) {
            let stem = &leading_word[..leading_word.len() - suffix.len()];

            for tv in trailing.variants().to_vec() {
                let tv_len = tv.surface.chars().count();
                for p in break_positions(&tv.surface) {
                    let tail = strip_break_markers(&char_slice(&tv.surface, p + 1, tv_len));
                    for hit in lexicon.ask_dictionaries(&format!("{stem}{tail}")) {
                        let keep = (hit.surface.chars().count() + p).saturating_sub(tv_len);
                        let head = char_slice(&hit.surface, 0, keep);
                        leading.add_variant(Variant::elision(format!("{head}{suffix}"), hit.surface));
                    }
                }
            }

            let trailing_word = trailing.clean_word.clone();
            for lv in leading.variants().to_vec() {
                for p in break_positions(&lv.surface) {
                    let head = strip_break_markers(&char_slice(&lv.surface, 0, p));
                    for hit in lexicon.ask_dictionaries(&format!("{head}{trailing_word}")) {
                        let mut v = Variant::elision(
                            char_slice(&hit.surface, p + 1, usize::MAX),
                            hit.surface.clone(),
                        );
                        v.end_of_sentence = hit.end_of_sentence;
                        trailing.add_variant(v);
                    }
                }
            }
        }
    }

    let trailing_word = trailing.clean_word.clone();
    if let Some(rest) = trailing_word.strip_prefix('-') {
        if !leading.is_resolved() {
            return;
        }
        for lv in leading.variants().to_vec() {
            for p in break_positions(&lv.surface) {
                let head = strip_break_markers(&char_slice(&lv.surface, 0, p));
                for hit in lexicon.ask_dictionaries(&format!("{head}{rest}")) {
                    let tail = char_slice(&hit.surface, p + 1, usize::MAX);
                    trailing.add_variant(Variant::elision(format!("-{tail}"), hit.surface));
                }
            }
        }
    }
}

/// Handle `a/-b` inside one token, e.g. "Haustür/-fenster".
///
/// Both sides are inspected as separate fragments and joined; every
/// elision reading of the right side yields a compound reading of the
/// whole token.
pub(crate) fn join_infix(
    findings: &mut [Finding],
    i: usize,
    scopes: &mut [LookupScope],
    dictionaries: &[Dictionary],
) {
    let current = &mut findings[i];
    let Some(slash) = current.clean_word.find("/-") else {
        return;
    };
    let left = current.clean_word[..slash].to_string();
    let right = current.clean_word[slash + 1..].to_string();
    let scope_index = current.scope;
    let scope = &mut scopes[scope_index];

    let options = current.options.clone();
    let node = current.node();
    let mut lead = inspect_fragment(&left, node, &options, scope_index, scope, dictionaries);
    let mut trail = inspect_fragment(&right, node, &options, scope_index, scope, dictionaries);
    check_joinable(&mut lead, &mut trail, &mut scope.lexicon(dictionaries));

    for lv in lead.variants() {
        for tv in trail.variants().iter().filter(|v| v.word_type == word_types::ELISION) {
            let mut chain = lv.chain();
            chain.push(Morpheme::new("/", word_types::STRUCTURE));
            chain.extend(tv.chain());
            current.add_variant(Variant::composed(
                format!("{}/{}", lv.surface, tv.surface),
                word_types::COMPOSIT,
                chain,
                tv.end_of_sentence,
            ));
        }
    }
}
