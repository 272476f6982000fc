// Analysis: turning tokens into findings and reasoning across them
//
// Phase 1 (`inspect`) resolves every token on its own. Phase 2 (`analyze`)
// walks the ordered findings once: missing whitespace between nodes first,
// then sentence propagation, standalone punctuation and elision joins.

pub mod elision;
pub mod finding;
pub mod whitespace;

use std::sync::Arc;

use log::debug;

use wortwerk_core::character::{clean_word, is_sentence_terminal};
use wortwerk_core::entry::word_types;
use wortwerk_core::{NodeId, Token, Variant};

use crate::composition::LookupScope;
use crate::dictionary::Dictionary;
use crate::options::CheckOptions;
use crate::tokenizer::cursor_placement;

pub use self::finding::Finding;

// ============================================================================
// Phase 1
// ============================================================================

/// Build the finding for one token.
///
/// Ignore patterns win over mark patterns; both skip the lookup. An empty
/// clean word (a lone cursor marker) is never looked up.
pub(crate) fn inspect(
    token: Token,
    node_len: usize,
    options: &Arc<CheckOptions>,
    scope_index: usize,
    scope: &mut LookupScope,
    dictionaries: &[Dictionary],
) -> Finding {
    let clean = clean_word(&token.raw, &options.cursor_marker);
    let variants = if options.is_ignored(&clean) {
        Some(vec![Variant::new(clean.clone(), word_types::IGNORED)])
    } else if options.is_marked(&clean) {
        Some(Vec::new())
    } else if clean.is_empty() {
        None
    } else {
        Some(scope.variants_for(dictionaries, &clean))
    };
    let mut finding = Finding::new(token, clean, node_len, scope_index, Arc::clone(options));
    finding.variants = variants;
    finding
}

/// Inspect a word that is not a token of its own (one side of `a/-b`).
pub(crate) fn inspect_fragment(
    word: &str,
    node: NodeId,
    options: &Arc<CheckOptions>,
    scope_index: usize,
    scope: &mut LookupScope,
    dictionaries: &[Dictionary],
) -> Finding {
    let (cursor_positions, cursor) = cursor_placement(word, &options.cursor_marker);
    let token = Token {
        raw: word.to_string(),
        node,
        offset: 0,
        byte_offset: 0,
        cursor_positions,
        cursor,
    };
    let len = token.char_len();
    inspect(token, len, options, scope_index, scope, dictionaries)
}

// ============================================================================
// Phase 2
// ============================================================================

/// Cross-token analysis over all findings of a session.
pub(crate) fn analyze(
    findings: &mut [Finding],
    scopes: &mut [LookupScope],
    dictionaries: &[Dictionary],
) {
    whitespace::detect_missing_whitespace(findings, scopes, dictionaries);

    for i in 0..findings.len() {
        let (before, rest) = findings.split_at_mut(i);
        let previous = before.last();
        let current = &mut rest[0];
        mark_sentence_and_punctuation(current, previous);

        elision::join_enumerations(findings, i, scopes, dictionaries);
        elision::join_infix(findings, i, scopes, dictionaries);
    }

    debug!(
        "analyzed {} findings: {} sentence ends, {} missing whitespace",
        findings.len(),
        findings.iter().filter(|f| f.end_of_sentence).count(),
        findings
            .iter()
            .filter(|f| f.missing_whitespace_at_begin || f.missing_whitespace_at_end)
            .count()
    );
}

fn mark_sentence_and_punctuation(current: &mut Finding, previous: Option<&Finding>) {
    if previous.is_some_and(|p| p.end_of_sentence) {
        current.assume_start_of_sentence = true;
    }

    let variants = current.variants();
    if variants.is_empty() {
        current.end_of_sentence = current
            .clean_word
            .chars()
            .last()
            .is_some_and(is_sentence_terminal);
        return;
    }

    let all_end = variants.iter().all(|v| v.end_of_sentence);
    let sole_punctuation = variants.len() == 1 && variants[0].is_punctuation();
    if all_end {
        current.end_of_sentence = true;
    }
    if sole_punctuation {
        current.is_touching_previous = current.offset() == 0
            && previous.is_some_and(|p| p.touches_node_end());
    }
}
