// Word resolver: recursive decomposition within one dictionary
//
// A word resolves to its direct hits plus every split `leading + trailing`
// where `leading` is a direct hit, `trailing` resolves recursively, and the
// grammar has a rule for the morphemes meeting at the joint. Each recursive
// call works on a strictly shorter suffix, and every (dictionary, word)
// pair is resolved at most once per memo.

use hashbrown::HashMap;
use log::trace;

use wortwerk_core::character::BREAK_MARKER;
use wortwerk_core::entry::{dedup_variants, word_types};
use wortwerk_core::{Morpheme, Variant};

use crate::composition::context::ResolutionContext;
use crate::composition::grammar::CompositeGrammar;
use crate::dictionary::Dictionary;

// ---------------------------------------------------------------------------
// Memo
// ---------------------------------------------------------------------------

/// Resolved words keyed by dictionary slot and word.
///
/// Valid only for one dictionary set and one resolution context; the
/// owner discards it when either changes.
#[derive(Debug, Default)]
pub struct ResolverMemo {
    entries: HashMap<(usize, String), Vec<Variant>>,
    hits: usize,
}

impl ResolverMemo {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&mut self, slot: usize, word: &str) -> Option<Vec<Variant>> {
        let found = self.entries.get(&(slot, word.to_string())).cloned();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    fn insert(&mut self, slot: usize, word: &str, variants: Vec<Variant>) {
        self.entries.insert((slot, word.to_string()), variants);
    }

    /// Number of memoized (dictionary, word) pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many lookups were answered from the memo.
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Every reading of `word` in `dictionary`.
///
/// `slot` identifies the dictionary within the memo. Results are
/// deduplicated by type and surface and passed through the dictionary's
/// processor.
pub fn resolve(
    dictionary: &Dictionary,
    slot: usize,
    word: &str,
    context: &ResolutionContext,
    memo: &mut ResolverMemo,
) -> Vec<Variant> {
    if let Some(cached) = memo.get(slot, word) {
        trace!("memo hit: {}#{word}", dictionary.name());
        return cached;
    }

    let mut variants: Vec<Variant> = dictionary
        .lookup_exact(word, context)
        .unwrap_or_default()
        .into_iter()
        .map(Variant::from)
        .collect();

    let splits: Vec<usize> = word.char_indices().skip(1).map(|(i, _)| i).collect();
    for &split in splits.iter().rev() {
        let Some(leading) = dictionary.lookup_exact(&word[..split], context) else {
            continue;
        };
        if leading.is_empty() {
            continue;
        }
        let trailing = resolve(dictionary, slot, &word[split..], context, memo);
        if trailing.is_empty() {
            continue;
        }
        for l in leading.into_iter().map(Variant::from) {
            for t in &trailing {
                if let Some(composed) = compose_pair(&l, t, context.grammar()) {
                    variants.push(composed);
                }
            }
        }
    }

    let processed = dictionary.process(dedup_variants(variants));
    trace!(
        "resolved {}#{word}: {} variants",
        dictionary.name(),
        processed.len()
    );
    memo.insert(slot, word, processed.clone());
    processed
}

/// Combine a leading and a trailing reading under `grammar`.
///
/// The rule is chosen by the last morpheme of `leading` and the first of
/// `trailing`. A joining rule merges those two into one morpheme with a
/// break marker; otherwise they stay separate and concatenate directly.
pub fn compose_pair(
    leading: &Variant,
    trailing: &Variant,
    grammar: &CompositeGrammar,
) -> Option<Variant> {
    let lm = leading.last_morpheme();
    let tm = trailing.first_morpheme();
    let rule = grammar.rule(&lm.word_type, &tm.word_type)?;

    let shaped_leading = rule.shape_leading(&lm.surface);
    let shaped_trailing = rule.shape_trailing(&tm.surface);

    let keep = leading.composits.len().saturating_sub(1);
    let mut chain: Vec<Morpheme> = leading.composits[..keep].to_vec();
    if rule.join {
        chain.push(Morpheme::new(
            format!("{shaped_leading}{BREAK_MARKER}{shaped_trailing}"),
            rule.result_type.clone(),
        ));
    } else {
        chain.push(Morpheme::new(shaped_leading, lm.word_type));
        chain.push(Morpheme::new(shaped_trailing, tm.word_type));
    }
    chain.extend(trailing.composits.iter().skip(1).cloned());

    let surface: String = chain.iter().map(|m| m.surface.as_str()).collect();
    let end_of_sentence = rule.end_of_sentence || trailing.end_of_sentence;
    if chain.len() > 1 {
        Some(Variant::composed(
            surface,
            word_types::COMPOSIT,
            chain,
            end_of_sentence,
        ))
    } else {
        let mut merged = Variant::new(surface, rule.result_type.clone());
        merged.end_of_sentence = end_of_sentence;
        Some(merged)
    }
}
