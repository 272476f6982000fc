// Composition: grammar, per-dictionary resolution and cross-dictionary compounds

pub mod context;
pub mod cross;
pub mod grammar;
pub mod resolver;

use hashbrown::HashMap;

use wortwerk_core::Variant;

use crate::dictionary::Dictionary;

use self::context::ResolutionContext;
use self::resolver::ResolverMemo;

/// The dictionaries, context and memo a lookup runs against.
pub struct Lexicon<'a> {
    dictionaries: &'a [Dictionary],
    context: &'a ResolutionContext,
    memo: &'a mut ResolverMemo,
}

impl<'a> Lexicon<'a> {
    pub fn new(
        dictionaries: &'a [Dictionary],
        context: &'a ResolutionContext,
        memo: &'a mut ResolverMemo,
    ) -> Self {
        Self {
            dictionaries,
            context,
            memo,
        }
    }

    pub fn context(&self) -> &ResolutionContext {
        self.context
    }
}

// ---------------------------------------------------------------------------
// Lookup scope
// ---------------------------------------------------------------------------

/// Per-language lookup state owned by a check session.
///
/// Holds the resolution context, the resolver memo and the cache of
/// cross-dictionary readings by clean word. All three are only valid for
/// the dictionary set they were built from.
#[derive(Debug)]
pub struct LookupScope {
    language: Option<String>,
    context: ResolutionContext,
    memo: ResolverMemo,
    variants: HashMap<String, Vec<Variant>>,
}

impl LookupScope {
    pub fn new(dictionaries: &[Dictionary], language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
            context: ResolutionContext::for_language(dictionaries, language),
            memo: ResolverMemo::new(),
            variants: HashMap::new(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    pub fn memo(&self) -> &ResolverMemo {
        &self.memo
    }

    pub fn lexicon<'a>(&'a mut self, dictionaries: &'a [Dictionary]) -> Lexicon<'a> {
        Lexicon::new(dictionaries, &self.context, &mut self.memo)
    }

    /// Cross-dictionary readings of `word`, cached by word.
    pub fn variants_for(&mut self, dictionaries: &[Dictionary], word: &str) -> Vec<Variant> {
        if let Some(cached) = self.variants.get(word) {
            return cached.clone();
        }
        let variants = self.lexicon(dictionaries).compose_across_dictionaries(word);
        self.variants.insert(word.to_string(), variants.clone());
        variants
    }
}
