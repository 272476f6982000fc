// Cross-dictionary composition of hyphenated compounds
//
// A single dictionary cannot read "EU-Kommission" when the abbreviation and
// the noun live in different dictionaries. The composer splits at the first
// hyphen, asks all dictionaries for the leading part (hyphen included) and
// composes the remainder recursively.

use wortwerk_core::Variant;
use wortwerk_core::entry::{push_unique, word_types};

use crate::composition::Lexicon;
use crate::composition::resolver::resolve;

impl Lexicon<'_> {
    /// Readings of `word` from every enabled dictionary, without duplicates.
    pub fn ask_dictionaries(&mut self, word: &str) -> Vec<Variant> {
        let mut variants = Vec::new();
        for (slot, dictionary) in self.dictionaries.iter().enumerate() {
            if !dictionary.is_enabled() {
                continue;
            }
            for v in resolve(dictionary, slot, word, self.context, self.memo) {
                push_unique(&mut variants, v);
            }
        }
        variants
    }

    /// Readings of `word`, including hyphenated compounds whose parts come
    /// from different dictionaries.
    ///
    /// A composed reading takes the trailing part's type, or the leading
    /// part's type when the trailing part is a bare hyphen.
    pub fn compose_across_dictionaries(&mut self, word: &str) -> Vec<Variant> {
        let mut variants = self.ask_dictionaries(word);
        let Some(hyphen) = word.find('-') else {
            return variants;
        };
        let (head, rest) = word.split_at(hyphen + 1);
        if rest.is_empty() {
            return variants;
        }
        let leading = self.ask_dictionaries(head);
        if leading.is_empty() {
            return variants;
        }
        let trailing = self.compose_across_dictionaries(rest);
        for l in &leading {
            for t in &trailing {
                let word_type = if t.word_type == word_types::HYPHEN {
                    l.word_type.clone()
                } else {
                    t.word_type.clone()
                };
                let mut chain = l.chain();
                chain.extend(t.chain());
                push_unique(
                    &mut variants,
                    Variant::composed(
                        format!("{}{}", l.surface, t.surface),
                        word_type,
                        chain,
                        t.end_of_sentence,
                    ),
                );
            }
        }
        variants
    }
}
