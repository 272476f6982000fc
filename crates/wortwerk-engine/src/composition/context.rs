// Resolution context shared by all dictionaries during a check

use log::debug;

use crate::composition::grammar::CompositeGrammar;
use crate::dictionary::Dictionary;
use crate::dictionary::symbols::{SymbolTable, merge_symbols};

/// Symbols and grammar in effect for one language.
///
/// Every dictionary resolves against the same context, which lets a
/// dictionary without a grammar (abbreviations, trademarks) take part in
/// compounds governed by another dictionary's grammar.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    symbols: SymbolTable,
    grammar: CompositeGrammar,
}

impl ResolutionContext {
    pub fn new(symbols: SymbolTable, grammar: CompositeGrammar) -> Self {
        Self { symbols, grammar }
    }

    /// Build the context for `language` from `dictionaries`.
    ///
    /// Symbols of all serving dictionaries are merged. The grammar is taken
    /// from the first serving dictionary that declares one.
    pub fn for_language(dictionaries: &[Dictionary], language: Option<&str>) -> Self {
        let mut symbols = SymbolTable::new();
        let mut grammar = None;
        for dictionary in dictionaries.iter().filter(|d| d.serves(language)) {
            merge_symbols(&mut symbols, dictionary.symbols());
            if grammar.is_none() {
                grammar = dictionary.grammar().cloned();
            }
        }
        let grammar = grammar.unwrap_or_default();
        debug!(
            "resolution context for {:?}: {} symbols, {} grammar rules",
            language,
            symbols.len(),
            grammar.len()
        );
        Self { symbols, grammar }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn grammar(&self) -> &CompositeGrammar {
        &self.grammar
    }
}
