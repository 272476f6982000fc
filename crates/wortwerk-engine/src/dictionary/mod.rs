// Dictionary: word index, symbols, formats and an optional processor
//
// A dictionary is built once, then only changed through `add_word` and
// `set_enabled`. Lookups hand out owned copies of entries, so callers may
// modify results freely.

pub mod formats;
pub mod processor;
pub mod symbols;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use wortwerk_core::entry::word_types;
use wortwerk_core::{CompositeRule, Entry, Variant};

use crate::composition::context::ResolutionContext;
use crate::composition::grammar::CompositeGrammar;
use crate::error::DictionaryError;

use self::formats::{FormatMatcher, compile_all};
use self::processor::{Processor, ProcessorRegistry};
use self::symbols::SymbolTable;

// ---------------------------------------------------------------------------
// Data format
// ---------------------------------------------------------------------------

/// Dictionary contents as loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryData {
    pub name: String,

    #[serde(alias = "language", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Absent means enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub symbols: BTreeMap<String, Vec<Entry>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub composits: Option<CompositeGrammar>,

    #[serde(rename = "dateformats", alias = "dateFormats", skip_serializing_if = "Vec::is_empty")]
    pub date_formats: Vec<String>,

    #[serde(rename = "numberformats", alias = "numberFormats", skip_serializing_if = "Vec::is_empty")]
    pub number_formats: Vec<String>,

    /// Word type to patterns.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub formats: BTreeMap<String, Vec<String>>,

    pub words: Vec<Entry>,

    /// Name of a hook in the `ProcessorRegistry`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,
}

// ---------------------------------------------------------------------------
// Dictionary
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Dictionary {
    name: String,
    locale: Option<String>,
    enabled: bool,
    /// Lowercased, marker-free surface to entries.
    index: HashMap<String, Vec<Entry>>,
    symbols: SymbolTable,
    grammar: Option<CompositeGrammar>,
    formats: Vec<FormatMatcher>,
    processor: Option<Arc<dyn Processor>>,
}

impl Dictionary {
    pub fn builder(name: impl Into<String>) -> DictionaryBuilder {
        DictionaryBuilder::new(name)
    }

    /// Build a dictionary from loaded data.
    ///
    /// Fails when a format does not compile or the data names a processor
    /// that `registry` does not know.
    pub fn from_data(
        data: DictionaryData,
        registry: &ProcessorRegistry,
    ) -> Result<Self, DictionaryError> {
        let processor = match &data.processor {
            Some(name) => Some(
                registry
                    .get(name)
                    .ok_or_else(|| DictionaryError::UnknownProcessor(name.clone()))?,
            ),
            None => None,
        };
        Self::assemble(data, processor)
    }

    /// Parse JSON dictionary data and build it.
    pub fn from_json(json: &str, registry: &ProcessorRegistry) -> Result<Self, DictionaryError> {
        let data: DictionaryData = serde_json::from_str(json)?;
        Self::from_data(data, registry)
    }

    fn assemble(
        data: DictionaryData,
        processor: Option<Arc<dyn Processor>>,
    ) -> Result<Self, DictionaryError> {
        let mut formats = compile_all(word_types::DATE, &data.date_formats)?;
        formats.extend(compile_all(word_types::NUMBER, &data.number_formats)?);
        for (word_type, patterns) in &data.formats {
            formats.extend(compile_all(word_type, patterns)?);
        }

        let mut dictionary = Self {
            name: data.name,
            locale: data.locale.filter(|l| !l.is_empty()),
            enabled: data.enabled.unwrap_or(true),
            index: HashMap::new(),
            symbols: data.symbols.into_iter().collect(),
            grammar: data.composits,
            formats,
            processor,
        };
        for entry in data.words {
            dictionary.add_word(entry);
        }
        debug!(
            "dictionary `{}` built: {} keys, {} formats, grammar: {}",
            dictionary.name,
            dictionary.index.len(),
            dictionary.formats.len(),
            dictionary.grammar.is_some()
        );
        Ok(dictionary)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// The composite grammar this dictionary declares, if any.
    pub fn grammar(&self) -> Option<&CompositeGrammar> {
        self.grammar.as_ref()
    }

    /// Symbols declared by the dictionary data.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Whether this dictionary serves `language`. `None` matches everything.
    pub fn serves(&self, language: Option<&str>) -> bool {
        match language {
            None => true,
            Some(lang) => self.locale() == Some(lang),
        }
    }

    /// Number of distinct lookup keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Insert `entry` into the index.
    ///
    /// Entries without a surface or a type are ignored. Returns whether the
    /// entry was inserted.
    pub fn add_word(&mut self, entry: Entry) -> bool {
        if entry.surface.is_empty() || entry.word_type.is_empty() {
            return false;
        }
        self.index.entry(entry.index_key()).or_default().push(entry);
        true
    }

    /// Look `word` up without decomposing it.
    ///
    /// Consults, in order: the context's symbols, the built-in symbol table,
    /// the formats, and the case-insensitive index. `None` means unknown;
    /// `Some(vec![])` is never produced by `add_word` but is kept distinct.
    pub fn lookup_exact(&self, word: &str, context: &ResolutionContext) -> Option<Vec<Entry>> {
        if word.is_empty() {
            return None;
        }
        if let Some(entries) = context.symbols().get(word) {
            return Some(entries.clone());
        }
        if let Some(entries) = symbols::builtin().get(word) {
            return Some(entries.clone());
        }
        if let Some(format) = self.formats.iter().find(|f| f.matches(word)) {
            return Some(vec![Entry::new(word, format.word_type())]);
        }
        self.index.get(&word.to_lowercase()).cloned()
    }

    /// Run the post-processing hook. Identity when none is set.
    pub fn process(&self, variants: Vec<Variant>) -> Vec<Variant> {
        match &self.processor {
            Some(p) => p.process(variants),
            None => variants,
        }
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("name", &self.name)
            .field("locale", &self.locale)
            .field("enabled", &self.enabled)
            .field("keys", &self.index.len())
            .field("formats", &self.formats.len())
            .field("grammar", &self.grammar.is_some())
            .field("processor", &self.processor.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Programmatic construction of a `Dictionary`.
pub struct DictionaryBuilder {
    data: DictionaryData,
    processor: Option<Arc<dyn Processor>>,
}

impl DictionaryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: DictionaryData {
                name: name.into(),
                ..DictionaryData::default()
            },
            processor: None,
        }
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.data.locale = Some(locale.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.data.enabled = Some(enabled);
        self
    }

    pub fn word(mut self, entry: Entry) -> Self {
        self.data.words.push(entry);
        self
    }

    pub fn words(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        self.data.words.extend(entries);
        self
    }

    pub fn symbol(mut self, glyph: impl Into<String>, entry: Entry) -> Self {
        self.data.symbols.entry(glyph.into()).or_default().push(entry);
        self
    }

    pub fn grammar(mut self, grammar: CompositeGrammar) -> Self {
        self.data.composits = Some(grammar);
        self
    }

    /// Add one rule, creating the grammar on first use.
    pub fn rule(mut self, left: &str, right: &str, rule: CompositeRule) -> Self {
        self.data
            .composits
            .get_or_insert_with(CompositeGrammar::default)
            .insert(left, right, rule);
        self
    }

    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.data.date_formats.push(pattern.into());
        self
    }

    pub fn number_format(mut self, pattern: impl Into<String>) -> Self {
        self.data.number_formats.push(pattern.into());
        self
    }

    pub fn format(mut self, word_type: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.data
            .formats
            .entry(word_type.into())
            .or_default()
            .push(pattern.into());
        self
    }

    pub fn processor(mut self, processor: impl Processor + 'static) -> Self {
        self.processor = Some(Arc::new(processor));
        self
    }

    pub fn build(self) -> Result<Dictionary, DictionaryError> {
        Dictionary::assemble(self.data, self.processor)
    }
}
