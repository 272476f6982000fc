// Dictionary entries, morphemes and resolution variants

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::strip_break_markers;

// ---------------------------------------------------------------------------
// Word types
// ---------------------------------------------------------------------------

/// Word types the engine itself assigns or inspects.
///
/// Dictionaries are free to use any other type names; those only matter to
/// the composite grammar.
pub mod word_types {
    pub const COMPOSIT: &str = "composit";
    pub const ELISION: &str = "elision";
    pub const IGNORED: &str = "ignored";
    pub const PUNCTUATION: &str = "punctuation";
    pub const INTERPUNCTUATION: &str = "interpunctuation";
    pub const HYPHEN: &str = "hyphen";
    pub const STRUCTURE: &str = "structure";
    pub const CONJUNCTION: &str = "conjunction";
    pub const ABBREVIATION: &str = "abbr";
    pub const DATE: &str = "date";
    pub const NUMBER: &str = "number";
}

/// Attribute naming the grammatical role of an abbreviation.
pub const ABBREVIATION_TYPE_ATTRIBUTE: &str = "abbrType";

fn is_false(value: &bool) -> bool {
    !*value
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A word as stored in a dictionary.
///
/// `surface` keeps its original case and may contain `|` break markers.
/// Extra attributes (`unit`, `symbol`, `abbrType`, ...) are carried along
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "w")]
    pub surface: String,

    #[serde(rename = "type", default)]
    pub word_type: String,

    #[serde(rename = "endOfSentence", default, skip_serializing_if = "is_false")]
    pub end_of_sentence: bool,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Entry {
    pub fn new(surface: impl Into<String>, word_type: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            word_type: word_type.into(),
            end_of_sentence: false,
            attributes: BTreeMap::new(),
        }
    }

    /// Mark this entry as terminating a sentence.
    pub fn ending_sentence(mut self) -> Self {
        self.end_of_sentence = true;
        self
    }

    /// Attach an extra attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Lookup key: lowercase surface without break markers.
    pub fn index_key(&self) -> String {
        strip_break_markers(&self.surface).to_lowercase()
    }
}

// ---------------------------------------------------------------------------
// Morpheme
// ---------------------------------------------------------------------------

/// One link of a decomposition chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    #[serde(rename = "w")]
    pub surface: String,

    #[serde(rename = "type")]
    pub word_type: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, word_type: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            word_type: word_type.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// A candidate reading of a word.
///
/// Produced fresh for every lookup; callers own and may modify it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Surface with `|` at every breakable joint.
    #[serde(rename = "w")]
    pub surface: String,

    #[serde(rename = "type")]
    pub word_type: String,

    /// Decomposition chain. Either empty or at least two morphemes long.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composits: Vec<Morpheme>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub end_of_sentence: bool,

    /// Full word an elided fragment stands for.
    #[serde(rename = "elision", default, skip_serializing_if = "Option::is_none")]
    pub elision_of: Option<String>,

    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Variant {
    pub fn new(surface: impl Into<String>, word_type: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            word_type: word_type.into(),
            composits: Vec::new(),
            end_of_sentence: false,
            elision_of: None,
            attributes: BTreeMap::new(),
        }
    }

    /// A variant made of several morphemes.
    pub fn composed(
        surface: impl Into<String>,
        word_type: impl Into<String>,
        composits: Vec<Morpheme>,
        end_of_sentence: bool,
    ) -> Self {
        Self {
            composits,
            end_of_sentence,
            ..Self::new(surface, word_type)
        }
    }

    /// An elided fragment standing for `full`.
    pub fn elision(surface: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            elision_of: Some(full.into()),
            ..Self::new(surface, word_types::ELISION)
        }
    }

    /// Surface without break markers.
    pub fn plain_surface(&self) -> String {
        strip_break_markers(&self.surface)
    }

    /// Key used to keep variant lists free of duplicates.
    pub fn identity(&self) -> (&str, &str) {
        (&self.word_type, &self.surface)
    }

    /// The morphemes this variant is made of; itself when it is not composed.
    pub fn chain(&self) -> Vec<Morpheme> {
        if self.composits.is_empty() {
            vec![Morpheme::new(self.surface.clone(), self.word_type.clone())]
        } else {
            self.composits.clone()
        }
    }

    /// Morpheme at the right edge of this variant.
    pub fn last_morpheme(&self) -> Morpheme {
        match self.composits.last() {
            Some(m) => m.clone(),
            None => Morpheme::new(self.surface.clone(), self.word_type.clone()),
        }
    }

    /// Morpheme at the left edge of this variant.
    pub fn first_morpheme(&self) -> Morpheme {
        match self.composits.first() {
            Some(m) => m.clone(),
            None => Morpheme::new(self.surface.clone(), self.word_type.clone()),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether this variant reads as a conjunction, spelled out or abbreviated.
    pub fn is_conjunction(&self) -> bool {
        self.word_type == word_types::CONJUNCTION
            || (self.word_type == word_types::ABBREVIATION
                && self.attribute(ABBREVIATION_TYPE_ATTRIBUTE) == Some(word_types::CONJUNCTION))
    }

    /// Whether this variant is a sentence or clause punctuation mark.
    pub fn is_punctuation(&self) -> bool {
        self.word_type == word_types::PUNCTUATION || self.word_type == word_types::INTERPUNCTUATION
    }
}

impl From<Entry> for Variant {
    fn from(entry: Entry) -> Self {
        Self {
            surface: entry.surface,
            word_type: entry.word_type,
            composits: Vec::new(),
            end_of_sentence: entry.end_of_sentence,
            elision_of: None,
            attributes: entry.attributes,
        }
    }
}

/// Append `variant` unless an identical `(type, surface)` is already present.
///
/// Returns whether the variant was added.
pub fn push_unique(variants: &mut Vec<Variant>, variant: Variant) -> bool {
    if variants.iter().any(|v| v.identity() == variant.identity()) {
        return false;
    }
    variants.push(variant);
    true
}

/// Drop later duplicates, keeping first occurrences in order.
pub fn dedup_variants(variants: Vec<Variant>) -> Vec<Variant> {
    let mut out = Vec::with_capacity(variants.len());
    for v in variants {
        push_unique(&mut out, v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_from_json_keeps_extra_attributes() {
        let entry: Entry =
            serde_json::from_str(r#"{"w":"u.","type":"abbr","abbrType":"conjunction"}"#).unwrap();
        assert_eq!(entry.surface, "u.");
        assert_eq!(entry.word_type, "abbr");
        assert!(!entry.end_of_sentence);
        assert_eq!(entry.attributes.get("abbrType").map(String::as_str), Some("conjunction"));
    }

    #[test]
    fn entry_without_type_deserializes_with_empty_type() {
        let entry: Entry = serde_json::from_str(r#"{"w":"Haus"}"#).unwrap();
        assert!(entry.word_type.is_empty());
    }

    #[test]
    fn index_key_is_lowercase_and_unmarked() {
        assert_eq!(Entry::new("Lö|sungs", "noun-prefix").index_key(), "lösungs");
    }

    #[test]
    fn abbreviated_conjunction() {
        let v: Variant = Entry::new("u.", "abbr")
            .with_attribute(ABBREVIATION_TYPE_ATTRIBUTE, "conjunction")
            .into();
        assert!(v.is_conjunction());
        assert!(Variant::new("und", "conjunction").is_conjunction());
        assert!(!Variant::new("EU", "abbr").is_conjunction());
    }

    #[test]
    fn push_unique_uses_type_and_surface() {
        let mut list = vec![Variant::new("Haus", "noun")];
        assert!(!push_unique(&mut list, Variant::new("Haus", "noun")));
        assert!(push_unique(&mut list, Variant::new("Haus", "verb")));
        assert!(push_unique(&mut list, Variant::new("Ha|us", "noun")));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn chain_of_simple_variant_is_itself() {
        let v = Variant::new("Haus", "noun");
        assert_eq!(v.chain(), vec![Morpheme::new("Haus", "noun")]);
        assert_eq!(v.first_morpheme(), v.last_morpheme());
    }

    #[test]
    fn variant_serializes_compactly() {
        let v = Variant::elision("Be-", "Be|ar|bei|tung");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"w":"Be-","type":"elision","elision":"Be|ar|bei|tung"}"#);
    }
}
