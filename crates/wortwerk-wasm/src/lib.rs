// WASM bindings for the wortwerk compound spellchecker.
//
// Provides a `WasmSpellchecker` class exported via wasm-bindgen that wraps
// a `Spellchecker` together with one `CheckSession`. Findings and node
// outputs are serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellchecker();
//   checker.addDictionary(deJson);
//   checker.checkText("Lösungsvorschläge");  // => "Lö­sungs­vor..."
//   checker.check("Die Haus", 1);
//   checker.check("tür ist gut.", 2);
//   checker.analyze();
//   checker.applyFindings();                 // => [{ nodeId: 1, content: "..." }, ...]
//   checker.setOptions('{"hyphenation": false}');

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wortwerk_core::classification::Classification;
use wortwerk_core::entry::Variant;
use wortwerk_core::token::NodeId;
use wortwerk_engine::render::{self, NodeOutput};
use wortwerk_engine::{CheckSession, Dictionary, Finding, ProcessorRegistry, Spellchecker};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Rendered content of one checked node.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsNodeOutput {
    node_id: u32,
    content: String,
}

/// One checked token and its verdict.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFinding {
    node_id: u32,
    word: String,
    clean_word: String,
    offset: usize,
    /// "passthrough", "error", "known", "case", or "mismatch".
    classification: &'static str,
    /// Correctly cased form for "case" findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    correction: Option<String>,
    variants: Vec<Variant>,
    end_of_sentence: bool,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn classification_to_js(classification: &Classification) -> (&'static str, Option<String>) {
    match classification {
        Classification::Passthrough => ("passthrough", None),
        Classification::Error(_) => ("error", None),
        Classification::Known { .. } => ("known", None),
        Classification::CaseWarning { expected } => ("case", Some(expected.clone())),
        Classification::Mismatch => ("mismatch", None),
    }
}

fn finding_to_js(finding: &Finding) -> JsFinding {
    let (classification, correction) =
        classification_to_js(&render::classify(finding, finding.options()));
    JsFinding {
        node_id: finding.node().0,
        word: finding.raw().to_string(),
        clean_word: finding.clean_word().to_string(),
        offset: finding.offset(),
        classification,
        correction,
        variants: finding.variants().to_vec(),
        end_of_sentence: finding.end_of_sentence(),
    }
}

fn output_to_js(output: NodeOutput) -> JsNodeOutput {
    JsNodeOutput {
        node_id: output.node.0,
        content: output.content,
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmSpellchecker
// ============================================================================

/// German compound spellchecker for WebAssembly.
///
/// Holds the dictionaries, the current options and one check session.
#[wasm_bindgen]
pub struct WasmSpellchecker {
    checker: Spellchecker,
    session: CheckSession,
    registry: ProcessorRegistry,
}

impl Default for WasmSpellchecker {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmSpellchecker {
    /// Create a checker with no dictionaries and default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSpellchecker {
        let checker = Spellchecker::new();
        let session = checker.new_session();
        WasmSpellchecker {
            checker,
            session,
            registry: ProcessorRegistry::new(),
        }
    }

    /// Add a dictionary from its JSON description.
    ///
    /// Dictionaries are consulted in the order they were added.
    #[wasm_bindgen(js_name = "addDictionary")]
    pub fn add_dictionary(&mut self, json: &str) -> Result<(), JsError> {
        let dictionary =
            Dictionary::from_json(json, &self.registry).map_err(|e| JsError::new(&e.to_string()))?;
        self.checker.add_dictionary(dictionary);
        Ok(())
    }

    /// Enable or disable a dictionary by name. Returns false if none matched.
    #[wasm_bindgen(js_name = "setDictionaryEnabled")]
    pub fn set_dictionary_enabled(&mut self, name: &str, enabled: bool) -> bool {
        self.checker.set_dictionary_enabled(name, enabled)
    }

    /// Names of the loaded dictionaries, in lookup order.
    #[wasm_bindgen(js_name = "dictionaryNames")]
    pub fn dictionary_names(&self) -> Vec<String> {
        self.checker
            .dictionaries()
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    }

    /// Check a standalone text and return it with markup applied.
    ///
    /// Uses a fresh session; pending `check` calls are not affected.
    #[wasm_bindgen(js_name = "checkText")]
    pub fn check_text(&self, text: &str) -> String {
        self.checker.check_text(text)
    }

    /// Tokenize and resolve the text of one node.
    ///
    /// Nodes are analyzed together by `analyze` and rendered by
    /// `applyFindings` in the order they were checked.
    pub fn check(&mut self, text: &str, node_id: u32) {
        self.checker.check(&mut self.session, text, NodeId(node_id));
    }

    /// Run the cross-token passes over everything checked so far.
    pub fn analyze(&mut self) {
        self.checker.analyze(&mut self.session);
    }

    /// Render every checked node.
    ///
    /// Returns a JavaScript array of `{ nodeId, content }` objects.
    #[wasm_bindgen(js_name = "applyFindings")]
    pub fn apply_findings(&mut self) -> Result<JsValue, JsError> {
        let outputs: Vec<JsNodeOutput> = self
            .checker
            .apply_findings(&mut self.session)
            .into_iter()
            .map(output_to_js)
            .collect();
        to_js(&outputs)
    }

    /// Current findings of the session.
    ///
    /// Returns a JavaScript array of objects with fields `nodeId`, `word`,
    /// `cleanWord`, `offset`, `classification`, `correction`, `variants`,
    /// `endOfSentence`.
    pub fn findings(&self) -> Result<JsValue, JsError> {
        let findings: Vec<JsFinding> = self.session.findings().iter().map(finding_to_js).collect();
        to_js(&findings)
    }

    /// Every reading of a single word.
    #[wasm_bindgen(js_name = "resolveWord")]
    pub fn resolve_word(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&self.checker.resolve(word))
    }

    /// Hyphenate a known word. Returns null for unknown words.
    pub fn hyphenate(&self, word: &str, separator: &str) -> Option<String> {
        self.checker.hyphenate(word, separator)
    }

    /// Drop all findings and nodes of the session.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Treat the next checked word as the start of a sentence.
    #[wasm_bindgen(js_name = "setAssumeStartOfSentence")]
    pub fn set_assume_start_of_sentence(&mut self, value: bool) {
        self.session.set_assume_start_of_sentence(value);
    }

    /// Ignore case for the next checked word only.
    #[wasm_bindgen(js_name = "setCaseInsensitiveForNextWord")]
    pub fn set_case_insensitive_for_next_word(&mut self, value: bool) {
        self.session.set_case_insensitive_for_next_word(value);
    }

    /// Override options from a camelCase JSON object.
    ///
    /// Keys not present keep their current value.
    #[wasm_bindgen(js_name = "setOptions")]
    pub fn set_options(&mut self, json: &str) -> Result<(), JsError> {
        let merged = self
            .checker
            .options()
            .merged_json(json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        *self.checker.options_mut() = merged;
        Ok(())
    }

    /// Set whether known words are rendered with soft hyphens.
    #[wasm_bindgen(js_name = "setHyphenation")]
    pub fn set_hyphenation(&mut self, value: bool) {
        self.checker.set_hyphenation(value);
    }

    /// Set whether `applyFindings` changes the text at all.
    #[wasm_bindgen(js_name = "setHighlighting")]
    pub fn set_highlighting(&mut self, value: bool) {
        self.checker.set_highlighting(value);
    }

    /// Restrict symbols and composite rules to one locale. Null uses all.
    #[wasm_bindgen(js_name = "setLanguage")]
    pub fn set_language(&mut self, language: Option<String>) {
        self.checker.set_language(language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICTIONARY: &str = r#"{
      "name": "de",
      "locale": "de",
      "composits": {
        "noun": { "noun": { "join": true, "type": "noun", "tlower": true } }
      },
      "words": [
        { "w": "Haus", "type": "noun" },
        { "w": "Tür", "type": "noun" }
      ]
    }"#;

    fn checker() -> WasmSpellchecker {
        let mut checker = WasmSpellchecker::new();
        checker.add_dictionary(DICTIONARY).unwrap();
        checker
    }

    #[test]
    fn check_text_hyphenates() {
        let checker = checker();
        assert_eq!(checker.check_text("Haustür"), "Haus\u{00AD}tür");
        assert_eq!(checker.dictionary_names(), vec!["de".to_string()]);
    }

    #[test]
    fn set_options_merges() {
        let mut checker = checker();
        checker.set_options(r#"{"hyphenation": false}"#).unwrap();
        assert_eq!(checker.check_text("Haustür"), "Haustür");
        assert!(checker.checker.options().highlighting);
    }

    #[test]
    fn findings_describe_tokens() {
        let mut checker = checker();
        checker.check("Haus Xylophon", 1);
        checker.analyze();
        let findings: Vec<JsFinding> = checker.session.findings().iter().map(finding_to_js).collect();
        let words: Vec<(&str, &str)> = findings
            .iter()
            .map(|f| (f.clean_word.as_str(), f.classification))
            .collect();
        assert!(words.contains(&("Haus", "known")));
        assert!(words.contains(&("Xylophon", "error")));
        assert!(findings.iter().all(|f| f.node_id == 1));
    }

    #[test]
    fn hyphenate_unknown_is_none() {
        let checker = checker();
        assert_eq!(checker.hyphenate("Haustür", "-").as_deref(), Some("Haus-tür"));
        assert_eq!(checker.hyphenate("Xylophon", "-"), None);
    }

    #[test]
    fn reset_clears_findings() {
        let mut checker = checker();
        checker.check("Haus", 1);
        assert!(!checker.session.findings().is_empty());
        checker.reset();
        assert!(checker.session.findings().is_empty());
    }
}
