// Spellchecker: dictionaries, default options and check sessions
//
// The spellchecker owns the dictionaries and the default options. All
// per-document state lives in a `CheckSession`: findings, node texts, the
// per-language lookup caches and the two host hints for the next word.
//
// Design notes:
// - Dictionaries are shared read-only by every session. Every checker and
//   every change of its dictionary set draws a generation number that is
//   unique within the process; sessions compare it on every call and
//   rebuild their lookup caches when it differs, even when the session is
//   moved to another checker.
// - Each finding keeps the options it was checked with, so one session
//   can mix nodes checked under different options.
// - Text-level checks run in a fresh session and never touch the
//   caller's.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use wortwerk_core::character::replace_break_markers;
use wortwerk_core::{Entry, NodeId, Variant};

use crate::analysis::{self, Finding, inspect};
use crate::composition::LookupScope;
use crate::dictionary::Dictionary;
use crate::options::CheckOptions;
use crate::render::{NodeOutput, Replacement, apply_replacements};
use crate::tokenizer::{is_blank, tokenize};

// ============================================================================
// Session
// ============================================================================

/// Accumulated state of one document check.
#[derive(Debug)]
pub struct CheckSession {
    findings: Vec<Finding>,
    /// Checked node texts in check order.
    nodes: Vec<(NodeId, String)>,
    scopes: Vec<LookupScope>,
    generation: Option<u64>,
    assume_start_of_sentence: bool,
    case_insensitive_for_next_word: bool,
}

impl Default for CheckSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckSession {
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
            nodes: Vec::new(),
            scopes: Vec::new(),
            generation: None,
            assume_start_of_sentence: true,
            case_insensitive_for_next_word: false,
        }
    }

    /// Drop all findings and node texts. Lookup caches are kept.
    pub fn reset(&mut self) {
        self.findings.clear();
        self.nodes.clear();
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Treat the next word as the first of a sentence.
    pub fn set_assume_start_of_sentence(&mut self, value: bool) {
        self.assume_start_of_sentence = value;
    }

    /// Accept the next word in any case.
    pub fn set_case_insensitive_for_next_word(&mut self, value: bool) {
        self.case_insensitive_for_next_word = value;
    }

    /// Cached lookups across all language scopes.
    pub fn cached_lookups(&self) -> usize {
        self.scopes.iter().map(|s| s.memo().len()).sum()
    }

    fn sync(&mut self, generation: u64, dictionaries: &[Dictionary]) {
        if self.generation == Some(generation) {
            return;
        }
        if self.generation.is_some() {
            debug!(
                "dictionary set changed, rebuilding {} lookup scopes",
                self.scopes.len()
            );
        }
        // Rebuilt in place: findings refer to scopes by index.
        for scope in &mut self.scopes {
            let language = scope.language().map(str::to_string);
            *scope = LookupScope::new(dictionaries, language.as_deref());
        }
        self.generation = Some(generation);
    }

    fn scope_index(&mut self, dictionaries: &[Dictionary], language: Option<&str>) -> usize {
        if let Some(i) = self.scopes.iter().position(|s| s.language() == language) {
            return i;
        }
        self.scopes.push(LookupScope::new(dictionaries, language));
        self.scopes.len() - 1
    }

    fn remember_node(&mut self, node: NodeId, text: &str) {
        match self.nodes.iter_mut().find(|(n, _)| *n == node) {
            Some((_, stored)) => *stored = text.to_string(),
            None => self.nodes.push((node, text.to_string())),
        }
    }
}

// ============================================================================
// Spellchecker
// ============================================================================

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Dictionaries plus default options.
///
/// `Spellchecker` is `Send + Sync`; sessions are independent and may run
/// on different threads against the same checker.
#[derive(Debug)]
pub struct Spellchecker {
    dictionaries: Vec<Dictionary>,
    options: CheckOptions,
    generation: u64,
}

impl Default for Spellchecker {
    fn default() -> Self {
        Self {
            dictionaries: Vec::new(),
            options: CheckOptions::default(),
            generation: next_generation(),
        }
    }
}

impl Spellchecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CheckOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    fn touch(&mut self) {
        self.generation = next_generation();
    }

    /// Append a dictionary. Later dictionaries are consulted after earlier ones.
    pub fn add_dictionary(&mut self, dictionary: Dictionary) {
        debug!(
            "adding dictionary {} ({} keys, locale {:?})",
            dictionary.name(),
            dictionary.len(),
            dictionary.locale()
        );
        self.dictionaries.push(dictionary);
        self.touch();
    }

    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    /// Mutable access to a dictionary by name. Invalidates session caches.
    pub fn dictionary_mut(&mut self, name: &str) -> Option<&mut Dictionary> {
        let index = self.dictionaries.iter().position(|d| d.name() == name)?;
        self.touch();
        Some(&mut self.dictionaries[index])
    }

    /// Add a word to the named dictionary.
    ///
    /// Returns `false` when no such dictionary exists or the entry lacks a
    /// surface or type.
    pub fn add_word(&mut self, dictionary: &str, entry: Entry) -> bool {
        self.dictionary_mut(dictionary)
            .is_some_and(|d| d.add_word(entry))
    }

    /// Enable or disable the named dictionary. Returns whether it exists.
    pub fn set_dictionary_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.dictionary_mut(name) {
            Some(d) => {
                d.set_enabled(enabled);
                debug!("dictionary {name} enabled={enabled}");
                true
            }
            None => false,
        }
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut CheckOptions {
        &mut self.options
    }

    pub fn new_session(&self) -> CheckSession {
        CheckSession::new()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether known words are rendered with soft hyphens.
    pub fn set_hyphenation(&mut self, value: bool) {
        self.options.hyphenation = value;
    }

    /// Set whether `apply_findings` changes the text at all.
    pub fn set_highlighting(&mut self, value: bool) {
        self.options.highlighting = value;
    }

    pub fn set_highlight_known_words(&mut self, value: bool) {
        self.options.highlight_known_words = value;
    }

    pub fn set_highlight_unknown_words(&mut self, value: bool) {
        self.options.highlight_unknown_words = value;
    }

    pub fn set_highlight_case_warnings(&mut self, value: bool) {
        self.options.highlight_case_warnings = value;
    }

    /// Take symbols and composite rules from one locale only. `None` uses all.
    pub fn set_language(&mut self, language: Option<String>) {
        self.options.language = language;
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Tokenize and resolve `text` of `node` with the default options.
    pub fn check(&self, session: &mut CheckSession, text: &str, node: NodeId) {
        self.check_with(session, text, node, &self.options);
    }

    /// Tokenize and resolve `text` of `node` with `options`.
    ///
    /// Findings are appended to `session`. A text consisting of the cursor
    /// marker alone adds nothing. A blank text stops missing-whitespace
    /// detection after the previous finding.
    pub fn check_with(
        &self,
        session: &mut CheckSession,
        text: &str,
        node: NodeId,
        options: &CheckOptions,
    ) {
        session.sync(self.generation, &self.dictionaries);
        session.remember_node(node, text);
        if text == options.cursor_marker {
            return;
        }

        let options = Arc::new(options.clone());
        let scope_index = session.scope_index(&self.dictionaries, options.language.as_deref());
        let node_len = text.chars().count();

        for token in tokenize(text, node, &options.cursor_marker) {
            let mut finding = inspect(
                token,
                node_len,
                &options,
                scope_index,
                &mut session.scopes[scope_index],
                &self.dictionaries,
            );
            finding.case_insensitive = std::mem::take(&mut session.case_insensitive_for_next_word);
            finding.assume_start_of_sentence = std::mem::take(&mut session.assume_start_of_sentence);
            session.findings.push(finding);
        }

        if is_blank(text, &options.cursor_marker) {
            if let Some(last) = session.findings.last_mut() {
                last.check_whitespace_at_end = false;
            }
        }
    }

    /// Run cross-token analysis over everything checked so far.
    pub fn analyze(&self, session: &mut CheckSession) {
        session.sync(self.generation, &self.dictionaries);
        analysis::analyze(&mut session.findings, &mut session.scopes, &self.dictionaries);
    }

    /// Render all findings into their node texts with the default options.
    pub fn apply_findings(&self, session: &mut CheckSession) -> Vec<NodeOutput> {
        self.apply_findings_with(session, &self.options)
    }

    /// Render all findings into their node texts.
    ///
    /// `options` decides whether anything is replaced and whether the
    /// session resets afterwards; every finding renders with the options
    /// it was checked with.
    pub fn apply_findings_with(
        &self,
        session: &mut CheckSession,
        options: &CheckOptions,
    ) -> Vec<NodeOutput> {
        let outputs: Vec<NodeOutput> = session
            .nodes
            .iter()
            .map(|(node, text)| {
                let content = if options.highlighting {
                    let replacements: Vec<Replacement> = session
                        .findings
                        .iter()
                        .filter(|f| f.node() == *node)
                        .map(Replacement::for_finding)
                        .collect();
                    apply_replacements(text, &replacements)
                } else {
                    text.clone()
                };
                NodeOutput {
                    node: *node,
                    content,
                }
            })
            .collect();
        if options.auto_reset_after_apply {
            session.reset();
        }
        outputs
    }

    /// Check, analyze and render a whole text with the default options.
    pub fn check_text(&self, text: &str) -> String {
        self.check_text_with(text, &self.options)
    }

    /// Check, analyze and render a whole text in a fresh session.
    pub fn check_text_with(&self, text: &str, options: &CheckOptions) -> String {
        let mut session = self.new_session();
        self.check_with(&mut session, text, NodeId::default(), options);
        self.analyze(&mut session);
        self.apply_findings_with(&mut session, options)
            .into_iter()
            .next()
            .map_or_else(|| text.to_string(), |out| out.content)
    }

    /// Resolve a single word without context.
    pub fn check_word(&self, word: &str) -> Finding {
        let options = Arc::new(self.options.clone());
        let mut scope = LookupScope::new(&self.dictionaries, options.language.as_deref());
        analysis::inspect_fragment(word, NodeId::default(), &options, 0, &mut scope, &self.dictionaries)
    }

    /// Every reading of `word` across the dictionaries.
    pub fn resolve(&self, word: &str) -> Vec<Variant> {
        self.check_word(word).variants().to_vec()
    }

    /// `word` with its break points replaced by `separator`.
    ///
    /// Uses the first reading that matches `word` exactly, then the first
    /// that matches ignoring case. `None` for unknown words.
    pub fn hyphenate(&self, word: &str, separator: &str) -> Option<String> {
        let variants = self.resolve(word);
        let exact = variants.iter().find(|v| v.plain_surface() == word);
        let lowered = word.to_lowercase();
        let reading = exact.or_else(|| {
            variants
                .iter()
                .find(|v| v.plain_surface().to_lowercase() == lowered)
        })?;
        Some(replace_break_markers(&reading.surface, separator))
    }
}
