// Finding: the per-token analysis record

use std::sync::Arc;

use wortwerk_core::entry::push_unique;
use wortwerk_core::{CursorPlacement, NodeId, Token, Variant};

use crate::options::CheckOptions;

/// What the engine knows about one token.
///
/// Created when a token is checked, refined by `analyze`, and read by the
/// renderer.
#[derive(Debug, Clone)]
pub struct Finding {
    pub(crate) token: Token,
    pub(crate) clean_word: String,
    /// `None` when nothing was looked up (empty clean word).
    pub(crate) variants: Option<Vec<Variant>>,

    pub(crate) assume_start_of_sentence: bool,
    pub(crate) case_insensitive: bool,
    pub(crate) end_of_sentence: bool,
    pub(crate) is_touching_previous: bool,
    pub(crate) missing_whitespace_at_begin: bool,
    pub(crate) missing_whitespace_at_end: bool,
    pub(crate) check_whitespace_at_begin: bool,
    pub(crate) check_whitespace_at_end: bool,

    /// Length of the node text in characters.
    pub(crate) node_len: usize,
    /// Index of the session lookup scope this token was resolved in.
    pub(crate) scope: usize,
    pub(crate) options: Arc<CheckOptions>,
}

impl Finding {
    pub(crate) fn new(
        token: Token,
        clean_word: String,
        node_len: usize,
        scope: usize,
        options: Arc<CheckOptions>,
    ) -> Self {
        Self {
            token,
            clean_word,
            variants: None,
            assume_start_of_sentence: false,
            case_insensitive: false,
            end_of_sentence: false,
            is_touching_previous: false,
            missing_whitespace_at_begin: false,
            missing_whitespace_at_end: false,
            check_whitespace_at_begin: options.check_whitespace_at_begin,
            check_whitespace_at_end: options.check_whitespace_at_end,
            node_len,
            scope,
            options,
        }
    }

    /// Add a variant unless one with the same type and surface exists.
    pub(crate) fn add_variant(&mut self, variant: Variant) -> bool {
        push_unique(self.variants.get_or_insert_with(Vec::new), variant)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The token as it appeared in the text.
    pub fn raw(&self) -> &str {
        &self.token.raw
    }

    /// The token as it was looked up.
    pub fn clean_word(&self) -> &str {
        &self.clean_word
    }

    /// Readings found for the token. Empty when unknown or never looked up.
    pub fn variants(&self) -> &[Variant] {
        self.variants.as_deref().unwrap_or(&[])
    }

    /// Whether a lookup took place.
    pub fn is_resolved(&self) -> bool {
        self.variants.is_some()
    }

    pub fn node(&self) -> NodeId {
        self.token.node
    }

    /// Character offset within the node text.
    pub fn offset(&self) -> usize {
        self.token.offset
    }

    pub fn byte_offset(&self) -> usize {
        self.token.byte_offset
    }

    pub fn cursor(&self) -> CursorPlacement {
        self.token.cursor
    }

    pub fn assume_start_of_sentence(&self) -> bool {
        self.assume_start_of_sentence
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn end_of_sentence(&self) -> bool {
        self.end_of_sentence
    }

    pub fn is_touching_previous(&self) -> bool {
        self.is_touching_previous
    }

    pub fn has_missing_whitespace_at_begin(&self) -> bool {
        self.missing_whitespace_at_begin
    }

    pub fn has_missing_whitespace_at_end(&self) -> bool {
        self.missing_whitespace_at_end
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    /// Whether any reading is a conjunction.
    pub(crate) fn is_conjunction(&self) -> bool {
        self.variants().iter().any(Variant::is_conjunction)
    }

    /// Whether the token reaches the end of its node.
    pub(crate) fn touches_node_end(&self) -> bool {
        self.offset() + self.token.char_len() == self.node_len
    }
}
