//! Dictionary-driven compound decomposition, hyphenation and highlighting.
//!
//! Text goes through three phases: tokens are resolved against the
//! dictionaries one by one, then analyzed across token boundaries, then
//! rendered back into the text with soft hyphens and highlight markup.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Word index, symbols, formats and processor hooks
//! - [`composition`] -- Composite grammar, recursive resolver, cross-dictionary compounds
//! - [`tokenizer`] -- Whitespace tokenization with cursor marker tracking
//! - [`analysis`] -- Findings, sentence propagation, elision joins, missing whitespace
//! - [`render`] -- Classification and markup
//! - [`spellchecker`] -- Dictionary set, default options and check sessions

pub mod analysis;
pub mod composition;
pub mod dictionary;
pub mod error;
pub mod options;
pub mod render;
pub mod spellchecker;
pub mod tokenizer;

pub use analysis::Finding;
pub use composition::grammar::CompositeGrammar;
pub use dictionary::processor::{Processor, ProcessorRegistry};
pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryData};
pub use error::{DictionaryError, OptionsError};
pub use options::{CheckOptions, CheckOptionsData};
pub use render::{NodeOutput, Replacement};
pub use spellchecker::{CheckSession, Spellchecker};
