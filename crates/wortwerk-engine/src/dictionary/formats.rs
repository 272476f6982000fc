// Regex-based word formats (dates, numbers, custom types)

use regex::Regex;

use crate::error::DictionaryError;

/// A whole-word pattern that classifies matching words as `word_type`.
#[derive(Debug, Clone)]
pub struct FormatMatcher {
    word_type: String,
    regex: Regex,
}

impl FormatMatcher {
    /// Compile `pattern`, anchored at both ends.
    pub fn new(word_type: &str, pattern: &str) -> Result<Self, DictionaryError> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            DictionaryError::InvalidPattern {
                kind: word_type.to_string(),
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            word_type: word_type.to_string(),
            regex,
        })
    }

    pub fn word_type(&self) -> &str {
        &self.word_type
    }

    pub fn matches(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

/// Compile every pattern of one type.
pub fn compile_all<S: AsRef<str>>(
    word_type: &str,
    patterns: &[S],
) -> Result<Vec<FormatMatcher>, DictionaryError> {
    patterns
        .iter()
        .map(|p| FormatMatcher::new(word_type, p.as_ref()))
        .collect()
}
