// Check options
//
// `CheckOptions` carries every switch a check run understands. Hosts that
// speak JSON build one from `CheckOptionsData`, a sparse camelCase record
// whose present keys override a base option set.

use regex::Regex;
use serde::Deserialize;

use wortwerk_core::character::DEFAULT_CURSOR_MARKER;

use crate::error::OptionsError;

/// Words matching one of these are never looked up.
const DEFAULT_PATTERNS_TO_IGNORE: &[&str] = &[r"^-{3,}$", r"^\.{5,}$", r"^_{3,}$"];

/// Words matching one of these are always reported unknown.
const DEFAULT_PATTERNS_TO_MARK: &[&str] = &[r"-{2}"];

/// Options for a check run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Replace breakable markers of known words with soft hyphens.
    pub hyphenation: bool,

    /// Apply replacements at all. When false, output equals input.
    pub highlighting: bool,

    pub highlight_unknown_words: bool,
    pub highlight_known_words: bool,
    pub highlight_mismatches: bool,
    pub highlight_case_warnings: bool,

    /// Flag punctuation that does not touch the preceding word.
    pub highlight_non_standalone: bool,

    pub highlight_missing_whitespace: bool,

    /// Look for a missing space before the first word of a node.
    pub check_whitespace_at_begin: bool,

    /// Look for a missing space after the last word of a node.
    pub check_whitespace_at_end: bool,

    /// Placeholder the host inserts for the caret.
    pub cursor_marker: String,

    /// Clear findings after `apply_findings`.
    pub auto_reset_after_apply: bool,

    pub patterns_to_ignore: Vec<Regex>,
    pub patterns_to_mark: Vec<Regex>,

    /// Take symbols and composite rules only from dictionaries of this
    /// locale. `None` means all.
    pub language: Option<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            hyphenation: true,
            highlighting: true,
            highlight_unknown_words: true,
            highlight_known_words: false,
            highlight_mismatches: true,
            highlight_case_warnings: true,
            highlight_non_standalone: true,
            highlight_missing_whitespace: true,
            check_whitespace_at_begin: true,
            check_whitespace_at_end: true,
            cursor_marker: DEFAULT_CURSOR_MARKER.to_string(),
            auto_reset_after_apply: true,
            patterns_to_ignore: builtin_patterns(DEFAULT_PATTERNS_TO_IGNORE),
            patterns_to_mark: builtin_patterns(DEFAULT_PATTERNS_TO_MARK),
            language: None,
        }
    }
}

fn builtin_patterns(patterns: &[&str]) -> Vec<Regex> {
    // Fixed literals, all known to compile.
    patterns.iter().filter_map(|p| Regex::new(p).ok()).collect()
}

/// Compile a list of pattern strings.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>, OptionsError> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p.as_ref()).map_err(|source| OptionsError::InvalidPattern {
                pattern: p.as_ref().to_string(),
                source,
            })
        })
        .collect()
}

impl CheckOptions {
    /// Options with `patterns_to_ignore` replaced.
    pub fn with_patterns_to_ignore<S: AsRef<str>>(
        mut self,
        patterns: &[S],
    ) -> Result<Self, OptionsError> {
        self.patterns_to_ignore = compile_patterns(patterns)?;
        Ok(self)
    }

    /// Options with `patterns_to_mark` replaced.
    pub fn with_patterns_to_mark<S: AsRef<str>>(
        mut self,
        patterns: &[S],
    ) -> Result<Self, OptionsError> {
        self.patterns_to_mark = compile_patterns(patterns)?;
        Ok(self)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Whether `word` should skip lookup entirely.
    pub fn is_ignored(&self, word: &str) -> bool {
        self.patterns_to_ignore.iter().any(|p| p.is_match(word))
    }

    /// Whether `word` is forced to be reported unknown.
    pub fn is_marked(&self, word: &str) -> bool {
        self.patterns_to_mark.iter().any(|p| p.is_match(word))
    }

    /// A copy of these options with every key present in `data` overridden.
    pub fn merged(&self, data: &CheckOptionsData) -> Result<Self, OptionsError> {
        let mut out = self.clone();
        macro_rules! take {
            ($($field:ident),*) => {
                $(if let Some(v) = data.$field { out.$field = v; })*
            };
        }
        take!(
            hyphenation,
            highlighting,
            highlight_unknown_words,
            highlight_known_words,
            highlight_mismatches,
            highlight_case_warnings,
            highlight_non_standalone,
            highlight_missing_whitespace,
            check_whitespace_at_begin,
            check_whitespace_at_end,
            auto_reset_after_apply
        );
        if let Some(marker) = &data.cursor_marker {
            out.cursor_marker = marker.clone();
        }
        if let Some(patterns) = &data.patterns_to_ignore {
            out.patterns_to_ignore = compile_patterns(patterns)?;
        }
        if let Some(patterns) = &data.patterns_to_mark {
            out.patterns_to_mark = compile_patterns(patterns)?;
        }
        if let Some(language) = &data.language {
            out.language = language.clone();
        }
        Ok(out)
    }

    /// Parse a JSON override record on top of these options.
    pub fn merged_json(&self, json: &str) -> Result<Self, OptionsError> {
        let data: CheckOptionsData = serde_json::from_str(json)?;
        self.merged(&data)
    }
}

/// Sparse option overrides as hosts write them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptionsData {
    pub hyphenation: Option<bool>,
    pub highlighting: Option<bool>,
    pub highlight_unknown_words: Option<bool>,
    pub highlight_known_words: Option<bool>,
    pub highlight_mismatches: Option<bool>,
    pub highlight_case_warnings: Option<bool>,
    pub highlight_non_standalone: Option<bool>,
    pub highlight_missing_whitespace: Option<bool>,
    pub check_whitespace_at_begin: Option<bool>,
    pub check_whitespace_at_end: Option<bool>,
    #[serde(alias = "cursorCharacter")]
    pub cursor_marker: Option<String>,
    pub auto_reset_after_apply: Option<bool>,
    pub patterns_to_ignore: Option<Vec<String>>,
    pub patterns_to_mark: Option<Vec<String>>,
    /// `Some(None)` clears a language restriction.
    #[serde(deserialize_with = "nullable")]
    pub language: Option<Option<String>>,
}

fn nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = CheckOptions::default();
        assert!(o.hyphenation);
        assert!(o.highlighting);
        assert!(o.highlight_unknown_words);
        assert!(!o.highlight_known_words);
        assert_eq!(o.cursor_marker, "\u{2038}");
        assert!(o.auto_reset_after_apply);
        assert_eq!(o.patterns_to_ignore.len(), 3);
        assert_eq!(o.patterns_to_mark.len(), 1);
        assert!(o.language.is_none());
    }

    #[test]
    fn default_patterns() {
        let o = CheckOptions::default();
        assert!(o.is_ignored("-----"));
        assert!(o.is_ignored("....."));
        assert!(o.is_ignored("___"));
        assert!(!o.is_ignored("--"));
        assert!(!o.is_ignored("...."));
        assert!(o.is_marked("Haus--tür"));
        assert!(!o.is_marked("Haus-tür"));
    }

    #[test]
    fn merged_overrides_only_present_keys() {
        let base = CheckOptions::default();
        let o = base
            .merged_json(r#"{"hyphenation":false,"highlightKnownWords":true,"language":"de"}"#)
            .unwrap();
        assert!(!o.hyphenation);
        assert!(o.highlight_known_words);
        assert!(o.highlighting);
        assert_eq!(o.language.as_deref(), Some("de"));

        let cleared = o.merged_json(r#"{"language":null}"#).unwrap();
        assert!(cleared.language.is_none());
        let kept = o.merged_json("{}").unwrap();
        assert_eq!(kept.language.as_deref(), Some("de"));
    }

    #[test]
    fn merged_accepts_cursor_character_alias() {
        let o = CheckOptions::default()
            .merged_json(r##"{"cursorCharacter":"#"}"##)
            .unwrap();
        assert_eq!(o.cursor_marker, "#");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = CheckOptions::default()
            .with_patterns_to_mark(&["(unclosed"])
            .unwrap_err();
        assert!(matches!(err, OptionsError::InvalidPattern { .. }));
        assert!(
            CheckOptions::default()
                .merged_json(r#"{"patternsToIgnore":["["]}"#)
                .is_err()
        );
    }
}
