// Renderer: classify findings and turn them into markup
//
// Classification is a pure function of one finding and the options it was
// checked with. Markup is applied per node, back to front, so byte offsets
// of earlier tokens stay valid while later ones are replaced.

use wortwerk_core::case::upper_case_first_letter;
use wortwerk_core::character::{SOFT_HYPHEN, replace_break_markers, strip_break_markers};
use wortwerk_core::entry::word_types;
use wortwerk_core::{Classification, ErrorClasses, NodeId};

use crate::analysis::Finding;
use crate::options::CheckOptions;

// ============================================================================
// Classification
// ============================================================================

/// Decide how `finding` is shown under `options`.
///
/// Priority: lone cursor marker, ignored word, error highlights, exact
/// match, case-insensitive match, mismatch.
pub fn classify(finding: &Finding, options: &CheckOptions) -> Classification {
    if finding.clean_word().is_empty() {
        return Classification::Passthrough;
    }
    let variants = finding.variants();
    if variants.iter().any(|v| v.word_type == word_types::IGNORED) {
        return Classification::Passthrough;
    }

    let sole_punctuation = variants.len() == 1 && variants[0].is_punctuation();
    let errors = ErrorClasses {
        unknown: options.highlight_unknown_words && variants.is_empty(),
        standalone: options.highlight_non_standalone
            && sole_punctuation
            && !finding.is_touching_previous(),
        missing_whitespace_begin: options.highlight_missing_whitespace
            && finding.has_missing_whitespace_at_begin(),
        missing_whitespace_end: options.highlight_missing_whitespace
            && finding.has_missing_whitespace_at_end(),
    };
    if errors.any() {
        return Classification::Error(errors);
    }
    if variants.is_empty() {
        return Classification::Passthrough;
    }

    let as_expected = |surface: &str| {
        if finding.assume_start_of_sentence() {
            upper_case_first_letter(surface)
        } else {
            surface.to_string()
        }
    };

    for variant in variants {
        let expected = as_expected(&variant.surface);
        if strip_break_markers(&expected) != finding.clean_word() {
            continue;
        }
        let cursor = finding.cursor();
        let content = if options.hyphenation && !cursor.in_middle {
            let marker = options.cursor_marker.as_str();
            format!(
                "{}{}{}",
                if cursor.at_beginning { marker } else { "" },
                replace_break_markers(&expected, &SOFT_HYPHEN.to_string()),
                if cursor.at_ending { marker } else { "" },
            )
        } else {
            finding.raw().to_string()
        };
        return Classification::Known {
            content,
            highlight: options.highlight_known_words,
        };
    }

    let lowered = finding.clean_word().to_lowercase();
    if let Some(variant) = variants
        .iter()
        .find(|v| v.plain_surface().to_lowercase() == lowered)
    {
        if options.highlight_case_warnings && !finding.case_insensitive() {
            return Classification::CaseWarning {
                expected: strip_break_markers(&as_expected(&variant.surface)),
            };
        }
        return Classification::Passthrough;
    }

    if options.highlight_mismatches {
        Classification::Mismatch
    } else {
        Classification::Passthrough
    }
}

/// Markup for `finding` under `options`.
pub fn render(finding: &Finding, options: &CheckOptions) -> String {
    let raw = escape_html(finding.raw());
    match classify(finding, options) {
        Classification::Passthrough => raw,
        Classification::Error(classes) => format!(
            "<span class=\"spellcheck highlight error{}\">{raw}</span>",
            classes.css_suffix()
        ),
        Classification::Known { content, highlight } => {
            let content = escape_html(&content);
            if highlight {
                format!("<span class=\"spellcheck highlight ok\">{content}</span>")
            } else {
                content
            }
        }
        Classification::CaseWarning { expected } => format!(
            "<span class=\"spellcheck highlight warn case\" data-spellcheck-correction=\"{}\">{raw}</span>",
            escape_attribute(&expected)
        ),
        Classification::Mismatch => {
            format!("<span class=\"spellcheck highlight warn mismatch\">{raw}</span>")
        }
    }
}

// ----------------------------------------------------------------------------
// Escaping
// ----------------------------------------------------------------------------

/// Escape text content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> String {
    escape_html(text).replace('"', "&quot;")
}

// ============================================================================
// Replacements
// ============================================================================

/// Markup to splice over one token of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub node: NodeId,
    pub byte_offset: usize,
    pub byte_len: usize,
    pub fragment: String,
}

impl Replacement {
    /// The replacement for `finding`, rendered with its own options.
    pub fn for_finding(finding: &Finding) -> Self {
        Self {
            node: finding.node(),
            byte_offset: finding.byte_offset(),
            byte_len: finding.raw().len(),
            fragment: render(finding, finding.options()),
        }
    }
}

/// The rewritten text of one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOutput {
    pub node: NodeId,
    pub content: String,
}

/// Splice `replacements` into `text`, last offset first.
///
/// Replacements that do not fit `text` are skipped.
pub fn apply_replacements(text: &str, replacements: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    ordered.sort_by(|a, b| b.byte_offset.cmp(&a.byte_offset));

    let mut out = text.to_string();
    for r in ordered {
        let end = r.byte_offset + r.byte_len;
        if end > out.len() || !out.is_char_boundary(r.byte_offset) || !out.is_char_boundary(end) {
            continue;
        }
        out.replace_range(r.byte_offset..end, &r.fragment);
    }
    out
}
