// Highlight categories produced by the renderer

/// Error highlights that may apply to a single token at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorClasses {
    pub unknown: bool,
    pub standalone: bool,
    pub missing_whitespace_begin: bool,
    pub missing_whitespace_end: bool,
}

impl ErrorClasses {
    pub fn any(&self) -> bool {
        self.unknown || self.standalone || self.missing_whitespace_begin || self.missing_whitespace_end
    }

    /// CSS class suffix, each class preceded by a space.
    pub fn css_suffix(&self) -> String {
        let mut s = String::new();
        for (set, name) in [
            (self.unknown, "unknown"),
            (self.standalone, "standalone"),
            (self.missing_whitespace_begin, "missing-whitespace-begin"),
            (self.missing_whitespace_end, "missing-whitespace-end"),
        ] {
            if set {
                s.push(' ');
                s.push_str(name);
            }
        }
        s
    }
}

/// Final verdict for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Emit the raw token unchanged.
    Passthrough,
    /// At least one error highlight applies.
    Error(ErrorClasses),
    /// The token matches a dictionary reading exactly.
    Known {
        /// Token text to emit, hyphenated when enabled.
        content: String,
        highlight: bool,
    },
    /// The token matches only when case is ignored.
    CaseWarning {
        /// Correctly cased form, without break markers.
        expected: String,
    },
    /// Readings exist but none matches the token.
    Mismatch,
}
