// Marker characters and text normalization helpers

// ---------------------------------------------------------------------------
// Marker characters
// ---------------------------------------------------------------------------

/// Internal breakable marker between two morphemes of a resolved word.
pub const BREAK_MARKER: char = '|';

/// Soft hyphen, the rendered form of a breakable marker.
pub const SOFT_HYPHEN: char = '\u{00AD}';

/// Zero-width space. Dropped from words before lookup.
pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Non-breaking hyphen. Looked up as a plain hyphen.
pub const NON_BREAKING_HYPHEN: char = '\u{2011}';

/// Default caret placeholder inserted by editors.
pub const DEFAULT_CURSOR_MARKER: &str = "\u{2038}";

/// Characters that end a sentence when a word cannot be resolved.
const SENTENCE_TERMINALS: &[char] = &['.', '!', '?'];

// ---------------------------------------------------------------------------
// Classification helpers
// ---------------------------------------------------------------------------

/// Token separator test.
///
/// Everything `char::is_whitespace` accepts, plus the byte order mark which
/// some editors leave inside text nodes.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Whether `c` ends a sentence on its own.
pub fn is_sentence_terminal(c: char) -> bool {
    SENTENCE_TERMINALS.contains(&c)
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Remove all breakable markers from a resolved surface.
pub fn strip_break_markers(surface: &str) -> String {
    surface.chars().filter(|&c| c != BREAK_MARKER).collect()
}

/// Replace breakable markers with `separator`.
pub fn replace_break_markers(surface: &str, separator: &str) -> String {
    surface.replace(BREAK_MARKER, separator)
}

/// Character positions of every breakable marker in `surface`.
pub fn break_positions(surface: &str) -> Vec<usize> {
    surface
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == BREAK_MARKER)
        .map(|(i, _)| i)
        .collect()
}

/// Normalize a raw token into the form used for dictionary lookups.
///
/// Cursor markers, soft hyphens and zero-width spaces are removed and
/// non-breaking hyphens become plain hyphens.
pub fn clean_word(raw: &str, cursor_marker: &str) -> String {
    let without_cursor = if cursor_marker.is_empty() {
        raw.to_string()
    } else {
        raw.replace(cursor_marker, "")
    };
    without_cursor
        .chars()
        .filter(|&c| c != SOFT_HYPHEN && c != ZERO_WIDTH_SPACE)
        .map(|c| if c == NON_BREAKING_HYPHEN { '-' } else { c })
        .collect()
}

/// Character-index substring. Out of range bounds are clamped.
pub fn char_slice(s: &str, start: usize, end: usize) -> String {
    let end = end.min(s.chars().count());
    if start >= end {
        return String::new();
    }
    s.chars().skip(start).take(end - start).collect()
}
