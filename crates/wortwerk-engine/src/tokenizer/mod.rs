// Tokenizer: whitespace-delimited runs with offsets and cursor placement

use wortwerk_core::character::is_separator;
use wortwerk_core::{CursorPlacement, NodeId, Token};

// ============================================================================
// Cursor markers
// ============================================================================

/// Character positions of every `cursor_marker` occurrence in `word`.
pub fn cursor_positions(word: &str, cursor_marker: &str) -> Vec<usize> {
    if cursor_marker.is_empty() {
        return Vec::new();
    }
    word.match_indices(cursor_marker)
        .map(|(byte, _)| word[..byte].chars().count())
        .collect()
}

/// Cursor placement of `word`.
pub fn cursor_placement(word: &str, cursor_marker: &str) -> (Vec<usize>, CursorPlacement) {
    let positions = cursor_positions(word, cursor_marker);
    let placement = CursorPlacement::from_positions(
        &positions,
        word.chars().count(),
        cursor_marker.chars().count(),
    );
    (positions, placement)
}

// ============================================================================
// Tokenization
// ============================================================================

/// Split `text` into runs of non-separator characters.
///
/// Cursor markers, soft hyphens and zero-width spaces stay part of the
/// token; offsets refer to `text` as given.
pub fn tokenize(text: &str, node: NodeId, cursor_marker: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut char_index = 0;

    for (byte, c) in text.char_indices() {
        if is_separator(c) {
            if let Some((b, ci)) = start.take() {
                tokens.push(make_token(&text[b..byte], node, ci, b, cursor_marker));
            }
        } else if start.is_none() {
            start = Some((byte, char_index));
        }
        char_index += 1;
    }
    if let Some((b, ci)) = start {
        tokens.push(make_token(&text[b..], node, ci, b, cursor_marker));
    }
    tokens
}

fn make_token(
    raw: &str,
    node: NodeId,
    offset: usize,
    byte_offset: usize,
    cursor_marker: &str,
) -> Token {
    let (cursor_positions, cursor) = cursor_placement(raw, cursor_marker);
    Token {
        raw: raw.to_string(),
        node,
        offset,
        byte_offset,
        cursor_positions,
        cursor,
    }
}

/// Whether `text` holds nothing but separators once cursor markers are gone.
///
/// The empty string does not count.
pub fn is_blank(text: &str, cursor_marker: &str) -> bool {
    let stripped = if cursor_marker.is_empty() {
        text.to_string()
    } else {
        text.replace(cursor_marker, "")
    };
    !stripped.is_empty() && stripped.chars().all(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURSOR: &str = "\u{2038}";

    fn raws(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.raw.as_str()).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        let tokens = tokenize("  die Mit-\tund\n Zusammenarbeit ", NodeId(3), CURSOR);
        assert_eq!(raws(&tokens), vec!["die", "Mit-", "und", "Zusammenarbeit"]);
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 6);
        assert!(tokens.iter().all(|t| t.node == NodeId(3)));
    }

    #[test]
    fn offsets_count_chars_and_bytes() {
        let tokens = tokenize("Tür Haus", NodeId::default(), CURSOR);
        assert_eq!(tokens[1].offset, 4);
        assert_eq!(tokens[1].byte_offset, 5);
    }

    #[test]
    fn keeps_invisible_characters() {
        let tokens = tokenize("Lö\u{00AD}sungs\u{200B}vor", NodeId::default(), CURSOR);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw, "Lö\u{00AD}sungs\u{200B}vor");
    }

    #[test]
    fn zero_width_space_is_not_a_separator() {
        // U+200B is not White_Space
        assert_eq!(tokenize("a\u{200B}b", NodeId::default(), CURSOR).len(), 1);
    }

    #[test]
    fn cursor_marker_positions() {
        let tokens = tokenize("\u{2038}Haus Tü\u{2038}r Tür\u{2038}", NodeId::default(), CURSOR);
        assert!(tokens[0].cursor.at_beginning);
        assert_eq!(tokens[0].cursor_positions, vec![0]);
        assert!(tokens[1].cursor.in_middle);
        assert_eq!(tokens[1].cursor_positions, vec![2]);
        assert!(tokens[2].cursor.at_ending);
        assert!(tokens[2].has_cursor_marker());
    }

    #[test]
    fn lone_cursor_is_leading() {
        let (_, placement) = cursor_placement("\u{2038}", CURSOR);
        assert!(placement.at_beginning);
        assert!(!placement.at_ending);
    }

    #[test]
    fn blank_text() {
        assert!(is_blank(" \u{2038} ", CURSOR));
        assert!(is_blank("\n", CURSOR));
        assert!(!is_blank("", CURSOR));
        assert!(!is_blank("\u{2038}", CURSOR));
        assert!(!is_blank(" a ", CURSOR));
    }
}
