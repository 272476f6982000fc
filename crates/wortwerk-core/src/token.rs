// Tokens handed from the tokenizer to the analysis pass

use serde::{Deserialize, Serialize};

/// Opaque identity of the host text unit a token came from.
///
/// Whole-text checks use `NodeId::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Where cursor markers sit inside a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorPlacement {
    pub at_beginning: bool,
    pub at_ending: bool,
    pub in_middle: bool,
}

impl CursorPlacement {
    /// Classify marker positions within a word of `word_len` characters.
    ///
    /// The first marker counts as leading when it is at position 0, the last
    /// as trailing when it closes the word. Every other marker is interior.
    pub fn from_positions(positions: &[usize], word_len: usize, marker_len: usize) -> Self {
        let mut placement = Self::default();
        let last_possible = word_len.checked_sub(marker_len);
        for (i, &pos) in positions.iter().enumerate() {
            if i == 0 && pos == 0 {
                placement.at_beginning = true;
            } else if i + 1 == positions.len() && Some(pos) == last_possible {
                placement.at_ending = true;
            } else {
                placement.in_middle = true;
            }
        }
        placement
    }
}

/// A whitespace-delimited run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Text exactly as found, markers included.
    pub raw: String,

    pub node: NodeId,

    /// Character offset within the node text.
    pub offset: usize,

    /// Byte offset within the node text.
    pub byte_offset: usize,

    /// Character positions of cursor markers within `raw`.
    pub cursor_positions: Vec<usize>,

    pub cursor: CursorPlacement,
}

impl Token {
    pub fn has_cursor_marker(&self) -> bool {
        !self.cursor_positions.is_empty()
    }

    /// Length of `raw` in characters.
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }
}
