// Symbol tables for punctuation and structural glyphs

use std::sync::LazyLock;

use hashbrown::HashMap;

use wortwerk_core::Entry;
use wortwerk_core::entry::word_types;

/// Glyph to entries.
pub type SymbolTable = HashMap<String, Vec<Entry>>;

static BUILTIN: LazyLock<SymbolTable> = LazyLock::new(builtin_table);

/// The symbol table every dictionary falls back to.
pub fn builtin() -> &'static SymbolTable {
    &BUILTIN
}

fn builtin_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    let mut add = |glyph: &str, entry: Entry| {
        table.entry(glyph.to_string()).or_default().push(entry);
    };

    for glyph in [".", "?", "!"] {
        add(glyph, Entry::new(glyph, word_types::PUNCTUATION).ending_sentence());
    }
    for glyph in [",", ";", ":"] {
        add(glyph, Entry::new(glyph, word_types::INTERPUNCTUATION));
    }
    add("-", Entry::new("-", word_types::HYPHEN));
    for glyph in ["(", "{", "[", "<"] {
        add(glyph, Entry::new(glyph, "lbracket"));
    }
    for glyph in [")", "}", "]", ">"] {
        add(glyph, Entry::new(glyph, "rbracket"));
    }
    for glyph in ["/", "\\"] {
        add(glyph, Entry::new(glyph, word_types::STRUCTURE));
    }
    for glyph in ["\"", "'"] {
        add(glyph, Entry::new(glyph, "lquotation"));
        add(glyph, Entry::new(glyph, "rquotation"));
    }
    add("%", Entry::new("%", "unit").with_attribute("unit", "Percent"));
    for glyph in ["&", "$", "+"] {
        add(glyph, Entry::new(glyph, "symbol"));
    }
    add("#", Entry::new("#", "symbol").with_attribute("symbol", "hash"));
    add("*", Entry::new("*", "symbol").with_attribute("symbol", "born"));
    add("\u{00A7}", Entry::new("\u{00A7}", "mark").with_attribute("symbol", "Paragraph Sign"));
    for (glyph, name) in [
        ("\u{00A9}", "Copyright"),
        ("\u{2013}", "EN Dash"),
        ("\u{2014}", "EM Dash"),
        ("\u{20AC}", "Euro Sign"),
        ("\u{271D}", "Latin Cross"),
    ] {
        add(glyph, Entry::new(glyph, "symbol").with_attribute("symbol", name));
    }
    table
}

/// Merge `from` into `into`, skipping entries already present by type and surface.
pub fn merge_symbols(into: &mut SymbolTable, from: &SymbolTable) {
    for (glyph, entries) in from {
        let slot = into.entry(glyph.clone()).or_default();
        for entry in entries {
            let duplicate = slot
                .iter()
                .any(|e| e.word_type == entry.word_type && e.surface == entry.surface);
            if !duplicate {
                slot.push(entry.clone());
            }
        }
    }
}
