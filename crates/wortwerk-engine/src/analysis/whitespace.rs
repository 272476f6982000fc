// Missing whitespace between adjacent text nodes
//
// Editors split formatted text into several nodes ("<b>Haus</b>tür").
// When a word ends exactly at the end of its node and the next word starts
// exactly at the beginning of the next node, the two may be one word or
// two words lacking a separator. The joined form decides.

use log::trace;

use crate::analysis::finding::Finding;
use crate::composition::LookupScope;
use crate::dictionary::Dictionary;

/// Flag neighbouring findings in different nodes whose joined text is unknown.
pub(crate) fn detect_missing_whitespace(
    findings: &mut [Finding],
    scopes: &mut [LookupScope],
    dictionaries: &[Dictionary],
) {
    for i in 1..findings.len() {
        let (before, after) = findings.split_at_mut(i);
        let current = &mut before[i - 1];
        let next = &mut after[0];

        if !(current.check_whitespace_at_end && next.check_whitespace_at_begin) {
            continue;
        }
        if current.node() == next.node() {
            continue;
        }
        if !(current.touches_node_end() && next.offset() == 0) {
            continue;
        }

        let joined = format!("{}{}", current.clean_word, next.clean_word);
        let known = !scopes[current.scope]
            .lexicon(dictionaries)
            .compose_across_dictionaries(&joined)
            .is_empty();
        trace!("joined across nodes: {joined} known={known}");
        if !known {
            current.missing_whitespace_at_end = true;
            next.missing_whitespace_at_begin = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::inspect;
    use crate::options::CheckOptions;
    use crate::tokenizer::tokenize;
    use wortwerk_core::{CaseTransform, CompositeRule, Entry, NodeId};

    fn dictionaries() -> Vec<Dictionary> {
        vec![
            Dictionary::builder("de")
                .words([
                    Entry::new("Haus", "noun"),
                    Entry::new("Tür", "noun"),
                    Entry::new("die", "article"),
                ])
                .rule(
                    "noun",
                    "noun",
                    CompositeRule::joining("noun").with_trailing_case(CaseTransform::Lower),
                )
                .build()
                .unwrap(),
        ]
    }

    fn findings(nodes: &[&str], options: CheckOptions) -> Vec<Finding> {
        let dicts = dictionaries();
        let mut scopes = vec![LookupScope::new(&dicts, None)];
        let options = Arc::new(options);
        let mut out = Vec::new();
        for (n, text) in nodes.iter().enumerate() {
            let len = text.chars().count();
            for token in tokenize(text, NodeId(n as u32), &options.cursor_marker) {
                out.push(inspect(token, len, &options, 0, &mut scopes[0], &dicts));
            }
        }
        detect_missing_whitespace(&mut out, &mut scopes, &dicts);
        out
    }

    #[test]
    fn unknown_join_is_flagged() {
        let f = findings(&["Haus", "die"], CheckOptions::default());
        assert!(f[0].has_missing_whitespace_at_end());
        assert!(f[1].has_missing_whitespace_at_begin());
        assert!(!f[0].has_missing_whitespace_at_begin());
    }

    #[test]
    fn known_join_is_accepted() {
        let f = findings(&["Haus", "tür"], CheckOptions::default());
        assert!(!f[0].has_missing_whitespace_at_end());
        assert!(!f[1].has_missing_whitespace_at_begin());
    }

    #[test]
    fn separated_nodes_are_fine() {
        let f = findings(&["Haus ", "die"], CheckOptions::default());
        assert!(!f[0].has_missing_whitespace_at_end());
        let f = findings(&["Haus", " die"], CheckOptions::default());
        assert!(!f[1].has_missing_whitespace_at_begin());
    }

    #[test]
    fn same_node_is_never_checked() {
        let f = findings(&["Haus die"], CheckOptions::default());
        assert!(f.iter().all(|f| !f.has_missing_whitespace_at_end()));
    }

    #[test]
    fn disabled_by_options() {
        let options = CheckOptions {
            check_whitespace_at_end: false,
            ..CheckOptions::default()
        };
        let f = findings(&["Haus", "die"], options);
        assert!(!f[0].has_missing_whitespace_at_end());
        assert!(!f[1].has_missing_whitespace_at_begin());
    }
}
