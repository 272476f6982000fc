// Composite grammar: which word types may be compounded, and how

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use wortwerk_core::CompositeRule;

/// Leading type to trailing type to rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeGrammar {
    rules: HashMap<String, HashMap<String, CompositeRule>>,
}

impl CompositeGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for `left` followed by `right`.
    pub fn insert(&mut self, left: &str, right: &str, rule: CompositeRule) {
        self.rules
            .entry(left.to_string())
            .or_default()
            .insert(right.to_string(), rule);
    }

    pub fn with_rule(mut self, left: &str, right: &str, rule: CompositeRule) -> Self {
        self.insert(left, right, rule);
        self
    }

    pub fn rule(&self, left: &str, right: &str) -> Option<&CompositeRule> {
        self.rules.get(left)?.get(right)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(HashMap::is_empty)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }
}
