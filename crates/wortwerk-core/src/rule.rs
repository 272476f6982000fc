// Composite grammar rules

use serde::{Deserialize, Serialize};

use crate::case::capitalize;

/// Case change applied to a morpheme adjacent to a compound joint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// Uppercase the first character.
    Upper,
    /// Lowercase the whole morpheme.
    Lower,
}

impl CaseTransform {
    pub fn apply(self, surface: &str) -> String {
        match self {
            CaseTransform::Upper => capitalize(surface),
            CaseTransform::Lower => surface.to_lowercase(),
        }
    }
}

/// How two adjacent word types may combine into a compound.
///
/// In dictionary data a rule is written with the flags `join`, `type`,
/// `lupper`/`llower`, `tupper`/`tlower` and `endOfSentence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CompositeRuleData", into = "CompositeRuleData")]
pub struct CompositeRule {
    /// Whether the joint is a valid hyphenation point. Joined morphemes
    /// merge into one morpheme of `result_type`.
    pub join: bool,
    pub result_type: String,
    pub leading_case: Option<CaseTransform>,
    pub trailing_case: Option<CaseTransform>,
    pub end_of_sentence: bool,
}

impl CompositeRule {
    /// A rule marking a breakable joint.
    pub fn joining(result_type: impl Into<String>) -> Self {
        Self {
            join: true,
            result_type: result_type.into(),
            leading_case: None,
            trailing_case: None,
            end_of_sentence: false,
        }
    }

    /// A rule that concatenates both sides without a breakable joint.
    pub fn adjoining(result_type: impl Into<String>) -> Self {
        Self {
            join: false,
            ..Self::joining(result_type)
        }
    }

    pub fn with_leading_case(mut self, case: CaseTransform) -> Self {
        self.leading_case = Some(case);
        self
    }

    pub fn with_trailing_case(mut self, case: CaseTransform) -> Self {
        self.trailing_case = Some(case);
        self
    }

    pub fn ending_sentence(mut self) -> Self {
        self.end_of_sentence = true;
        self
    }

    /// Leading morpheme surface after this rule's case transform.
    pub fn shape_leading(&self, surface: &str) -> String {
        self.leading_case
            .map_or_else(|| surface.to_string(), |c| c.apply(surface))
    }

    /// Trailing morpheme surface after this rule's case transform.
    pub fn shape_trailing(&self, surface: &str) -> String {
        self.trailing_case
            .map_or_else(|| surface.to_string(), |c| c.apply(surface))
    }
}

// ---------------------------------------------------------------------------
// Wire form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CompositeRuleData {
    join: bool,
    #[serde(rename = "type")]
    result_type: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    lupper: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    llower: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    tupper: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    tlower: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    end_of_sentence: bool,
}

fn case_from_flags(upper: bool, lower: bool) -> Option<CaseTransform> {
    if upper {
        Some(CaseTransform::Upper)
    } else if lower {
        Some(CaseTransform::Lower)
    } else {
        None
    }
}

impl From<CompositeRuleData> for CompositeRule {
    fn from(data: CompositeRuleData) -> Self {
        Self {
            join: data.join,
            result_type: data.result_type,
            leading_case: case_from_flags(data.lupper, data.llower),
            trailing_case: case_from_flags(data.tupper, data.tlower),
            end_of_sentence: data.end_of_sentence,
        }
    }
}

impl From<CompositeRule> for CompositeRuleData {
    fn from(rule: CompositeRule) -> Self {
        Self {
            join: rule.join,
            result_type: rule.result_type,
            lupper: rule.leading_case == Some(CaseTransform::Upper),
            llower: rule.leading_case == Some(CaseTransform::Lower),
            tupper: rule.trailing_case == Some(CaseTransform::Upper),
            tlower: rule.trailing_case == Some(CaseTransform::Lower),
            end_of_sentence: rule.end_of_sentence,
        }
    }
}
