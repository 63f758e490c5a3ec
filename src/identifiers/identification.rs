/*! Language identification result

Labels are stored as normalized BCP47 tags, whatever the model label format is.
!*/
use fasttext::Prediction;
use oxilangtag::{LanguageTag, LanguageTagParseError};
use serde::{Deserialize, Serialize};

const LABEL_PREFIX: &str = "__label__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identification {
    label: LanguageTag<String>,
    prob: f32,
}

impl Identification {
    pub fn new(label: LanguageTag<String>, prob: f32) -> Self {
        Self { label, prob }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &LanguageTag<String> {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }

    /// Checks the identified language against a target.
    ///
    /// A bare target (`en`) matches on the primary language subtag only,
    /// so that `en` accepts `en-Latn`. A target with more subtags must match exactly.
    pub fn is_lang(&self, target: &LanguageTag<String>) -> bool {
        if target.as_str() == target.primary_language() {
            self.label
                .primary_language()
                .eq_ignore_ascii_case(target.primary_language())
        } else {
            self.label == *target
        }
    }
}

/// converts a fasttext label (`__label__en`, `__label__ace_Arab`) into a BCP47 tag.
pub fn label_to_tag(label: &str) -> Result<LanguageTag<String>, LanguageTagParseError> {
    let label = label.strip_prefix(LABEL_PREFIX).unwrap_or(label);
    LanguageTag::parse_and_normalize(&label.replace('_', "-"))
}

impl TryFrom<Prediction> for Identification {
    type Error = LanguageTagParseError;
    fn try_from(prediction: Prediction) -> Result<Self, Self::Error> {
        Ok(Self::new(label_to_tag(&prediction.label)?, prediction.prob))
    }
}
