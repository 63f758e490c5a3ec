//! Language filtering of resolved record text.
use log::debug;
use oxilangtag::LanguageTag;

use crate::identifiers::Predict;

use super::normalize::normalize;
use super::Filter;

/// Keeps text that is identified as being in the target language.
///
/// Text is [normalize]d first. Empty normalized text, failed or unconfident identifications
/// are all treated as a mismatch.
pub struct Language<'a, P: Predict> {
    identifier: &'a P,
    target: LanguageTag<String>,
}

impl<'a, P: Predict> Language<'a, P> {
    pub fn new(identifier: &'a P, target: LanguageTag<String>) -> Self {
        Self { identifier, target }
    }

    /// Get a reference to the target language.
    pub fn target(&self) -> &LanguageTag<String> {
        &self.target
    }
}

impl<'a, P: Predict> Filter<&str> for Language<'a, P> {
    fn detect(&self, text: &str) -> bool {
        let normalized = normalize(text);
        if normalized.is_empty() {
            debug!("empty text after normalization");
            return false;
        }

        match self.identifier.predict_one(&normalized) {
            Ok(Some(id)) => id.is_lang(&self.target),
            Ok(None) => {
                debug!("no confident identification for {normalized:?}");
                false
            }
            Err(e) => {
                debug!("identification failed for {normalized:?}: {e:?}");
                false
            }
        }
    }
}
