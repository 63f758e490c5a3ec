//! Graph construction parameters.
use oxilangtag::LanguageTag;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Weight given to an edge on creation, and added on each further co-occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeWeights {
    pub default_weight: f64,
    pub weight_increment: f64,
}

impl Default for EdgeWeights {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            weight_increment: 1.0,
        }
    }
}

impl EdgeWeights {
    pub fn new(default_weight: f64, weight_increment: f64) -> Result<Self, Error> {
        for (name, value) in [
            ("default weight", default_weight),
            ("weight increment", weight_increment),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Custom(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(Self {
            default_weight,
            weight_increment,
        })
    }
}

/// Configuration consumed by the graph construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// records whose text is not identified as this language are skipped.
    pub language: LanguageTag<String>,
    #[serde(flatten)]
    pub weights: EdgeWeights,
}

impl GraphConfig {
    /// Config with default weights.
    pub fn new(language: LanguageTag<String>) -> Self {
        Self {
            language,
            weights: EdgeWeights::default(),
        }
    }

    /// Parses and normalizes the language code (`EN` -> `en`).
    pub fn from_code(language: &str) -> Result<Self, Error> {
        Ok(Self::new(LanguageTag::parse_and_normalize(language)?))
    }

    pub fn with_weights(mut self, weights: EdgeWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GraphConfig::from_code("IT").unwrap();
        assert_eq!(c.language.as_str(), "it");
        assert_eq!(c.weights.default_weight, 1.0);
        assert_eq!(c.weights.weight_increment, 1.0);
    }

    #[test]
    fn invalid_weights() {
        assert!(EdgeWeights::new(-1.0, 1.0).is_err());
        assert!(EdgeWeights::new(1.0, f64::NAN).is_err());
        assert!(EdgeWeights::new(0.0, 2.5).is_ok());
    }

    #[test]
    fn invalid_language() {
        assert!(GraphConfig::from_code("not a language").is_err());
    }

    #[test]
    fn serialized_flat() {
        let c = GraphConfig::from_code("en").unwrap();
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["language"], "en");
        assert_eq!(v["weight_increment"], 1.0);
    }
}
