//! Weight Table
//!
//! Ordered feature → weight mapping for the heuristic model. Immutable once
//! built; a new model version means a new table swapped in whole.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{feature_index, FEATURE_LAYOUT};
use super::error::WeightError;

/// Version tag of the built-in weights
pub const DEFAULT_MODEL_VERSION: &str = "1.0-simulated";

/// Built-in weights. Negative = lowers risk.
pub const DEFAULT_WEIGHTS: [(&str, f64); 10] = [
    ("domain_age_days", -0.05),
    ("has_https", -0.15),
    ("ssl_valid", -0.10),
    ("blacklist_count", 0.30),
    ("hosting_reputation_score", -0.02),
    ("content_scam_score", 0.40),
    ("dns_resolved", -0.10),
    ("domain_length", 0.01),
    ("has_whois_privacy", 0.05),
    ("content_risk_keywords", 0.05),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    pub model_version: String,
    /// (feature name, weight) in evaluation order
    pub weights: Vec<(String, f64)>,
}

impl WeightTable {
    pub fn new(model_version: impl Into<String>, weights: Vec<(String, f64)>) -> Self {
        Self {
            model_version: model_version.into(),
            weights,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(n, w)| (n.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// One finite weight per layout feature, nothing else
    pub fn validate(&self) -> Result<(), WeightError> {
        let mut seen = HashSet::new();

        for (name, weight) in self.iter() {
            if feature_index(name).is_none() {
                return Err(WeightError::UnknownFeature(name.to_string()));
            }
            if !seen.insert(name) {
                return Err(WeightError::DuplicateFeature(name.to_string()));
            }
            if !weight.is_finite() {
                return Err(WeightError::NonFinite {
                    name: name.to_string(),
                    value: weight,
                });
            }
        }

        if let Some(missing) = FEATURE_LAYOUT.iter().find(|n| !seen.contains(**n)) {
            return Err(WeightError::MissingFeature(missing.to_string()));
        }

        Ok(())
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_MODEL_VERSION,
            DEFAULT_WEIGHTS
                .iter()
                .map(|(n, w)| (n.to_string(), *w))
                .collect(),
        )
    }
}
