//! Heuristic Model - Weighted linear score + sigmoid
//!
//! Stands in for a trained classifier. The `RiskModel` trait is the seam a
//! real estimator plugs into; the rule engine and combiner only ever see a
//! `ScoreResult`.

use std::sync::Arc;
use serde::{Deserialize, Serialize};

use crate::logic::features::layout::{
    IDX_BLACKLIST_COUNT, IDX_CONTENT_SCAM_SCORE, IDX_DNS_RESOLVED, IDX_DOMAIN_AGE, IDX_HAS_HTTPS,
};
use crate::logic::features::FeatureVector;
use crate::logic::round_to;
use super::error::ModelError;
use super::weights::WeightTable;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Amplifies the linear score into a usable logistic range
pub const SIGMOID_GAIN: f64 = 5.0;

/// Value used for a weighted feature the vector does not carry
pub const NEUTRAL_FEATURE_VALUE: f64 = 0.5;

/// Model confidence ceiling
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Confidence floor once any blacklist hit is present
pub const BLACKLIST_CONFIDENCE_FLOOR: f64 = 0.9;

/// Confidence floor for a decisive content score
pub const DECISIVE_CONTENT_CONFIDENCE_FLOOR: f64 = 0.8;
pub const DECISIVE_CONTENT_HIGH: f64 = 0.7;
pub const DECISIVE_CONTENT_LOW: f64 = 0.3;

/// Number of availability checks feeding the base confidence
const AVAILABILITY_CHECKS: f64 = 4.0;

const IMPORTANCE_DECIMALS: i32 = 3;

pub const METHOD_HEURISTIC: &str = "heuristic";
pub const METHOD_FALLBACK: &str = "fallback";

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// |value × weight| for one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub name: String,
    pub value: f64,
    pub weight: f64,
    pub importance: f64,
}

/// Prediction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// probability × 100
    pub risk_score: f64,
    pub probability: f64,
    /// Data-availability confidence, 0.0 - 0.95
    pub confidence: f64,
    /// Sorted by importance, descending
    pub feature_importance: Vec<FeatureContribution>,
    pub model_version: String,
    /// "heuristic" or "fallback"
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScoreResult {
    /// Neutral result returned when prediction fails internally
    pub fn fallback(model_version: &str, error: &ModelError) -> Self {
        Self {
            risk_score: 50.0,
            probability: 0.5,
            confidence: 0.5,
            feature_importance: Vec::new(),
            model_version: model_version.to_string(),
            method: METHOD_FALLBACK.to_string(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.method == METHOD_FALLBACK
    }

    pub fn importance_of(&self, name: &str) -> Option<f64> {
        self.feature_importance
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.importance)
    }
}

// ============================================================================
// MODEL TRAIT
// ============================================================================

/// Anything that turns a feature vector into a `ScoreResult`.
/// Implementations must be total: failures become a fallback result.
pub trait RiskModel: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> ScoreResult;
    fn version(&self) -> &str;
}

/// Linear-weight model bound to one immutable weight table
#[derive(Debug, Clone)]
pub struct HeuristicModel {
    weights: Arc<WeightTable>,
}

impl HeuristicModel {
    pub fn new(weights: Arc<WeightTable>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new(Arc::new(WeightTable::default()))
    }
}

impl RiskModel for HeuristicModel {
    fn predict(&self, features: &FeatureVector) -> ScoreResult {
        predict(features, &self.weights)
    }

    fn version(&self) -> &str {
        &self.weights.model_version
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Predict, falling back to the neutral result on any internal error
pub fn predict(features: &FeatureVector, weights: &WeightTable) -> ScoreResult {
    match try_predict(features, weights) {
        Ok(result) => {
            log::debug!(
                "Heuristic prediction: risk_score={:.2}, confidence={:.2}",
                result.risk_score,
                result.confidence
            );
            result
        }
        Err(e) => {
            log::warn!("Heuristic model failed ({}), using fallback", e);
            ScoreResult::fallback(&weights.model_version, &e)
        }
    }
}

pub fn try_predict(features: &FeatureVector, weights: &WeightTable) -> Result<ScoreResult, ModelError> {
    let score = linear_score(features, weights);
    if !score.is_finite() {
        return Err(ModelError::NonFiniteScore(score));
    }

    let probability = sigmoid(score * SIGMOID_GAIN);
    if !probability.is_finite() {
        return Err(ModelError::NonFiniteProbability(score));
    }

    Ok(ScoreResult {
        risk_score: probability * 100.0,
        probability,
        confidence: model_confidence(features),
        feature_importance: feature_importance(features, weights),
        model_version: weights.model_version.clone(),
        method: METHOD_HEURISTIC.to_string(),
        error: None,
    })
}

fn feature_value(features: &FeatureVector, name: &str) -> f64 {
    features.get_by_name(name).unwrap_or(NEUTRAL_FEATURE_VALUE)
}

/// Σ value × weight in weight-table order
pub fn linear_score(features: &FeatureVector, weights: &WeightTable) -> f64 {
    weights
        .iter()
        .map(|(name, weight)| feature_value(features, name) * weight)
        .sum()
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Base confidence from four availability checks, raised by strong
/// evidence, capped below certainty.
pub fn model_confidence(features: &FeatureVector) -> f64 {
    let value = |index: usize| features.get(index).unwrap_or(0.0);

    let dns = value(IDX_DNS_RESOLVED);
    let age = value(IDX_DOMAIN_AGE);
    let https = value(IDX_HAS_HTTPS);
    let content = features
        .get(IDX_CONTENT_SCAM_SCORE)
        .unwrap_or(NEUTRAL_FEATURE_VALUE);

    let available = [
        dns == 1.0,
        age > 0.0,
        https == 0.0 || https == 1.0,
        content != NEUTRAL_FEATURE_VALUE,
    ]
    .iter()
    .filter(|present| **present)
    .count();

    let mut confidence = available as f64 / AVAILABILITY_CHECKS;

    if value(IDX_BLACKLIST_COUNT) > 0.0 {
        confidence = confidence.max(BLACKLIST_CONFIDENCE_FLOOR);
    }
    if content > DECISIVE_CONTENT_HIGH || content < DECISIVE_CONTENT_LOW {
        confidence = confidence.max(DECISIVE_CONTENT_CONFIDENCE_FLOOR);
    }

    confidence.min(MAX_CONFIDENCE)
}

/// Per-feature |value × weight| rounded to 3 decimals, sorted descending.
/// Ties keep weight-table order.
pub fn feature_importance(features: &FeatureVector, weights: &WeightTable) -> Vec<FeatureContribution> {
    let mut contributions: Vec<FeatureContribution> = weights
        .iter()
        .map(|(name, weight)| {
            let value = feature_value(features, name);
            FeatureContribution {
                name: name.to_string(),
                value,
                weight,
                importance: round_to((value * weight).abs(), IMPORTANCE_DECIMALS),
            }
        })
        .collect();

    contributions.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    contributions
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FEATURE_COUNT;

    fn vector(values: [f64; FEATURE_COUNT]) -> FeatureVector {
        FeatureVector::from_values(values)
    }

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn test_all_zero_vector_scores_one_half() {
        let result = predict(&FeatureVector::new(), &WeightTable::default());
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.risk_score, 50.0);
        assert_eq!(result.method, METHOD_HEURISTIC);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_linear_score_matches_hand_computation() {
        // age 0.5, https 1, valid 1, blacklist 0, hosting 0.8, content 0.2,
        // dns 1, length 0.2, privacy 0, keywords 0.1
        let features = vector([0.5, 1.0, 1.0, 0.0, 0.8, 0.2, 1.0, 0.2, 0.0, 0.1]);
        let expected = 0.5 * -0.05 + -0.15 + -0.10 + 0.8 * -0.02 + 0.2 * 0.40 + -0.10
            + 0.2 * 0.01 + 0.1 * 0.05;

        let score = linear_score(&features, &WeightTable::default());
        assert!((score - expected).abs() < 1e-12);

        let result = predict(&features, &WeightTable::default());
        assert!((result.probability - sigmoid(expected * 5.0)).abs() < 1e-12);
        assert!(result.risk_score < 50.0);
    }

    #[test]
    fn test_missing_feature_treated_as_neutral() {
        let table = WeightTable::new("custom", vec![("page_rank".to_string(), 1.0)]);
        assert_eq!(linear_score(&FeatureVector::new(), &table), 0.5);
    }

    #[test]
    fn test_confidence_from_availability() {
        // only has_https check passes (0 is a valid flag)
        assert_eq!(model_confidence(&vector([0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0])), 0.25);

        // dns + age + https
        assert_eq!(model_confidence(&vector([0.3, 1.0, 1.0, 0.0, 0.5, 0.5, 1.0, 0.0, 0.0, 0.0])), 0.75);

        // all four available: 1.0 capped to 0.95
        assert_eq!(model_confidence(&vector([0.3, 1.0, 1.0, 0.0, 0.5, 0.6, 1.0, 0.0, 0.0, 0.0])), 0.95);
    }

    #[test]
    fn test_confidence_floors() {
        let blacklisted = vector([0.0, 0.0, 0.0, 0.2, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(model_confidence(&blacklisted), 0.9);

        let decisive_high = vector([0.0, 0.0, 0.0, 0.0, 0.5, 0.9, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(model_confidence(&decisive_high), 0.8);

        let decisive_low = vector([0.0, 0.0, 0.0, 0.0, 0.5, 0.1, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(model_confidence(&decisive_low), 0.8);

        let borderline = vector([0.0, 0.0, 0.0, 0.0, 0.5, 0.7, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(model_confidence(&borderline), 0.5);
    }

    #[test]
    fn test_feature_importance_sorted_descending() {
        let features = vector([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let importance = feature_importance(&features, &WeightTable::default());

        let names: Vec<&str> = importance.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[0], "content_scam_score");
        assert_eq!(names[1], "blacklist_count");
        assert_eq!(names[2], "has_https");
        // ssl_valid and dns_resolved tie at 0.10; table order wins
        assert_eq!(names[3], "ssl_valid");
        assert_eq!(names[4], "dns_resolved");

        for pair in importance.windows(2) {
            assert!(pair[0].importance >= pair[1].importance);
            assert!(pair[1].importance >= 0.0);
        }
    }

    #[test]
    fn test_importance_rounded_to_three_decimals() {
        // 0.123 * 0.05 = 0.00615
        let features = vector([0.123, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let result = predict(&features, &WeightTable::default());
        assert_eq!(result.importance_of("domain_age_days"), Some(0.006));
    }

    #[test]
    fn test_non_finite_weights_fall_back() {
        let mut table = WeightTable::default();
        table.weights[0].1 = f64::INFINITY;
        table.weights[1].1 = f64::NEG_INFINITY;

        let result = predict(&FeatureVector::from_values([1.0; FEATURE_COUNT]), &table);
        assert!(result.is_fallback());
        assert_eq!(result.risk_score, 50.0);
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.confidence, 0.5);
        assert!(result.feature_importance.is_empty());
        assert!(result.error.as_deref().unwrap_or("").contains("Non-finite"));
    }

    #[test]
    fn test_model_trait_uses_bound_weights() {
        let model = HeuristicModel::default();
        assert_eq!(model.version(), "1.0-simulated");
        let result = model.predict(&FeatureVector::new());
        assert_eq!(result.model_version, "1.0-simulated");
    }
}
