//! Feature Vector - Normalized model input
//!
//! Fixed ten-slot vector ordered by `FEATURE_LAYOUT`, tagged with the
//! layout version and hash it was built against.

use serde::{Deserialize, Serialize};
use super::layout::{
    feature_index, layout_hash, validate_layout, LayoutMismatchError, FEATURE_COUNT,
    FEATURE_LAYOUT, FEATURE_VERSION,
};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub version: u8,
    pub layout_hash: u32,
    /// Values in order defined by FEATURE_LAYOUT, each in [0, 1]
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Zeroed vector with the current layout
    pub fn new() -> Self {
        Self::from_values([0.0; FEATURE_COUNT])
    }

    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Set a slot, clamped to [0, 1]. Non-finite input falls back to `default`.
    pub fn set_unit(&mut self, index: usize, value: f64, default: f64) {
        if index < FEATURE_COUNT {
            self.values[index] = if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                default
            };
        }
    }

    pub fn set_by_name(&mut self, name: &str, value: f64) -> bool {
        match feature_index(name) {
            Some(index) => {
                self.set_unit(index, value, 0.0);
                true
            }
            None => false,
        }
    }

    /// (name, value) pairs in layout order
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }

    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// JSON form for debug logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": self
                .named()
                .map(|(name, value)| (name.to_string(), serde_json::json!(value)))
                .collect::<serde_json::Map<_, _>>(),
        })
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

// ============================================================================
// FEATURE EXTRACTOR TRAIT
// ============================================================================

/// Implemented by every signal record that contributes features
pub trait FeatureExtractor {
    /// Write this record's slots into the vector
    fn extract(&self, vector: &mut FeatureVector);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_new() {
        let vector = FeatureVector::new();
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert!(vector.is_compatible());
    }

    #[test]
    fn test_set_unit_clamps_and_defaults() {
        let mut vector = FeatureVector::new();
        vector.set_unit(0, 7.5, 0.0);
        vector.set_unit(1, -3.0, 0.0);
        vector.set_unit(2, f64::NAN, 0.5);
        vector.set_unit(FEATURE_COUNT, 1.0, 0.0);

        assert_eq!(vector.get(0), Some(1.0));
        assert_eq!(vector.get(1), Some(0.0));
        assert_eq!(vector.get(2), Some(0.5));
    }

    #[test]
    fn test_set_by_name() {
        let mut vector = FeatureVector::new();
        assert!(vector.set_by_name("dns_resolved", 1.0));
        assert_eq!(vector.get_by_name("dns_resolved"), Some(1.0));
        assert!(!vector.set_by_name("nonexistent", 1.0));
    }

    #[test]
    fn test_to_log_entry() {
        let log = FeatureVector::new().to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["domain_age_days"], 0.0);
    }
}
