//! Model Errors

use crate::logic::features::layout::LayoutMismatchError;

/// Weight table validation and persistence failures
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    LayoutMismatch(#[from] LayoutMismatchError),

    #[error("Unknown feature in weight table: {0}")]
    UnknownFeature(String),

    #[error("Missing weight for feature: {0}")]
    MissingFeature(String),

    #[error("Duplicate weight for feature: {0}")]
    DuplicateFeature(String),

    #[error("Non-finite weight for feature {name}: {value}")]
    NonFinite { name: String, value: f64 },
}

/// Internal prediction failures. Never leaves `predict`; it is turned into
/// the neutral fallback result instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Non-finite linear score: {0}")]
    NonFiniteScore(f64),

    #[error("Non-finite probability for linear score {0}")]
    NonFiniteProbability(f64),
}
