//! Features Module - Feature Extraction Engine
//!
//! Turns the raw signal bundle into the fixed-shape normalized vector the
//! heuristic model consumes.

pub mod layout;
pub mod vector;
pub mod extract;

#[cfg(test)]
mod tests;

pub use layout::{feature_index, feature_name, layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::{FeatureExtractor, FeatureVector};
pub use extract::normalize;
