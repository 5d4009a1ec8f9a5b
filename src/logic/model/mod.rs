//! Model Module - Heuristic Risk Model
//!
//! - `weights`: WeightTable (immutable, versioned)
//! - `inference`: predict / ScoreResult / RiskModel trait
//! - `storage`: JSON weight blobs keyed to the feature layout
//! - `registry`: WeightStore for atomic reloads

pub mod error;
pub mod weights;
pub mod inference;
pub mod storage;
pub mod registry;


pub use error::{ModelError, WeightError};
pub use weights::{WeightTable, DEFAULT_MODEL_VERSION};
pub use inference::{predict, FeatureContribution, HeuristicModel, RiskModel, ScoreResult};
pub use storage::{load_weights, save_weights};
pub use registry::WeightStore;
