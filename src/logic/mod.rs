//! Logic Module - Scoring Pipeline
//!
//! - `signals/` - Raw collector output (SignalBundle)
//! - `features/` - Normalized feature vector
//! - `model/` - Heuristic model, weights, persistence
//! - `threat/` - Rule engine, verdict, score combiner
//! - `explain/` - Explanation trail
//! - `analysis` - End-to-end pipeline
//! - `collect` - Concurrent collector fan-out
//! - `config` - Env-driven engine configuration

pub mod signals;
pub mod features;
pub mod model;
pub mod threat;
pub mod explain;
pub mod analysis;
pub mod collect;
pub mod config;

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
