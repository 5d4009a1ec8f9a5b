//! Explain Module - Human-Readable Explanation Trail
//!
//! Built from the raw bundle, independently of the rule score. Position 0
//! is always the verdict banner; the last two entries are always a blank
//! line and the disclaimer.

pub mod messages;
pub mod engine;

pub use engine::{explain, explain_default, verdict_banner};

/// Ordered explanation lines
pub type ExplanationTrail = Vec<String>;
