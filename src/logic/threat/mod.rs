//! Threat Module
//!
//! Rule-based scoring, the score combiner and the final verdict.
//!
//! ## Structure
//! - `types`: Verdict, RuleBreakdown, CombinedScore
//! - `rules`: Point tables and combiner constants
//! - `engine`: RuleEngine (score + explain)
//! - `combiner`: Model/rule blend and verdict selection
//!
//! ## Usage
//! ```ignore
//! use crate::logic::threat::{combine, RuleEngine};
//!
//! let rules = RuleEngine::default();
//! let combined = combine(&ml, rules.score(&bundle), &bundle);
//! match combined.verdict {
//!     Verdict::Safe => println!("Safe"),
//!     Verdict::Suspicious => println!("Caution"),
//!     Verdict::LikelyScam => println!("Scam"),
//! }
//! ```

pub mod types;
pub mod rules;
pub mod engine;
pub mod combiner;


pub use types::{CombinedScore, RuleBreakdown, ScoreBreakdown, Verdict};
pub use rules::{CombinerPolicy, RuleTable};
pub use engine::RuleEngine;
pub use combiner::{blend, classify, combine, combine_with_policy};
