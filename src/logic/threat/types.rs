//! Threat Types
//!
//! Verdict and score breakdowns. No logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICT
// ============================================================================

/// Final three-way classification shown to the end user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Safe,
    Suspicious,
    LikelyScam,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "SAFE",
            Verdict::Suspicious => "SUSPICIOUS",
            Verdict::LikelyScam => "LIKELY_SCAM",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Verdict::Safe => 0,
            Verdict::Suspicious => 1,
            Verdict::LikelyScam => 2,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RULE BREAKDOWN
// ============================================================================

/// Points per evidence category, before and after the cap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBreakdown {
    pub age: u32,
    pub ssl: u32,
    pub blacklist: u32,
    pub hosting: u32,
    pub content: u32,
    pub dns: u32,
    pub patterns: u32,
    /// Sum of all categories, uncapped
    pub raw_total: u32,
    /// `raw_total` capped at the rule ceiling
    pub total: u32,
}

// ============================================================================
// COMBINED SCORE
// ============================================================================

/// How the final score was put together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub model_contribution: f64,
    pub rule_contribution: f64,
    pub final_score: f64,
}

/// Output of the score combiner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedScore {
    /// Unrounded blend; verdict thresholds apply to this value
    pub final_score: f64,
    pub verdict: Verdict,
    /// Fixed per verdict bucket, independent of model confidence
    pub confidence: f64,
    pub blacklist_override: bool,
    pub breakdown: ScoreBreakdown,
}
