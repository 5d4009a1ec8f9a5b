//! Risk Rules & Thresholds
//!
//! Point tables for the rule engine and the constants of the score
//! combiner. No scoring logic lives here.

use serde::{Deserialize, Serialize};

// ============================================================================
// DOMAIN AGE (inclusive brackets, first match wins)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub min_days: i64,
    pub max_days: i64,
    pub points: u32,
}

impl AgeBracket {
    pub const fn new(min_days: i64, max_days: i64, points: u32) -> Self {
        Self { min_days, max_days, points }
    }

    pub fn contains(&self, age_days: i64) -> bool {
        self.min_days <= age_days && age_days <= self.max_days
    }
}

pub const AGE_BRACKETS: [AgeBracket; 4] = [
    AgeBracket::new(0, 7, 25),    // critical
    AgeBracket::new(8, 30, 20),   // high
    AgeBracket::new(31, 90, 10),  // medium
    AgeBracket::new(91, 180, 5),  // low
];

// ============================================================================
// SSL
// ============================================================================

pub const SSL_MISSING_POINTS: u32 = 15;
pub const SSL_INVALID_POINTS: u32 = 10;
pub const SSL_EXPIRING_POINTS: u32 = 5;

/// Certificate expiring in fewer days than this is "expiring soon"
pub const SSL_EXPIRY_WARNING_DAYS: i64 = 30;

// ============================================================================
// BLACKLIST
// ============================================================================

pub const BLACKLIST_POINTS_PER_HIT: u32 = 30;
pub const BLACKLIST_MAX_POINTS: u32 = 50;

// ============================================================================
// HOSTING
// ============================================================================

pub const HOSTING_BULLETPROOF_BELOW: i64 = 30;
pub const HOSTING_BULLETPROOF_POINTS: u32 = 20;
pub const HOSTING_LOW_REPUTATION_BELOW: i64 = 50;
pub const HOSTING_LOW_REPUTATION_POINTS: u32 = 10;

// ============================================================================
// CONTENT
// ============================================================================

pub const CONTENT_HIGH_RISK_POINTS: u32 = 15;
pub const CONTENT_MEDIUM_RISK_POINTS: u32 = 5;

/// Medium-risk keywords only count when there are more than this many
pub const CONTENT_MEDIUM_RISK_MIN_COUNT: usize = 2;

/// Forms + any risk keyword
pub const PHISHING_FORM_POINTS: u32 = 10;

// ============================================================================
// DNS
// ============================================================================

pub const DNS_UNRESOLVED_POINTS: u32 = 20;

// ============================================================================
// PATTERNS
// ============================================================================

/// Substring marking a suspicious-TLD risk indicator
pub const SUSPICIOUS_TLD_MARKER: &str = "TLD";
pub const SUSPICIOUS_TLD_POINTS: u32 = 10;

/// Substring marking a homograph risk indicator
pub const HOMOGRAPH_MARKER: &str = "homograph";
pub const HOMOGRAPH_POINTS: u32 = 15;

pub const LONG_DOMAIN_CHARS: usize = 30;
pub const LONG_DOMAIN_POINTS: u32 = 5;

pub const MANY_DIGITS_COUNT: usize = 5;
pub const MANY_DIGITS_POINTS: u32 = 5;

/// Rule score ceiling
pub const MAX_RULE_SCORE: u32 = 100;

// ============================================================================
// COMBINER
// ============================================================================

/// Heuristic model share of the final score (60%)
pub const MODEL_WEIGHT: f64 = 0.6;

/// Rule engine share of the final score (40%)
pub const RULE_WEIGHT: f64 = 0.4;

/// At or above this final score = LIKELY_SCAM
pub const SCAM_THRESHOLD: f64 = 70.0;

/// At or above this final score = SUSPICIOUS
pub const SUSPICIOUS_THRESHOLD: f64 = 40.0;

pub const BLACKLIST_OVERRIDE_CONFIDENCE: f64 = 0.95;
pub const SCAM_CONFIDENCE: f64 = 0.85;
pub const SUSPICIOUS_CONFIDENCE: f64 = 0.75;
pub const SAFE_CONFIDENCE: f64 = 0.80;

// ============================================================================
// RULE TABLE
// ============================================================================

/// Full rule configuration. Immutable constant data; `Default` is the
/// production table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    pub age_brackets: Vec<AgeBracket>,

    pub ssl_missing_points: u32,
    pub ssl_invalid_points: u32,
    pub ssl_expiring_points: u32,
    pub ssl_expiry_warning_days: i64,

    pub blacklist_points_per_hit: u32,
    pub blacklist_max_points: u32,

    pub hosting_bulletproof_below: i64,
    pub hosting_bulletproof_points: u32,
    pub hosting_low_reputation_below: i64,
    pub hosting_low_reputation_points: u32,

    pub content_high_risk_points: u32,
    pub content_medium_risk_points: u32,
    pub content_medium_risk_min_count: usize,
    pub phishing_form_points: u32,

    pub dns_unresolved_points: u32,

    pub suspicious_tld_points: u32,
    pub homograph_points: u32,
    pub long_domain_chars: usize,
    pub long_domain_points: u32,
    pub many_digits_count: usize,
    pub many_digits_points: u32,

    pub max_score: u32,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            age_brackets: AGE_BRACKETS.to_vec(),

            ssl_missing_points: SSL_MISSING_POINTS,
            ssl_invalid_points: SSL_INVALID_POINTS,
            ssl_expiring_points: SSL_EXPIRING_POINTS,
            ssl_expiry_warning_days: SSL_EXPIRY_WARNING_DAYS,

            blacklist_points_per_hit: BLACKLIST_POINTS_PER_HIT,
            blacklist_max_points: BLACKLIST_MAX_POINTS,

            hosting_bulletproof_below: HOSTING_BULLETPROOF_BELOW,
            hosting_bulletproof_points: HOSTING_BULLETPROOF_POINTS,
            hosting_low_reputation_below: HOSTING_LOW_REPUTATION_BELOW,
            hosting_low_reputation_points: HOSTING_LOW_REPUTATION_POINTS,

            content_high_risk_points: CONTENT_HIGH_RISK_POINTS,
            content_medium_risk_points: CONTENT_MEDIUM_RISK_POINTS,
            content_medium_risk_min_count: CONTENT_MEDIUM_RISK_MIN_COUNT,
            phishing_form_points: PHISHING_FORM_POINTS,

            dns_unresolved_points: DNS_UNRESOLVED_POINTS,

            suspicious_tld_points: SUSPICIOUS_TLD_POINTS,
            homograph_points: HOMOGRAPH_POINTS,
            long_domain_chars: LONG_DOMAIN_CHARS,
            long_domain_points: LONG_DOMAIN_POINTS,
            many_digits_count: MANY_DIGITS_COUNT,
            many_digits_points: MANY_DIGITS_POINTS,

            max_score: MAX_RULE_SCORE,
        }
    }
}

// ============================================================================
// COMBINER POLICY
// ============================================================================

/// Blend weights, verdict thresholds and per-bucket confidences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinerPolicy {
    pub model_weight: f64,
    pub rule_weight: f64,
    pub scam_threshold: f64,
    pub suspicious_threshold: f64,
    pub blacklist_override_confidence: f64,
    pub scam_confidence: f64,
    pub suspicious_confidence: f64,
    pub safe_confidence: f64,
}

impl Default for CombinerPolicy {
    fn default() -> Self {
        Self {
            model_weight: MODEL_WEIGHT,
            rule_weight: RULE_WEIGHT,
            scam_threshold: SCAM_THRESHOLD,
            suspicious_threshold: SUSPICIOUS_THRESHOLD,
            blacklist_override_confidence: BLACKLIST_OVERRIDE_CONFIDENCE,
            scam_confidence: SCAM_CONFIDENCE,
            suspicious_confidence: SUSPICIOUS_CONFIDENCE,
            safe_confidence: SAFE_CONFIDENCE,
        }
    }
}
