//! Score Combiner
//!
//! Input: model ScoreResult, rule score, raw bundle
//! Output: CombinedScore
//!
//! Verdict confidence is a fixed constant per bucket. It is never derived
//! from the model's own confidence estimate.

use crate::logic::model::ScoreResult;
use crate::logic::signals::SignalBundle;
use super::rules::CombinerPolicy;
use super::types::{CombinedScore, ScoreBreakdown, Verdict};

// ============================================================================
// MAIN COMBINE FUNCTION
// ============================================================================

pub fn combine(ml: &ScoreResult, rule_score: f64, signals: &SignalBundle) -> CombinedScore {
    combine_with_policy(ml, rule_score, signals, &CombinerPolicy::default())
}

pub fn combine_with_policy(
    ml: &ScoreResult,
    rule_score: f64,
    signals: &SignalBundle,
    policy: &CombinerPolicy,
) -> CombinedScore {
    let model_contribution = ml.risk_score * policy.model_weight;
    let rule_contribution = rule_score * policy.rule_weight;
    let final_score = model_contribution + rule_contribution;

    let hits = signals.blacklist.hits();
    let (verdict, confidence) = classify_with_policy(final_score, hits, policy);

    log::debug!(
        "Combined score {:.2} = model {:.2} + rules {:.2} -> {} ({:.2})",
        final_score,
        model_contribution,
        rule_contribution,
        verdict,
        confidence
    );

    CombinedScore {
        final_score,
        verdict,
        confidence,
        blacklist_override: hits > 0,
        breakdown: ScoreBreakdown {
            model_contribution,
            rule_contribution,
            final_score,
        },
    }
}

/// 60/40 blend of model risk and rule score, unrounded
pub fn blend(model_risk: f64, rule_score: f64) -> f64 {
    let policy = CombinerPolicy::default();
    model_risk * policy.model_weight + rule_score * policy.rule_weight
}

// ============================================================================
// VERDICT SELECTION (first match wins)
// ============================================================================

pub fn classify(final_score: f64, blacklist_hits: u32) -> (Verdict, f64) {
    classify_with_policy(final_score, blacklist_hits, &CombinerPolicy::default())
}

pub fn classify_with_policy(
    final_score: f64,
    blacklist_hits: u32,
    policy: &CombinerPolicy,
) -> (Verdict, f64) {
    if blacklist_hits > 0 {
        return (Verdict::LikelyScam, policy.blacklist_override_confidence);
    }

    if final_score >= policy.scam_threshold {
        (Verdict::LikelyScam, policy.scam_confidence)
    } else if final_score >= policy.suspicious_threshold {
        (Verdict::Suspicious, policy.suspicious_confidence)
    } else {
        (Verdict::Safe, policy.safe_confidence)
    }
}

// ============================================================================
// TESTS
// ============================================================================
