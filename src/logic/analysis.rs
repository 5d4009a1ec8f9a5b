//! Analysis Pipeline
//!
//! bundle → {normalize → heuristic model} + {rule engine} → combine → explain
//!
//! Both scoring paths read the same bundle and never see each other's
//! output. Everything here is synchronous and lock-free apart from the
//! weight snapshot taken at the start of each analysis.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::logic::explain::ExplanationTrail;
use crate::logic::features::normalize;
use crate::logic::model::{RiskModel, ScoreResult, WeightStore};
use crate::logic::round_to;
use crate::logic::signals::SignalBundle;
use crate::logic::threat::{combine_with_policy, CombinerPolicy, RuleEngine, Verdict};

// ============================================================================
// REPORT
// ============================================================================

/// Final per-domain result handed to the request layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainReport {
    pub domain: String,
    /// Combined score, rounded to 2 decimals
    pub risk_score: f64,
    pub verdict: Verdict,
    /// Verdict confidence, rounded to 2 decimals
    pub confidence: f64,
    pub detailed_reasons: ExplanationTrail,
    pub technical_signals: SignalBundle,
    pub model: ScoreResult,
    pub rule_score: f64,
    /// UTC, RFC 3339
    pub analysis_timestamp: String,
}

// ============================================================================
// ANALYZER
// ============================================================================

#[derive(Debug, Clone)]
pub struct RiskAnalyzer {
    weights: Arc<WeightStore>,
    rules: RuleEngine,
    policy: CombinerPolicy,
}

impl RiskAnalyzer {
    pub fn new(weights: Arc<WeightStore>, rules: RuleEngine, policy: CombinerPolicy) -> Self {
        Self { weights, rules, policy }
    }

    /// Default rules, shared weight store
    pub fn with_store(weights: Arc<WeightStore>) -> Self {
        Self::new(weights, RuleEngine::default(), CombinerPolicy::default())
    }

    pub fn weights(&self) -> &Arc<WeightStore> {
        &self.weights
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// Score one bundle. Total: component failures surface as fallback
    /// metadata on the report, never as an error.
    pub fn analyze(&self, bundle: SignalBundle) -> DomainReport {
        let model = self.weights.model();
        let features = normalize(&bundle);
        let ml = model.predict(&features);

        let rule_score = self.rules.score(&bundle);
        let combined = combine_with_policy(&ml, rule_score, &bundle, &self.policy);
        let reasons = self.rules.explain(&bundle, combined.final_score);

        let domain = bundle.domain().to_string();
        log::info!(
            "Analyzed {}: {} (score {:.2}, model {:.2} [{}], rules {:.0})",
            if domain.is_empty() { "<unknown>" } else { domain.as_str() },
            combined.verdict,
            combined.final_score,
            ml.risk_score,
            ml.method,
            rule_score
        );

        DomainReport {
            domain,
            risk_score: round_to(combined.final_score, 2),
            verdict: combined.verdict,
            confidence: round_to(combined.confidence, 2),
            detailed_reasons: reasons,
            technical_signals: bundle,
            model: ml,
            rule_score,
            analysis_timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::with_store(Arc::new(WeightStore::default()))
    }
}

/// Analyze with the default weights and rules
pub fn analyze(bundle: SignalBundle) -> DomainReport {
    RiskAnalyzer::default().analyze(bundle)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::explain::messages;
    use crate::logic::model::WeightTable;
    use serde_json::json;

    fn bundle(value: serde_json::Value) -> SignalBundle {
        serde_json::from_value(value).unwrap()
    }

    fn established() -> SignalBundle {
        bundle(json!({
            "whois": { "domain": "example.com", "domain_age_days": 9000, "registrar": "IANA" },
            "ssl": { "has_ssl": true, "ssl_valid": true, "days_until_expiry": 250 },
            "dns": { "resolved": true, "ip": "93.184.216.34" },
            "blacklist": { "blacklist_hits": 0, "blacklists": [], "risk_indicators": [] },
            "hosting": { "reputation_score": 90, "hosting_provider": "Edgecast" },
            "content": { "scam_score": 0.05, "content_available": true, "has_forms": false }
        }))
    }

    #[test]
    fn test_established_domain_is_safe() {
        let report = analyze(established());

        assert_eq!(report.domain, "example.com");
        assert_eq!(report.verdict, Verdict::Safe);
        assert_eq!(report.confidence, 0.8);
        assert_eq!(report.rule_score, 0.0);
        assert!(report.risk_score < 40.0);
        assert_eq!(report.detailed_reasons[0], messages::BANNER_SAFE);
        assert_eq!(report.detailed_reasons.last().unwrap(), messages::DISCLAIMER);
        assert_eq!(report.model.method, "heuristic");
    }

    #[test]
    fn test_report_shape() {
        let report = analyze(established());
        let value = serde_json::to_value(&report).unwrap();

        for key in [
            "domain",
            "risk_score",
            "verdict",
            "confidence",
            "detailed_reasons",
            "technical_signals",
            "model",
            "rule_score",
            "analysis_timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(value["verdict"], "SAFE");
        // unknown collector keys echo through
        assert_eq!(value["technical_signals"]["whois"]["registrar"], "IANA");
        assert_eq!(value["technical_signals"]["dns"]["ip"], "93.184.216.34");
        assert!(chrono::DateTime::parse_from_rfc3339(&report.analysis_timestamp).is_ok());
    }

    #[test]
    fn test_risk_score_rounded_verdict_unrounded() {
        let report = analyze(bundle(json!({
            "whois": { "domain_age_days": 3 },
            "ssl": { "has_ssl": false },
            "dns": { "resolved": false },
            "blacklist": { "blacklist_hits": 0 },
            "hosting": { "reputation_score": 50 },
            "content": { "scam_score": 0.5 }
        })));

        assert_eq!(report.rule_score, 60.0);
        assert_eq!(report.verdict, Verdict::Suspicious);
        assert_eq!(report.confidence, 0.75);
        assert_eq!(report.risk_score, round_to(report.risk_score, 2));
        assert_eq!(report.detailed_reasons[0], messages::BANNER_SUSPICIOUS);
        assert_eq!(report.domain, "");
    }

    #[test]
    fn test_blacklist_override_in_report() {
        let mut signals = established();
        signals.blacklist.blacklist_hits = Some(1);

        let report = analyze(signals);
        assert_eq!(report.verdict, Verdict::LikelyScam);
        assert_eq!(report.confidence, 0.95);
        // banner follows the numeric score, not the override
        assert!(report.risk_score < 40.0);
        assert_eq!(report.detailed_reasons[0], messages::BANNER_SAFE);
    }

    #[test]
    fn test_analyzer_follows_weight_swap() {
        let store = Arc::new(WeightStore::default());
        let analyzer = RiskAnalyzer::with_store(Arc::clone(&store));
        let before = analyzer.analyze(established());

        let mut table = WeightTable::default();
        table.model_version = "2.0-test".to_string();
        for (_, weight) in table.weights.iter_mut() {
            *weight = 0.0;
        }
        store.replace(table).unwrap();

        let after = analyzer.analyze(established());
        assert_eq!(before.model.model_version, "1.0-simulated");
        assert_eq!(after.model.model_version, "2.0-test");
        assert!((after.model.probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_bundle_is_total() {
        let report = analyze(SignalBundle::default());
        assert_eq!(report.domain, "");
        assert!(report.detailed_reasons.len() >= 3);
        assert!((0.0..=100.0).contains(&report.risk_score));
    }
}
