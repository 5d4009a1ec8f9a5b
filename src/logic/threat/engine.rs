//! Rule Engine
//!
//! Deterministic point scoring straight off the raw signal bundle. Each
//! category is scored independently, summed, then capped.

use crate::logic::explain::{self, ExplanationTrail};
use crate::logic::signals::{
    BlacklistSignals, CertificateStatus, ContentSignals, DnsSignals, HostingSignals, SignalBundle,
    SslSignals,
};
use super::rules::{RuleTable, HOMOGRAPH_MARKER, SUSPICIOUS_TLD_MARKER};
use super::types::RuleBreakdown;

#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    table: RuleTable,
}

impl RuleEngine {
    pub fn new(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Rule score in [0, 100]
    pub fn score(&self, signals: &SignalBundle) -> f64 {
        let breakdown = self.breakdown(signals);
        log::debug!(
            "Rule score: {} (age {}, ssl {}, blacklist {}, hosting {}, content {}, dns {}, patterns {})",
            breakdown.total,
            breakdown.age,
            breakdown.ssl,
            breakdown.blacklist,
            breakdown.hosting,
            breakdown.content,
            breakdown.dns,
            breakdown.patterns
        );
        f64::from(breakdown.total)
    }

    pub fn breakdown(&self, signals: &SignalBundle) -> RuleBreakdown {
        let t = &self.table;

        let age = age_points(t, signals.whois.age_days());
        let ssl = ssl_points(t, &signals.ssl);
        let blacklist = blacklist_points(t, &signals.blacklist);
        let hosting = hosting_points(t, &signals.hosting);
        let content = content_points(t, &signals.content);
        let dns = dns_points(t, &signals.dns);
        let patterns = pattern_points(t, &signals.blacklist, signals.whois.domain_name());

        let raw_total = [age, ssl, blacklist, hosting, content, dns, patterns]
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(*p));

        RuleBreakdown {
            age,
            ssl,
            blacklist,
            hosting,
            content,
            dns,
            patterns,
            raw_total,
            total: raw_total.min(t.max_score),
        }
    }

    /// Ordered explanation trail for the given final score
    pub fn explain(&self, signals: &SignalBundle, final_score: f64) -> ExplanationTrail {
        explain::explain(&self.table, signals, final_score)
    }
}

// ============================================================================
// CATEGORY SCORERS
// ============================================================================

pub fn age_points(table: &RuleTable, age_days: i64) -> u32 {
    table
        .age_brackets
        .iter()
        .find(|b| b.contains(age_days))
        .map(|b| b.points)
        .unwrap_or(0)
}

pub fn ssl_points(table: &RuleTable, ssl: &SslSignals) -> u32 {
    match ssl.status(table.ssl_expiry_warning_days) {
        CertificateStatus::Missing => table.ssl_missing_points,
        CertificateStatus::Invalid => table.ssl_invalid_points,
        CertificateStatus::ExpiringSoon => table.ssl_expiring_points,
        CertificateStatus::Valid => 0,
    }
}

pub fn blacklist_points(table: &RuleTable, blacklist: &BlacklistSignals) -> u32 {
    blacklist
        .hits()
        .saturating_mul(table.blacklist_points_per_hit)
        .min(table.blacklist_max_points)
}

pub fn hosting_points(table: &RuleTable, hosting: &HostingSignals) -> u32 {
    let reputation = hosting.reputation();
    if reputation < table.hosting_bulletproof_below {
        table.hosting_bulletproof_points
    } else if reputation < table.hosting_low_reputation_below {
        table.hosting_low_reputation_points
    } else {
        0
    }
}

pub fn content_points(table: &RuleTable, content: &ContentSignals) -> u32 {
    let mut points = 0;

    if !content.high_risk_keywords.is_empty() {
        points += table.content_high_risk_points;
    }
    if content.medium_risk_keywords.len() > table.content_medium_risk_min_count {
        points += table.content_medium_risk_points;
    }
    if content.has_forms() && content.has_risk_keywords() {
        points += table.phishing_form_points;
    }

    points
}

pub fn dns_points(table: &RuleTable, dns: &DnsSignals) -> u32 {
    if dns.is_resolved() {
        0
    } else {
        table.dns_unresolved_points
    }
}

/// Risk-indicator bonuses plus domain-shape bonuses
pub fn pattern_points(table: &RuleTable, blacklist: &BlacklistSignals, domain: &str) -> u32 {
    let mut points = 0u32;

    for indicator in &blacklist.risk_indicators {
        if indicator.contains(SUSPICIOUS_TLD_MARKER) {
            points = points.saturating_add(table.suspicious_tld_points);
        } else if indicator.contains(HOMOGRAPH_MARKER) {
            points = points.saturating_add(table.homograph_points);
        }
    }

    if domain.chars().count() > table.long_domain_chars {
        points = points.saturating_add(table.long_domain_points);
    }

    let digits = domain.chars().filter(|c| c.is_numeric()).count();
    if digits > table.many_digits_count {
        points = points.saturating_add(table.many_digits_points);
    }

    points
}

// ============================================================================
// TESTS
// ============================================================================
