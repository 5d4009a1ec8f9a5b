use crate::logic::signals::{
    BlacklistSignals, CertificateStatus, ContentSignals, DnsSignals, HostingSignals, SignalBundle,
    SslSignals, WhoisSignals,
};
use crate::logic::threat::rules::{RuleTable, SCAM_THRESHOLD, SUSPICIOUS_THRESHOLD};
use super::messages as msg;
use super::ExplanationTrail;

// Age wording tiers. Ages 91..=365 get no line at all.
const AGE_WEEK_DAYS: i64 = 7;
const AGE_MONTH_DAYS: i64 = 30;
const AGE_QUARTER_DAYS: i64 = 90;
const AGE_ESTABLISHED_DAYS: i64 = 365;

// Hosting commentary is looser than hosting scoring
const HOSTING_LOW_BELOW: i64 = 40;
const HOSTING_REPUTABLE_ABOVE: i64 = 70;

const MAX_BLACKLIST_NAMES: usize = 3;

/// Build the full trail: banner, category lines, blank line, disclaimer.
/// `final_score` is the unrounded combined score.
pub fn explain(table: &RuleTable, signals: &SignalBundle, final_score: f64) -> ExplanationTrail {
    let mut lines = Vec::new();

    age_lines(&signals.whois, &mut lines);
    ssl_lines(table, &signals.ssl, &mut lines);
    blacklist_lines(&signals.blacklist, &mut lines);
    hosting_lines(&signals.hosting, &mut lines);
    content_lines(&signals.content, &mut lines);
    dns_lines(&signals.dns, &mut lines);

    lines.insert(0, verdict_banner(final_score).to_string());
    lines.push(String::new());
    lines.push(msg::DISCLAIMER.to_string());

    log::debug!("Explanation trail: {} lines", lines.len());
    lines
}

pub fn explain_default(signals: &SignalBundle, final_score: f64) -> ExplanationTrail {
    explain(&RuleTable::default(), signals, final_score)
}

pub fn verdict_banner(final_score: f64) -> &'static str {
    if final_score >= SCAM_THRESHOLD {
        msg::BANNER_SCAM
    } else if final_score >= SUSPICIOUS_THRESHOLD {
        msg::BANNER_SUSPICIOUS
    } else {
        msg::BANNER_SAFE
    }
}

// ============================================================================
// CATEGORY LINES (fixed order)
// ============================================================================

fn age_lines(whois: &WhoisSignals, lines: &mut Vec<String>) {
    let age = whois.age_days();
    let line = if age < AGE_WEEK_DAYS {
        Some(msg::AGE_UNDER_WEEK)
    } else if age < AGE_MONTH_DAYS {
        Some(msg::AGE_UNDER_MONTH)
    } else if age < AGE_QUARTER_DAYS {
        Some(msg::AGE_UNDER_QUARTER)
    } else if age > AGE_ESTABLISHED_DAYS {
        Some(msg::AGE_ESTABLISHED)
    } else {
        None
    };

    if let Some(line) = line {
        lines.push(line.to_string());
    }
}

fn ssl_lines(table: &RuleTable, ssl: &SslSignals, lines: &mut Vec<String>) {
    let line = match ssl.status(table.ssl_expiry_warning_days) {
        CertificateStatus::Missing => msg::SSL_MISSING,
        CertificateStatus::Invalid => msg::SSL_INVALID,
        CertificateStatus::ExpiringSoon => msg::SSL_EXPIRING,
        CertificateStatus::Valid => msg::SSL_VALID,
    };
    lines.push(line.to_string());
}

/// Hit count, listed names, scam-name flag, then every risk indicator
fn blacklist_lines(blacklist: &BlacklistSignals, lines: &mut Vec<String>) {
    let hits = blacklist.hits();
    if hits > 0 {
        lines.push(msg::blacklist_hits(hits));
        let names: Vec<&str> = blacklist.names().take(MAX_BLACKLIST_NAMES).collect();
        if !names.is_empty() {
            lines.push(msg::blacklist_names(&names));
        }
    }

    if blacklist.scam_pattern() {
        lines.push(msg::SCAM_PATTERN.to_string());
    }

    for indicator in &blacklist.risk_indicators {
        lines.push(msg::risk_indicator(indicator));
    }
}

fn hosting_lines(hosting: &HostingSignals, lines: &mut Vec<String>) {
    let reputation = hosting.reputation();
    if reputation < HOSTING_LOW_BELOW {
        lines.push(msg::HOSTING_LOW_REPUTATION.to_string());
    } else if reputation > HOSTING_REPUTABLE_ABOVE {
        lines.push(msg::hosting_reputable(hosting.provider()));
    }
}

/// Only reported when the page was actually fetched
fn content_lines(content: &ContentSignals, lines: &mut Vec<String>) {
    if !content.is_available() {
        return;
    }

    let high = &content.high_risk_keywords;
    if let Some(first) = high.first() {
        lines.push(msg::high_risk_keywords(high.len()));
        let second = high.get(1).map(String::as_str).unwrap_or("");
        lines.push(msg::keyword_examples(first, second));
    }

    let medium = &content.medium_risk_keywords;
    if !medium.is_empty() {
        lines.push(msg::medium_risk_keywords(medium.len()));
    }

    if content.has_forms() && content.has_risk_keywords() {
        lines.push(msg::PHISHING_FORMS.to_string());
    }
}

fn dns_lines(dns: &DnsSignals, lines: &mut Vec<String>) {
    if !dns.is_resolved() {
        lines.push(msg::DNS_UNRESOLVED.to_string());
    }
}

// ============================================================================
// TESTS
// ============================================================================
