//! Explanation wording. Downstream dashboards match on these strings.

// ============================================================================
// VERDICT BANNERS
// ============================================================================

pub const BANNER_SCAM: &str = "🚨 VERDICT: This domain shows multiple indicators of being a SCAM";
pub const BANNER_SUSPICIOUS: &str = "⚠️ VERDICT: This domain is SUSPICIOUS - exercise caution";
pub const BANNER_SAFE: &str = "✅ VERDICT: This domain appears relatively SAFE based on available data";

pub const DISCLAIMER: &str =
    "ℹ️ Note: This analysis is based on automated checks. Always exercise caution online.";

// ============================================================================
// DOMAIN AGE
// ============================================================================

pub const AGE_UNDER_WEEK: &str = "🚨 CRITICAL: Domain is extremely new (less than 1 week old)";
pub const AGE_UNDER_MONTH: &str = "⚠️ HIGH RISK: Domain is very new (less than 1 month old)";
pub const AGE_UNDER_QUARTER: &str = "⚠️ MEDIUM: Domain is relatively new (less than 3 months old)";
pub const AGE_ESTABLISHED: &str = "✅ POSITIVE: Domain is well-established (over 1 year old)";

// ============================================================================
// SSL
// ============================================================================

pub const SSL_MISSING: &str = "🚨 CRITICAL: No HTTPS/SSL certificate detected";
pub const SSL_INVALID: &str = "⚠️ HIGH RISK: SSL certificate is invalid or expired";
pub const SSL_EXPIRING: &str = "⚠️ WARNING: SSL certificate expiring soon";
pub const SSL_VALID: &str = "✅ POSITIVE: Valid SSL certificate detected";

// ============================================================================
// BLACKLIST / PATTERNS
// ============================================================================

pub fn blacklist_hits(count: u32) -> String {
    format!("🚨 CRITICAL: Found on {} security blacklist(s)", count)
}

pub fn blacklist_names(names: &[&str]) -> String {
    format!("   Blacklists: {}", names.join(", "))
}

pub const SCAM_PATTERN: &str = "⚠️ HIGH RISK: Domain name contains scam-related keywords";

pub fn risk_indicator(indicator: &str) -> String {
    format!("⚠️ WARNING: {}", indicator)
}

// ============================================================================
// HOSTING
// ============================================================================

pub const HOSTING_LOW_REPUTATION: &str = "⚠️ MEDIUM: Hosted on service with low reputation score";

pub fn hosting_reputable(provider: &str) -> String {
    format!("✅ POSITIVE: Hosted by reputable provider ({})", provider)
}

// ============================================================================
// CONTENT
// ============================================================================

pub fn high_risk_keywords(count: usize) -> String {
    format!("🚨 HIGH RISK: Found {} high-risk scam keywords in content", count)
}

/// Second slot is left empty when only one keyword was found
pub fn keyword_examples(first: &str, second: &str) -> String {
    format!("   Examples: '{}', '{}'", first, second)
}

pub fn medium_risk_keywords(count: usize) -> String {
    format!("⚠️ MEDIUM: Found {} marketing-related keywords", count)
}

pub const PHISHING_FORMS: &str =
    "⚠️ WARNING: Site contains forms and suspicious keywords (possible phishing)";

// ============================================================================
// DNS
// ============================================================================

pub const DNS_UNRESOLVED: &str = "🚨 CRITICAL: Domain does not resolve to an IP address";
