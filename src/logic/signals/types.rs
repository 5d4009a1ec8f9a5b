//! Signal Types
//!
//! One record per collector. Every field the core reads is optional:
//! absent means "not reported", never zero. Keys the core does not read
//! are kept in `extra` so the bundle can be echoed back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// DEFAULTS FOR ABSENT VALUES
// ============================================================================

/// Hosting reputation assumed when the collector reported none
pub const NEUTRAL_HOSTING_REPUTATION: i64 = 50;

/// Content scam score assumed when the collector reported none
pub const NEUTRAL_CONTENT_SCAM_SCORE: f64 = 0.5;

/// Provider label used when hosting reported none
pub const UNKNOWN_PROVIDER: &str = "Unknown";

// ============================================================================
// WHOIS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoisSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_age_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_protected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WhoisSignals {
    /// Registration age; unknown age reads as 0 (brand new)
    pub fn age_days(&self) -> i64 {
        self.domain_age_days.unwrap_or(0)
    }

    pub fn domain_name(&self) -> &str {
        self.domain.as_deref().unwrap_or("")
    }

    pub fn is_privacy_protected(&self) -> bool {
        self.privacy_protected.unwrap_or(false)
    }
}

// ============================================================================
// SSL
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SslSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl_valid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_expiry: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Certificate state, in rule priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStatus {
    Missing,
    Invalid,
    ExpiringSoon,
    Valid,
}

impl SslSignals {
    pub fn has_certificate(&self) -> bool {
        self.has_ssl.unwrap_or(false)
    }

    pub fn is_valid(&self) -> bool {
        self.ssl_valid.unwrap_or(false)
    }

    /// Classify the certificate. An expiry of exactly 0 days counts as
    /// "unknown" rather than "expiring", as the collectors have always
    /// reported it that way.
    pub fn status(&self, warning_days: i64) -> CertificateStatus {
        if !self.has_certificate() {
            return CertificateStatus::Missing;
        }
        if !self.is_valid() {
            return CertificateStatus::Invalid;
        }
        match self.days_until_expiry {
            Some(days) if days != 0 && days < warning_days => CertificateStatus::ExpiringSoon,
            _ => CertificateStatus::Valid,
        }
    }
}

// ============================================================================
// DNS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DnsSignals {
    pub fn is_resolved(&self) -> bool {
        self.resolved.unwrap_or(false)
    }
}

// ============================================================================
// BLACKLIST
// ============================================================================

/// A single blacklist listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlacklistHit {
    pub blacklist: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlacklistSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_hits: Option<u32>,
    #[serde(default)]
    pub blacklists: Vec<BlacklistHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scam_pattern_detected: Option<bool>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlacklistSignals {
    pub fn hits(&self) -> u32 {
        self.blacklist_hits.unwrap_or(0)
    }

    pub fn scam_pattern(&self) -> bool {
        self.scam_pattern_detected.unwrap_or(false)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blacklists.iter().map(|b| b.blacklist.as_str())
    }
}

// ============================================================================
// HOSTING
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostingSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation_score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HostingSignals {
    pub fn reputation(&self) -> i64 {
        self.reputation_score.unwrap_or(NEUTRAL_HOSTING_REPUTATION)
    }

    pub fn provider(&self) -> &str {
        self.hosting_provider.as_deref().unwrap_or(UNKNOWN_PROVIDER)
    }
}

// ============================================================================
// CONTENT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSignals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scam_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_keyword_count: Option<u32>,
    #[serde(default)]
    pub high_risk_keywords: Vec<String>,
    #[serde(default)]
    pub medium_risk_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_forms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentSignals {
    pub fn scam_score(&self) -> f64 {
        self.scam_score
            .filter(|s| s.is_finite())
            .unwrap_or(NEUTRAL_CONTENT_SCAM_SCORE)
    }

    pub fn keyword_count(&self) -> u32 {
        self.risk_keyword_count.unwrap_or(0)
    }

    pub fn has_forms(&self) -> bool {
        self.has_forms.unwrap_or(false)
    }

    pub fn is_available(&self) -> bool {
        self.content_available.unwrap_or(false)
    }

    /// Any high- or medium-risk keyword was found
    pub fn has_risk_keywords(&self) -> bool {
        !self.high_risk_keywords.is_empty() || !self.medium_risk_keywords.is_empty()
    }
}
