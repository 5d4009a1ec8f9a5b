//! Signals Module - Raw Collector Output
//!
//! `SignalBundle` is what the collectors hand to the core. It is created
//! fresh per analysis and echoed back in the report as `technical_signals`.

pub mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use types::{
    BlacklistHit, BlacklistSignals, CertificateStatus, ContentSignals, DnsSignals,
    HostingSignals, SslSignals, WhoisSignals,
};

// ============================================================================
// SIGNAL KIND
// ============================================================================

/// The six collector categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Whois,
    Ssl,
    Dns,
    Blacklist,
    Hosting,
    Content,
}

impl SignalKind {
    pub const ALL: [SignalKind; 6] = [
        SignalKind::Whois,
        SignalKind::Ssl,
        SignalKind::Dns,
        SignalKind::Blacklist,
        SignalKind::Hosting,
        SignalKind::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalKind::Whois => "whois",
            SignalKind::Ssl => "ssl",
            SignalKind::Dns => "dns",
            SignalKind::Blacklist => "blacklist",
            SignalKind::Hosting => "hosting",
            SignalKind::Content => "content",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SIGNAL BUNDLE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalBundle {
    #[serde(default)]
    pub whois: WhoisSignals,
    #[serde(default)]
    pub ssl: SslSignals,
    #[serde(default)]
    pub dns: DnsSignals,
    #[serde(default)]
    pub blacklist: BlacklistSignals,
    #[serde(default)]
    pub hosting: HostingSignals,
    #[serde(default)]
    pub content: ContentSignals,
}

impl SignalBundle {
    /// Replace one sub-record with a collector's JSON output
    pub fn insert(&mut self, kind: SignalKind, value: Value) -> Result<(), serde_json::Error> {
        match kind {
            SignalKind::Whois => self.whois = serde_json::from_value(value)?,
            SignalKind::Ssl => self.ssl = serde_json::from_value(value)?,
            SignalKind::Dns => self.dns = serde_json::from_value(value)?,
            SignalKind::Blacklist => self.blacklist = serde_json::from_value(value)?,
            SignalKind::Hosting => self.hosting = serde_json::from_value(value)?,
            SignalKind::Content => self.content = serde_json::from_value(value)?,
        }
        Ok(())
    }

    /// Reset one sub-record to "nothing reported" and attach the reason
    pub fn mark_failed(&mut self, kind: SignalKind, reason: impl Into<String>) {
        let error = Some(reason.into());
        match kind {
            SignalKind::Whois => self.whois = WhoisSignals { error, ..Default::default() },
            SignalKind::Ssl => self.ssl = SslSignals { error, ..Default::default() },
            SignalKind::Dns => self.dns = DnsSignals { error, ..Default::default() },
            SignalKind::Blacklist => {
                self.blacklist = BlacklistSignals { error, ..Default::default() }
            }
            SignalKind::Hosting => self.hosting = HostingSignals { error, ..Default::default() },
            SignalKind::Content => self.content = ContentSignals { error, ..Default::default() },
        }
    }

    /// Error string attached to a sub-record, if any
    pub fn error(&self, kind: SignalKind) -> Option<&str> {
        match kind {
            SignalKind::Whois => self.whois.error.as_deref(),
            SignalKind::Ssl => self.ssl.error.as_deref(),
            SignalKind::Dns => self.dns.error.as_deref(),
            SignalKind::Blacklist => self.blacklist.error.as_deref(),
            SignalKind::Hosting => self.hosting.error.as_deref(),
            SignalKind::Content => self.content.error.as_deref(),
        }
    }

    /// Domain under analysis, as reported by WHOIS or the blacklist collector
    pub fn domain(&self) -> &str {
        match self.whois.domain.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => self
                .blacklist
                .extra
                .get("domain")
                .and_then(Value::as_str)
                .unwrap_or(""),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
