//! Feature Layout
//!
//! Names and order of the ten model inputs. Weight tables are stored by
//! feature name and stamped with `layout_hash()`. Adding, dropping or
//! reordering a name needs a FEATURE_VERSION bump.

use crc32fast::Hasher;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Feature names in the exact order they appear in the vector
pub const FEATURE_LAYOUT: &[&str] = &[
    // === Registration (0) ===
    "domain_age_days",          // 0: age / 1095 days, capped at 1

    // === Transport (1-2) ===
    "has_https",                // 1: certificate presented (0/1)
    "ssl_valid",                // 2: certificate valid (0/1)

    // === Reputation (3-5) ===
    "blacklist_count",          // 3: hits / 5, capped at 1
    "hosting_reputation_score", // 4: reputation / 100
    "content_scam_score",       // 5: collector score, 0.5 if absent

    // === Resolution (6) ===
    "dns_resolved",             // 6: resolves to an address (0/1)

    // === Name shape (7-8) ===
    "domain_length",            // 7: chars / 50, capped at 1
    "has_whois_privacy",        // 8: privacy-protected WHOIS (0/1)

    // === Content (9) ===
    "content_risk_keywords",    // 9: keywords / 10, capped at 1
];

pub const FEATURE_COUNT: usize = FEATURE_LAYOUT.len();

// Named indices for call sites that need a specific feature.
pub const IDX_DOMAIN_AGE: usize = 0;
pub const IDX_HAS_HTTPS: usize = 1;
pub const IDX_SSL_VALID: usize = 2;
pub const IDX_BLACKLIST_COUNT: usize = 3;
pub const IDX_HOSTING_REPUTATION: usize = 4;
pub const IDX_CONTENT_SCAM_SCORE: usize = 5;
pub const IDX_DNS_RESOLVED: usize = 6;
pub const IDX_DOMAIN_LENGTH: usize = 7;
pub const IDX_WHOIS_PRIVACY: usize = 8;
pub const IDX_CONTENT_RISK_KEYWORDS: usize = 9;

// ============================================================================
// LAYOUT HASH + VALIDATION
// ============================================================================

/// CRC32 over the version byte and each name, NUL-separated. Weight blobs
/// carry this value and are rejected when it differs.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    FEATURE_LAYOUT.iter().for_each(|name| {
        hasher.update(name.as_bytes());
        hasher.update(b"\0");
    });
    hasher.finalize()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Feature layout mismatch: expected v{expected_version} (hash: {expected_hash:08x}), \
     got v{actual_version} (hash: {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Check a (version, hash) stamp against the compiled-in layout
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    let expected_hash = layout_hash();
    if version == FEATURE_VERSION && hash == expected_hash {
        return Ok(());
    }
    Err(LayoutMismatchError {
        expected_version: FEATURE_VERSION,
        expected_hash,
        actual_version: version,
        actual_hash: hash,
    })
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}
