//! Signal → Feature normalization
//!
//! Every signal record writes its own slots. `normalize` is pure: the same
//! bundle always yields the same vector.

use crate::logic::signals::{
    BlacklistSignals, ContentSignals, DnsSignals, HostingSignals, SignalBundle, SslSignals,
    WhoisSignals,
};
use crate::logic::signals::types::{NEUTRAL_CONTENT_SCAM_SCORE, NEUTRAL_HOSTING_REPUTATION};
use super::layout::*;
use super::vector::{FeatureExtractor, FeatureVector};

/// Age at which a domain counts as fully established (3 years)
pub const MATURE_DOMAIN_DAYS: f64 = 365.0 * 3.0;

/// Blacklist hits that saturate the feature
pub const BLACKLIST_SATURATION: f64 = 5.0;

/// Domain length (chars) that saturates the feature
pub const DOMAIN_LENGTH_SATURATION: f64 = 50.0;

/// Content keyword count that saturates the feature
pub const KEYWORD_SATURATION: f64 = 10.0;

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

impl FeatureExtractor for WhoisSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(IDX_DOMAIN_AGE, self.age_days() as f64 / MATURE_DOMAIN_DAYS, 0.0);
        vector.set_unit(
            IDX_DOMAIN_LENGTH,
            self.domain_name().chars().count() as f64 / DOMAIN_LENGTH_SATURATION,
            0.0,
        );
        vector.set_unit(IDX_WHOIS_PRIVACY, flag(self.is_privacy_protected()), 0.0);
    }
}

impl FeatureExtractor for SslSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(IDX_HAS_HTTPS, flag(self.has_certificate()), 0.0);
        vector.set_unit(IDX_SSL_VALID, flag(self.is_valid()), 0.0);
    }
}

impl FeatureExtractor for DnsSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(IDX_DNS_RESOLVED, flag(self.is_resolved()), 0.0);
    }
}

impl FeatureExtractor for BlacklistSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(IDX_BLACKLIST_COUNT, self.hits() as f64 / BLACKLIST_SATURATION, 0.0);
    }
}

impl FeatureExtractor for HostingSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(
            IDX_HOSTING_REPUTATION,
            self.reputation() as f64 / 100.0,
            NEUTRAL_HOSTING_REPUTATION as f64 / 100.0,
        );
    }
}

impl FeatureExtractor for ContentSignals {
    fn extract(&self, vector: &mut FeatureVector) {
        vector.set_unit(IDX_CONTENT_SCAM_SCORE, self.scam_score(), NEUTRAL_CONTENT_SCAM_SCORE);
        vector.set_unit(
            IDX_CONTENT_RISK_KEYWORDS,
            self.keyword_count() as f64 / KEYWORD_SATURATION,
            0.0,
        );
    }
}

impl FeatureExtractor for SignalBundle {
    fn extract(&self, vector: &mut FeatureVector) {
        self.whois.extract(vector);
        self.ssl.extract(vector);
        self.dns.extract(vector);
        self.blacklist.extract(vector);
        self.hosting.extract(vector);
        self.content.extract(vector);
    }
}

/// Map a raw bundle to the normalized ten-feature vector. Total.
pub fn normalize(signals: &SignalBundle) -> FeatureVector {
    let mut vector = FeatureVector::new();
    signals.extract(&mut vector);
    log::debug!("Normalized features: {}", vector.to_log_entry());
    vector
}
