//! Integration Tests for Feature Normalization
//!
//! Full bundles in, normalized vectors out.

#[cfg(test)]
mod integration_tests {
    use serde_json::json;

    use crate::logic::features::{normalize, FeatureVector};
    use crate::logic::signals::SignalBundle;

    fn bundle(value: serde_json::Value) -> SignalBundle {
        serde_json::from_value(value).unwrap()
    }

    fn assert_in_unit_range(vector: &FeatureVector) {
        for (name, value) in vector.named() {
            assert!((0.0..=1.0).contains(&value), "{} = {} out of range", name, value);
        }
    }

    #[test]
    fn test_empty_bundle_uses_neutral_defaults() {
        let vector = normalize(&SignalBundle::default());

        assert_eq!(vector.get_by_name("domain_age_days"), Some(0.0));
        assert_eq!(vector.get_by_name("has_https"), Some(0.0));
        assert_eq!(vector.get_by_name("ssl_valid"), Some(0.0));
        assert_eq!(vector.get_by_name("blacklist_count"), Some(0.0));
        assert_eq!(vector.get_by_name("hosting_reputation_score"), Some(0.5));
        assert_eq!(vector.get_by_name("content_scam_score"), Some(0.5));
        assert_eq!(vector.get_by_name("dns_resolved"), Some(0.0));
        assert_eq!(vector.get_by_name("domain_length"), Some(0.0));
        assert_eq!(vector.get_by_name("has_whois_privacy"), Some(0.0));
        assert_eq!(vector.get_by_name("content_risk_keywords"), Some(0.0));
    }

    #[test]
    fn test_full_bundle_normalization() {
        let vector = normalize(&bundle(json!({
            "whois": { "domain_age_days": 365, "privacy_protected": true, "domain": "example.com" },
            "ssl": { "has_ssl": true, "ssl_valid": true, "days_until_expiry": 200 },
            "dns": { "resolved": true },
            "blacklist": { "blacklist_hits": 2 },
            "hosting": { "reputation_score": 80, "hosting_provider": "Cloudflare" },
            "content": { "scam_score": 0.2, "risk_keyword_count": 3 }
        })));

        assert!((vector.get_by_name("domain_age_days").unwrap() - 365.0 / 1095.0).abs() < 1e-12);
        assert_eq!(vector.get_by_name("has_https"), Some(1.0));
        assert_eq!(vector.get_by_name("ssl_valid"), Some(1.0));
        assert_eq!(vector.get_by_name("blacklist_count"), Some(0.4));
        assert_eq!(vector.get_by_name("hosting_reputation_score"), Some(0.8));
        assert_eq!(vector.get_by_name("content_scam_score"), Some(0.2));
        assert_eq!(vector.get_by_name("dns_resolved"), Some(1.0));
        assert_eq!(vector.get_by_name("domain_length"), Some(11.0 / 50.0));
        assert_eq!(vector.get_by_name("has_whois_privacy"), Some(1.0));
        assert_eq!(vector.get_by_name("content_risk_keywords"), Some(0.3));
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        let vector = normalize(&bundle(json!({
            "whois": { "domain_age_days": 100000, "domain": "a".repeat(120) },
            "blacklist": { "blacklist_hits": 100 },
            "hosting": { "reputation_score": 250 },
            "content": { "scam_score": 4.2, "risk_keyword_count": 500 }
        })));

        assert_eq!(vector.get_by_name("domain_age_days"), Some(1.0));
        assert_eq!(vector.get_by_name("blacklist_count"), Some(1.0));
        assert_eq!(vector.get_by_name("hosting_reputation_score"), Some(1.0));
        assert_eq!(vector.get_by_name("content_scam_score"), Some(1.0));
        assert_eq!(vector.get_by_name("domain_length"), Some(1.0));
        assert_eq!(vector.get_by_name("content_risk_keywords"), Some(1.0));
        assert_in_unit_range(&vector);

        let negative = normalize(&bundle(json!({
            "whois": { "domain_age_days": -40 },
            "hosting": { "reputation_score": -10 },
            "content": { "scam_score": -0.3 }
        })));
        assert_in_unit_range(&negative);
        assert_eq!(negative.get_by_name("domain_age_days"), Some(0.0));
    }

    #[test]
    fn test_domain_length_counts_characters() {
        let vector = normalize(&bundle(json!({ "whois": { "domain": "bücher.de" } })));
        assert_eq!(vector.get_by_name("domain_length"), Some(9.0 / 50.0));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let signals = bundle(json!({
            "whois": { "domain_age_days": 42, "domain": "shop-deals.xyz" },
            "ssl": { "has_ssl": true, "ssl_valid": false },
            "content": { "scam_score": 0.9, "risk_keyword_count": 4 }
        }));

        assert_eq!(normalize(&signals), normalize(&signals));
    }
}
