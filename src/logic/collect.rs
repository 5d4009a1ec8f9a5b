//! Signal Collection - concurrent fan-out over the collectors
//!
//! Collectors are blocking protocol clients (WHOIS, TLS handshake, DNS...).
//! Each one runs on the blocking pool under its own timeout. A failed or
//! slow collector never fails the analysis: its sub-record is left empty
//! with the reason in `error`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::logic::signals::{SignalBundle, SignalKind};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("Collector failed: {0}")]
    Failed(String),

    #[error("Collector timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Collector task failed: {0}")]
    Join(String),

    #[error("Malformed collector output: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ============================================================================
// SIGNAL SOURCE
// ============================================================================

/// One external collector. `collect` may block.
pub trait SignalSource: Send + Sync {
    fn kind(&self) -> SignalKind;
    fn collect(&self, domain: &str) -> Result<Value, CollectError>;
}

// ============================================================================
// GATHER
// ============================================================================

/// Run every source concurrently and assemble the bundle.
///
/// Sources not in `sources` leave their sub-record absent. If two sources
/// share a kind, the later one in `sources` wins.
pub async fn gather_signals(
    domain: &str,
    sources: Vec<Arc<dyn SignalSource>>,
    timeout: Duration,
) -> SignalBundle {
    let mut handles = Vec::with_capacity(sources.len());

    for source in sources {
        let kind = source.kind();
        let domain = domain.to_string();
        let handle = tokio::spawn(async move {
            let task = tokio::task::spawn_blocking(move || source.collect(&domain));
            let result = match tokio::time::timeout(timeout, task).await {
                Ok(Ok(result)) => result,
                Ok(Err(e)) => Err(CollectError::Join(e.to_string())),
                Err(_) => Err(CollectError::TimedOut(timeout)),
            };
            (kind, result)
        });
        handles.push((kind, handle));
    }

    let mut bundle = SignalBundle::default();
    for (kind, handle) in handles {
        let result = match handle.await {
            Ok((_, result)) => result,
            Err(e) => Err(CollectError::Join(e.to_string())),
        };

        let outcome = result.and_then(|value| bundle.insert(kind, value).map_err(CollectError::from));
        match outcome {
            Ok(()) => log::debug!("Collected {} signals for {}", kind, domain),
            Err(e) => {
                log::warn!("{} collector failed for {}: {}", kind, domain, e);
                bundle.mark_failed(kind, e.to_string());
            }
        }
    }

    bundle
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Fixed(SignalKind, Value);

    impl SignalSource for Fixed {
        fn kind(&self) -> SignalKind {
            self.0
        }
        fn collect(&self, _domain: &str) -> Result<Value, CollectError> {
            Ok(self.1.clone())
        }
    }

    struct Broken(SignalKind);

    impl SignalSource for Broken {
        fn kind(&self) -> SignalKind {
            self.0
        }
        fn collect(&self, _domain: &str) -> Result<Value, CollectError> {
            Err(CollectError::Failed("connection refused".to_string()))
        }
    }

    struct Slow(SignalKind);

    impl SignalSource for Slow {
        fn kind(&self) -> SignalKind {
            self.0
        }
        fn collect(&self, _domain: &str) -> Result<Value, CollectError> {
            std::thread::sleep(Duration::from_millis(300));
            Ok(json!({ "resolved": true }))
        }
    }

    struct Echo;

    impl SignalSource for Echo {
        fn kind(&self) -> SignalKind {
            SignalKind::Whois
        }
        fn collect(&self, domain: &str) -> Result<Value, CollectError> {
            Ok(json!({ "domain": domain, "domain_age_days": 400 }))
        }
    }

    #[tokio::test]
    async fn test_gather_all_sources() {
        let sources: Vec<Arc<dyn SignalSource>> = vec![
            Arc::new(Echo),
            Arc::new(Fixed(SignalKind::Dns, json!({ "resolved": true, "ip": "93.184.216.34" }))),
            Arc::new(Fixed(SignalKind::Hosting, json!({ "reputation_score": 85 }))),
        ];

        let bundle = gather_signals("example.com", sources, Duration::from_secs(5)).await;

        assert_eq!(bundle.domain(), "example.com");
        assert_eq!(bundle.whois.age_days(), 400);
        assert!(bundle.dns.is_resolved());
        assert_eq!(bundle.hosting.reputation(), 85);
        // never collected
        assert_eq!(bundle.ssl.has_ssl, None);
        assert_eq!(bundle.error(SignalKind::Ssl), None);
    }

    #[tokio::test]
    async fn test_failed_source_is_absorbed() {
        let sources: Vec<Arc<dyn SignalSource>> = vec![
            Arc::new(Broken(SignalKind::Ssl)),
            Arc::new(Fixed(SignalKind::Dns, json!({ "resolved": true }))),
        ];

        let bundle = gather_signals("example.com", sources, Duration::from_secs(5)).await;

        assert_eq!(bundle.error(SignalKind::Ssl), Some("Collector failed: connection refused"));
        assert!(!bundle.ssl.has_certificate());
        assert!(bundle.dns.is_resolved());
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let sources: Vec<Arc<dyn SignalSource>> = vec![
            Arc::new(Slow(SignalKind::Dns)),
            Arc::new(Fixed(SignalKind::Hosting, json!({ "reputation_score": 70 }))),
        ];

        let bundle = gather_signals("example.com", sources, Duration::from_millis(20)).await;

        let error = bundle.error(SignalKind::Dns).unwrap();
        assert!(error.contains("timed out"), "{}", error);
        assert!(!bundle.dns.is_resolved());
        assert_eq!(bundle.hosting.reputation(), 70);
    }

    #[tokio::test]
    async fn test_malformed_output_is_absorbed() {
        let sources: Vec<Arc<dyn SignalSource>> = vec![Arc::new(Fixed(
            SignalKind::Blacklist,
            json!({ "blacklist_hits": "many" }),
        ))];

        let bundle = gather_signals("example.com", sources, Duration::from_secs(5)).await;

        let error = bundle.error(SignalKind::Blacklist).unwrap();
        assert!(error.starts_with("Malformed collector output"), "{}", error);
        assert_eq!(bundle.blacklist.hits(), 0);
    }
}
