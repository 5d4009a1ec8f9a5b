//! Engine configuration, read from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Weight blob loaded into the WeightStore at startup
    pub weights_path: PathBuf,
    /// Per-collector timeout
    pub collect_timeout: Duration,
}

impl EngineConfig {
    /// Unset or unparsable values fall back to the defaults
    pub fn from_env() -> Self {
        Self {
            weights_path: constants::get_weights_path(),
            collect_timeout: Duration::from_secs(constants::get_collect_timeout_secs()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights_path: constants::default_weights_path(),
            collect_timeout: Duration::from_secs(constants::DEFAULT_COLLECT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.collect_timeout, Duration::from_secs(10));
        assert!(config.weights_path.ends_with("domain-risk/weights_v1.json"));
    }

    // The only test that touches these variables
    #[test]
    fn test_from_env_overrides_and_fallbacks() {
        std::env::set_var(constants::ENV_WEIGHTS_PATH, "/tmp/custom_weights.json");
        std::env::set_var(constants::ENV_COLLECT_TIMEOUT, "3");
        let config = EngineConfig::from_env();
        assert_eq!(config.weights_path, PathBuf::from("/tmp/custom_weights.json"));
        assert_eq!(config.collect_timeout, Duration::from_secs(3));

        std::env::set_var(constants::ENV_COLLECT_TIMEOUT, "soon");
        std::env::set_var(constants::ENV_WEIGHTS_PATH, "  ");
        let config = EngineConfig::from_env();
        assert_eq!(config.collect_timeout, Duration::from_secs(10));
        assert_eq!(config.weights_path, constants::default_weights_path());

        std::env::remove_var(constants::ENV_WEIGHTS_PATH);
        std::env::remove_var(constants::ENV_COLLECT_TIMEOUT);
    }
}
