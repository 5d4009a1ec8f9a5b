//! Central Configuration Constants
//!
//! Single source of truth for engine defaults and the environment
//! variables that override them.

use std::path::PathBuf;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Domain Safety Checker";

/// Directory name under the platform data dir
pub const DATA_DIR_NAME: &str = "domain-risk";

/// Default weight file name (versioned with the feature layout)
pub const WEIGHTS_FILE_NAME: &str = "weights_v1.json";

/// Default per-collector timeout (seconds)
pub const DEFAULT_COLLECT_TIMEOUT_SECS: u64 = 10;

/// Env var: weight file path
pub const ENV_WEIGHTS_PATH: &str = "DOMAIN_RISK_WEIGHTS_PATH";

/// Env var: per-collector timeout (seconds)
pub const ENV_COLLECT_TIMEOUT: &str = "DOMAIN_RISK_COLLECT_TIMEOUT_SECS";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Default weight file location: `<data_local_dir>/domain-risk/weights_v1.json`
pub fn default_weights_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
        .join(WEIGHTS_FILE_NAME)
}

/// Get weight file path from environment or use default
pub fn get_weights_path() -> PathBuf {
    std::env::var(ENV_WEIGHTS_PATH)
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(default_weights_path)
}

/// Get collector timeout from environment or use default
pub fn get_collect_timeout_secs() -> u64 {
    std::env::var(ENV_COLLECT_TIMEOUT)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_COLLECT_TIMEOUT_SECS)
}
