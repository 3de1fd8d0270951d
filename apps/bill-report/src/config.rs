//! Report configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; a positional argument may override the snapshot path.

use std::env;

/// Bill report configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path to the room snapshot JSON (env: BILL_SNAPSHOT).
    pub snapshot_path: Option<String>,

    /// Optional display currency override (env: BILL_CURRENCY).
    /// Unknown codes are ignored with a warning.
    pub currency_override: Option<String>,
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        ReportConfig {
            snapshot_path: non_empty(env::var("BILL_SNAPSHOT").ok()),
            currency_override: non_empty(env::var("BILL_CURRENCY").ok()),
        }
    }

    /// Resolves the snapshot path: explicit argument first, then the
    /// environment, otherwise an error.
    pub fn resolve_snapshot_path(&self, arg: Option<String>) -> Result<String, ConfigError> {
        arg.or_else(|| self.snapshot_path.clone())
            .ok_or(ConfigError::MissingSnapshotPath)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no snapshot path given (pass a file argument or set BILL_SNAPSHOT)")]
    MissingSnapshotPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_argument() {
        let config = ReportConfig {
            snapshot_path: Some("from-env.json".to_string()),
            currency_override: None,
        };
        assert_eq!(
            config
                .resolve_snapshot_path(Some("from-arg.json".to_string()))
                .unwrap(),
            "from-arg.json"
        );
        assert_eq!(
            config.resolve_snapshot_path(None).unwrap(),
            "from-env.json"
        );
    }

    #[test]
    fn test_resolve_errors_without_any_path() {
        let config = ReportConfig {
            snapshot_path: None,
            currency_override: None,
        };
        assert!(config.resolve_snapshot_path(None).is_err());
    }
}
