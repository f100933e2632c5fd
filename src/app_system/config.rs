//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `CATALOG_CHANNEL_BUFFER` - Request queue capacity per collection (default: 32)
//! - `CATALOG_LOG_LEVEL` - Log filter used when `RUST_LOG` is unset (default: info)

use thiserror::Error;

const DEFAULT_CHANNEL_BUFFER: usize = 32;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Capacity of each collection's request channel
    pub channel_buffer: usize,
    /// `EnvFilter` directive applied when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_buffer = match lookup("CATALOG_CHANNEL_BUFFER") {
            Some(raw) => parse_channel_buffer(&raw)?,
            None => DEFAULT_CHANNEL_BUFFER,
        };
        let log_level = lookup("CATALOG_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            channel_buffer,
            log_level,
        })
    }
}

fn parse_channel_buffer(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar("CATALOG_CHANNEL_BUFFER".to_string(), reason);
    // tokio::sync::mpsc::channel panics on a zero capacity
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(value) => Ok(value),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_reads_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_CHANNEL_BUFFER", "128"),
            ("CATALOG_LOG_LEVEL", "catalog_store=debug"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 128);
        assert_eq!(config.log_level, "catalog_store=debug");
    }

    #[test]
    fn test_rejects_bad_buffer() {
        let err = CatalogConfig::from_lookup(lookup(&[("CATALOG_CHANNEL_BUFFER", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CATALOG_CHANNEL_BUFFER"));

        let err = CatalogConfig::from_lookup(lookup(&[("CATALOG_CHANNEL_BUFFER", "0")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar("CATALOG_CHANNEL_BUFFER".to_string(), "must be greater than zero".to_string())
        );
    }
}
