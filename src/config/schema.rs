//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files, and
//! every section falls back to its defaults when omitted.

use serde::{Deserialize, Serialize};

/// Root configuration for the trailing-slash server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Trailing-slash exemption rules.
    pub trailing_slash: TrailingSlashConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Trailing-slash filter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrailingSlashConfig {
    /// Mount the filter at all.
    pub enabled: bool,

    /// Don't redirect the empty path.
    pub except_empty: bool,

    /// Don't redirect paths whose last segment has an extension.
    pub except_with_extension: bool,

    /// Don't redirect paths under `<virtual_root>/api`.
    pub except_from_api: bool,

    /// Base path the application is served under.
    pub virtual_root: String,

    /// Extra path prefixes that are never redirected.
    pub except_prefixes: Vec<String>,
}

impl Default for TrailingSlashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            except_empty: true,
            except_with_extension: true,
            except_from_api: true,
            virtual_root: "/".to_string(),
            except_prefixes: Vec::new(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.trailing_slash.enabled);
        assert!(config.trailing_slash.except_empty);
        assert!(config.trailing_slash.except_with_extension);
        assert!(config.trailing_slash.except_from_api);
        assert_eq!(config.trailing_slash.virtual_root, "/");
        assert!(config.trailing_slash.except_prefixes.is_empty());
        assert_eq!(config.observability.log_format, LogFormat::Pretty);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [trailing_slash]
            except_from_api = false
            virtual_root = "/shop"
            except_prefixes = ["/health"]

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert!(!config.trailing_slash.except_from_api);
        assert!(config.trailing_slash.except_empty);
        assert_eq!(config.trailing_slash.virtual_root, "/shop");
        assert_eq!(config.trailing_slash.except_prefixes, vec!["/health"]);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }
}
