//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! gateway. All types derive Serde traits for deserialization from
//! config files, and every field has a default so a minimal (or empty)
//! config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address, body limits).
    pub listener: ListenerConfig,

    /// Upstream address configuration.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum inbound request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Upstream address configuration.
///
/// Both fields are optional; the compiled-in defaults in
/// [`crate::config::candidates`] guarantee the candidate list is never
/// empty. Unset and blank values are treated alike.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Full upstream URL tried before everything else.
    pub override_url: Option<String>,

    /// Base-URL fragment, normalized to carry exactly one trailing slash.
    pub base_url: Option<String>,
}

/// Timeout configuration for inbound and outbound operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for one inbound request in seconds.
    ///
    /// Should cover the worst case of every candidate timing out.
    pub request_secs: u64,

    /// Connection establishment timeout per upstream attempt in seconds.
    pub connect_secs: u64,

    /// Total timeout per upstream attempt in seconds.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_secs: 60,
            connect_secs: 5,
            upstream_secs: 10,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing filter applied when RUST_LOG is not set
    /// (e.g., "prompt_gateway=debug,tower_http=debug").
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "prompt_gateway=info,tower_http=info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = GatewayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.upstream.override_url.is_none());
        assert!(config.upstream.base_url.is_none());
        assert!(config.timeouts.request_secs > 0);
        assert!(config.timeouts.upstream_secs > 0);
    }

    #[test]
    fn minimal_config_parses_with_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            base_url = "https://gateway.internal/api"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.upstream.base_url.as_deref(),
            Some("https://gateway.internal/api")
        );
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.connect_secs, 5);
    }

    #[test]
    fn empty_config_parses() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert!(config.upstream.override_url.is_none());
    }
}
