//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Configured upstream addresses must be absolute http(s) URLs
//! - Value ranges (timeouts nonzero, bind address parseable)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Listener bind address does not parse.
    #[error("invalid bind address '{0}'")]
    BindAddress(String),

    /// A configured upstream address is not an absolute http(s) URL.
    #[error("{field} is not an absolute http(s) URL: '{value}'")]
    UpstreamUrl { field: &'static str, value: String },

    /// A timeout is zero, which would fail every request or attempt.
    #[error("{0} must be nonzero")]
    ZeroTimeout(&'static str),
}

/// Check the whole config, collecting every error.
///
/// Blank upstream values are not errors; the resolver skips them.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let urls = [
        ("upstream.override_url", &config.upstream.override_url),
        ("upstream.base_url", &config.upstream.base_url),
    ];
    for (field, value) in urls {
        let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        let absolute_http = Url::parse(value)
            .map(|url| matches!(url.scheme(), "http" | "https"))
            .unwrap_or(false);
        if !absolute_http {
            errors.push(ValidationError::UpstreamUrl {
                field,
                value: value.to_string(),
            });
        }
    }

    let timeouts = [
        ("timeouts.request_secs", config.timeouts.request_secs),
        ("timeouts.connect_secs", config.timeouts.connect_secs),
        ("timeouts.upstream_secs", config.timeouts.upstream_secs),
    ];
    for (field, value) in timeouts {
        if value == 0 {
            errors.push(ValidationError::ZeroTimeout(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn zero_timeout_is_flagged() {
        let mut config = GatewayConfig::default();
        config.timeouts.upstream_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("upstream_secs"));
    }

    #[test]
    fn relative_upstream_url_is_flagged() {
        let mut config = GatewayConfig::default();
        config.upstream.override_url = Some("not-a-url".to_string());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].to_string().contains("override_url"));
    }

    #[test]
    fn non_http_scheme_is_flagged() {
        let mut config = GatewayConfig::default();
        config.upstream.base_url = Some("ftp://gw.example.com/api".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn blank_upstream_values_pass() {
        let mut config = GatewayConfig::default();
        config.upstream.override_url = Some("  ".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "nonsense".to_string();
        config.upstream.override_url = Some("nope".to_string());
        config.timeouts.request_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
