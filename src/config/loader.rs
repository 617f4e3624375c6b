//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the full upstream override URL.
pub const ENV_OVERRIDE_URL: &str = "BACKEND_API_URL";

/// Environment variable carrying the upstream base-URL fragment.
pub const ENV_BASE_URL: &str = "BACKEND_API_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply one-shot environment overrides for the upstream addresses.
///
/// Candidate resolution is a pure function of the config value, so the
/// environment is read exactly once here and never again downstream.
pub fn apply_env_overrides(config: &mut GatewayConfig) {
    if let Some(url) = non_blank_env(ENV_OVERRIDE_URL) {
        config.upstream.override_url = Some(url);
    }
    if let Some(base) = non_blank_env(ENV_BASE_URL) {
        config.upstream.base_url = Some(base);
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
