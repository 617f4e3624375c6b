//! Candidate upstream address resolution.
//!
//! # Responsibilities
//! - Build the ordered list of upstream base URLs for one request
//! - Normalize the configured base-URL fragment
//! - De-duplicate while preserving first-seen order
//!
//! # Design Decisions
//! - Pure function of an explicit [`UpstreamConfig`] value; never reads
//!   the process environment
//! - Total: always yields at least the compiled-in defaults
//! - Override URL outranks the base fragment; defaults come last with
//!   the production endpoint ahead of the local emulator

use std::collections::HashSet;

use crate::config::schema::UpstreamConfig;

/// Production generation endpoint.
pub const PRODUCTION_API_URL: &str =
    "https://us-central1-demo-project.cloudfunctions.net/api";

/// Local emulator endpoint used during development.
pub const LOCAL_EMULATOR_URL: &str =
    "http://127.0.0.1:5001/demo-project/us-central1/api";

/// Resolve the ordered, de-duplicated candidate list for one request.
///
/// Duplicates are removed by exact string equality after normalization;
/// the first occurrence keeps its position.
pub fn resolve_candidates(upstream: &UpstreamConfig) -> Vec<String> {
    let mut candidates = Vec::with_capacity(4);

    if let Some(url) = configured(&upstream.override_url) {
        candidates.push(url.to_string());
    }
    if let Some(base) = configured(&upstream.base_url) {
        candidates.push(format!("{}/", base.trim_end_matches('/')));
    }
    candidates.push(PRODUCTION_API_URL.to_string());
    candidates.push(LOCAL_EMULATOR_URL.to_string());

    let mut seen = HashSet::new();
    candidates.retain(|url| seen.insert(url.clone()));
    candidates
}

/// Treat unset and blank values alike.
fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
