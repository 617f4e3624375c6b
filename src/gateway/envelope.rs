//! Terminal JSON envelopes returned to the caller.
//!
//! Field names here are public API; clients branch on the stable
//! `status: "error"` discriminator and must keep working.

use serde::Serialize;

use crate::gateway::outcome::Anomaly;

/// One failed connection attempt, as surfaced to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionError {
    pub upstream_url: String,
    pub error: String,
}

/// Synthesized error body for every terminal failure branch.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_body_preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempted_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_errors: Option<Vec<ConnectionError>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            upstream_status: None,
            upstream_body_preview: None,
            upstream_url: None,
            attempted_urls: None,
            connection_errors: None,
            details: None,
        }
    }

    /// Envelope for a rejected payload (HTTP 400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Envelope for an unprocessable inbound request (HTTP 500).
    pub fn internal(details: impl Into<String>) -> Self {
        let mut envelope = Self::new("Failed to process /api/generate request");
        envelope.details = Some(details.into());
        envelope
    }

    /// Envelope for forwarding exhaustion (HTTP 502).
    ///
    /// A non-JSON reply from a live upstream is the stronger diagnostic
    /// signal, so the most recent anomaly takes priority over the
    /// generic connection-failure summary.
    pub fn exhausted(
        attempted_urls: Vec<String>,
        connection_errors: Vec<ConnectionError>,
        last_anomaly: Option<Anomaly>,
    ) -> Self {
        let mut envelope = match last_anomaly {
            Some(anomaly) => {
                let mut envelope = Self::new("Upstream returned non-JSON response");
                envelope.upstream_status = Some(anomaly.status);
                envelope.upstream_body_preview = Some(anomaly.body_preview);
                envelope.upstream_url = Some(anomaly.url);
                envelope
            }
            None => Self::new("Could not connect to any upstream API URL"),
        };
        envelope.attempted_urls = Some(attempted_urls);
        envelope.connection_errors = Some(connection_errors);
        envelope
    }
}
