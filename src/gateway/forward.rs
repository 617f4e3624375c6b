//! Sequential upstream delivery with ordered fallback.
//!
//! # Responsibilities
//! - POST the payload to each candidate strictly in order
//! - Short-circuit on the first JSON-parseable response
//! - Collect connection failures and the most recent non-JSON anomaly
//!
//! # Design Decisions
//! - Candidates are never raced; first-responder-wins stays
//!   deterministic without arbitration between racing replies
//! - A JSON error body from upstream is a forwarding success and is
//!   relayed verbatim with its original status
//! - Per-attempt timeouts keep one dead candidate from stalling the
//!   inbound request; dropping the returned future cancels the
//!   in-flight attempt

use std::time::Duration;

use reqwest::header::{HeaderValue, CACHE_CONTROL};
use serde_json::Value;

use crate::config::schema::TimeoutConfig;
use crate::gateway::envelope::ConnectionError;
use crate::gateway::outcome::{classify_reply, Anomaly, AttemptOutcome};
use crate::gateway::request::GenerationRequest;

/// Terminal result of one forwarding pass over the candidate list.
#[derive(Debug)]
pub enum ForwardReply {
    /// A candidate produced JSON; relay body and status verbatim.
    Relay {
        status: u16,
        body: Value,
        /// Failures that preceded the success, kept for logging only.
        connection_errors: Vec<ConnectionError>,
    },

    /// Every candidate failed to produce JSON.
    Exhausted {
        attempted_urls: Vec<String>,
        connection_errors: Vec<ConnectionError>,
        last_anomaly: Option<Anomaly>,
    },
}

/// Issues outbound attempts; owns the shared HTTP client.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    /// Build a forwarder with per-attempt timeouts from config.
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Try each candidate in order until one returns a JSON body.
    pub async fn forward(
        &self,
        candidates: &[String],
        payload: &GenerationRequest,
    ) -> ForwardReply {
        let mut connection_errors = Vec::new();
        let mut last_anomaly: Option<Anomaly> = None;

        for url in candidates {
            match self.attempt(url, payload).await {
                AttemptOutcome::Success { status, body } => {
                    tracing::debug!(url = %url, status, "Upstream returned JSON");
                    return ForwardReply::Relay {
                        status,
                        body,
                        connection_errors,
                    };
                }
                AttemptOutcome::NonJsonAnomaly(anomaly) => {
                    tracing::warn!(
                        url = %url,
                        status = anomaly.status,
                        "Upstream returned non-JSON body, trying next candidate"
                    );
                    last_anomaly = Some(anomaly);
                }
                AttemptOutcome::ConnectionFailure { url, error } => {
                    tracing::warn!(
                        url = %url,
                        error = %error,
                        "Upstream unreachable, trying next candidate"
                    );
                    connection_errors.push(ConnectionError {
                        upstream_url: url,
                        error,
                    });
                }
            }
        }

        ForwardReply::Exhausted {
            attempted_urls: candidates.to_vec(),
            connection_errors,
            last_anomaly,
        }
    }

    /// One POST against one candidate.
    ///
    /// `Cache-Control: no-store` rules out any intermediary serving a
    /// stale reply; every attempt hits the network.
    async fn attempt(&self, url: &str, payload: &GenerationRequest) -> AttemptOutcome {
        let response = self
            .client
            .post(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .json(payload)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                return AttemptOutcome::ConnectionFailure {
                    url: url.to_string(),
                    error: e.to_string(),
                }
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => classify_reply(url, status, &body),
            // The connection dropped mid-body; no complete reply exists.
            Err(e) => AttemptOutcome::ConnectionFailure {
                url: url.to_string(),
                error: e.to_string(),
            },
        }
    }
}
