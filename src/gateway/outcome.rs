//! Per-candidate attempt classification.
//!
//! # Responsibilities
//! - Decide whether an upstream reply is forwardable JSON or a non-JSON
//!   anomaly
//! - Represent connection-level failures as data
//!
//! # Design Decisions
//! - JSON parsing happens exactly once per body; a parse failure is
//!   converted, never propagated
//! - Retry and fallback belong to the forwarder, not here

use serde_json::Value;

/// Upper bound on the anomaly body preview, in characters.
pub const BODY_PREVIEW_CHARS: usize = 500;

/// Outcome of one delivery attempt against one candidate.
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    /// Body parsed as JSON; relay it with the upstream status as-is.
    Success { status: u16, body: Value },

    /// Upstream answered, but the body is not JSON.
    NonJsonAnomaly(Anomaly),

    /// The network call itself failed (DNS, refused, timeout).
    ConnectionFailure { url: String, error: String },
}

/// Details of a reachable upstream that produced a non-JSON body.
#[derive(Debug, Clone)]
pub struct Anomaly {
    pub status: u16,
    pub body_preview: String,
    pub url: String,
}

/// Classify a completed HTTP exchange.
///
/// A well-formed JSON error body still classifies as
/// [`AttemptOutcome::Success`]: the status code is not a failure signal
/// at this layer.
pub fn classify_reply(url: &str, status: u16, body: &str) -> AttemptOutcome {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => AttemptOutcome::Success {
            status,
            body: parsed,
        },
        Err(_) => AttemptOutcome::NonJsonAnomaly(Anomaly {
            status,
            body_preview: body.chars().take(BODY_PREVIEW_CHARS).collect(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://gw.example.com/api";

    #[test]
    fn json_body_is_success_regardless_of_status() {
        let outcome = classify_reply(URL, 500, r#"{"status":"error","message":"boom"}"#);
        match outcome {
            AttemptOutcome::Success { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body["message"], "boom");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_an_anomaly() {
        let outcome = classify_reply(URL, 200, "<html>maintenance page</html>");
        match outcome {
            AttemptOutcome::NonJsonAnomaly(anomaly) => {
                assert_eq!(anomaly.status, 200);
                assert_eq!(anomaly.url, URL);
                assert!(anomaly.body_preview.contains("maintenance"));
            }
            other => panic!("expected anomaly, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_is_an_anomaly() {
        assert!(matches!(
            classify_reply(URL, 204, ""),
            AttemptOutcome::NonJsonAnomaly(_)
        ));
    }

    #[test]
    fn preview_is_truncated_by_characters() {
        let body = "é".repeat(600);
        let AttemptOutcome::NonJsonAnomaly(anomaly) = classify_reply(URL, 200, &body) else {
            panic!("expected anomaly");
        };
        assert_eq!(anomaly.body_preview.chars().count(), BODY_PREVIEW_CHARS);
    }

    #[test]
    fn short_body_is_kept_whole() {
        let AttemptOutcome::NonJsonAnomaly(anomaly) = classify_reply(URL, 502, "bad gateway") else {
            panic!("expected anomaly");
        };
        assert_eq!(anomaly.body_preview, "bad gateway");
    }
}
