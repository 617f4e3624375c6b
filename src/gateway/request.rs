//! Inbound request payload types.
//!
//! The payload is immutable once received; each HTTP call constructs a
//! fresh value and nothing is persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Operating mode selected by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Fast,
    General,
    Builder,
    Thinking,
}

impl Mode {
    /// Modes that run a clarification round before generation.
    pub fn expects_context_answers(self) -> bool {
        matches!(self, Mode::Builder | Mode::General)
    }
}

/// Clarification answers carried over from a previous round.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ContextAnswers {
    /// Question text mapped to the user's answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_answers: Option<HashMap<String, String>>,
}

/// Payload of `POST /api/generate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationRequest {
    /// Task description to engineer a prompt for.
    pub task: String,

    /// Operating mode.
    pub mode: Mode,

    /// Present from the second builder/general round onward.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_answers: Option<ContextAnswers>,
}
