//! Gateway error taxonomy.
//!
//! Per-candidate failures are data ([`crate::gateway::outcome`]), not
//! errors; only terminal conditions that end the request before or
//! instead of forwarding live here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::gateway::envelope::ErrorEnvelope;

/// Terminal errors produced before or instead of forwarding.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Inbound payload violates a mode precondition; nothing was forwarded.
    #[error("{0}")]
    Validation(String),

    /// Inbound request could not be processed at all (e.g. malformed JSON).
    #[error("Failed to process /api/generate request: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorEnvelope::validation(message)),
            )
                .into_response(),
            GatewayError::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorEnvelope::internal(details)),
            )
                .into_response(),
        }
    }
}
