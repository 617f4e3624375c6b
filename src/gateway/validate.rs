//! Pre-forwarding payload validation.
//!
//! Runs before any network call. Only the builder and general modes have
//! a structural precondition: a clarification round that was sent back
//! must contain at least one usable answer.

use crate::gateway::error::GatewayError;
use crate::gateway::request::GenerationRequest;

/// Validate mode-specific preconditions on the inbound payload.
///
/// Absence of `previous_answers` is not an error; it signals the first
/// pass, before any clarification round has happened.
pub fn validate_request(request: &GenerationRequest) -> Result<(), GatewayError> {
    if !request.mode.expects_context_answers() {
        return Ok(());
    }

    let Some(answers) = request
        .context_answers
        .as_ref()
        .and_then(|context| context.previous_answers.as_ref())
    else {
        return Ok(());
    };

    if answers.values().any(|answer| !answer.trim().is_empty()) {
        return Ok(());
    }

    Err(GatewayError::Validation(
        "previous_answers must contain at least one non-empty answer".to_string(),
    ))
}
