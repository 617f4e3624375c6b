//! Request ID plumbing.
//!
//! A UUIDv4 request id is attached as early as possible and propagated
//! to the response, so one id correlates client, gateway, and upstream
//! log lines.

use axum::http::Request;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUIDv4 for requests that arrive without an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}
