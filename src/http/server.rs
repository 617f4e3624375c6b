//! HTTP server setup and the generate handler.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Parse and validate the inbound payload
//! - Drive the forwarder and shape the terminal response

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::candidates::resolve_candidates;
use crate::config::schema::GatewayConfig;
use crate::gateway::envelope::ErrorEnvelope;
use crate::gateway::forward::{ForwardReply, Forwarder};
use crate::gateway::request::GenerationRequest;
use crate::gateway::validate::validate_request;
use crate::gateway::GatewayError;
use crate::http::request::{UuidRequestId, X_REQUEST_ID};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub forwarder: Forwarder,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let forwarder = Forwarder::new(&config.timeouts)?;
        let state = AppState {
            config: Arc::new(config.clone()),
            forwarder,
        };
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/generate", post(generate_handler))
            .route("/healthz", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Handler for `POST /api/generate`.
///
/// Parses the body itself so a malformed inbound payload maps to the
/// internal-error envelope rather than an extractor rejection.
async fn generate_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let payload: GenerationRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Unparseable inbound payload");
            return GatewayError::Internal(e.to_string()).into_response();
        }
    };

    if let Err(e) = validate_request(&payload) {
        tracing::info!(request_id = %request_id, mode = ?payload.mode, "Rejected by validation");
        return e.into_response();
    }

    let candidates = resolve_candidates(&state.config.upstream);
    tracing::debug!(
        request_id = %request_id,
        mode = ?payload.mode,
        candidate_count = candidates.len(),
        "Forwarding generation request"
    );

    match state.forwarder.forward(&candidates, &payload).await {
        ForwardReply::Relay {
            status,
            body,
            connection_errors,
        } => {
            if !connection_errors.is_empty() {
                tracing::warn!(
                    request_id = %request_id,
                    failed_candidates = connection_errors.len(),
                    "Candidates were unreachable before one answered"
                );
            }
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(body)).into_response()
        }
        ForwardReply::Exhausted {
            attempted_urls,
            connection_errors,
            last_anomaly,
        } => {
            tracing::error!(
                request_id = %request_id,
                attempted = attempted_urls.len(),
                "All upstream candidates failed"
            );
            let envelope = ErrorEnvelope::exhausted(attempted_urls, connection_errors, last_anomaly);
            (StatusCode::BAD_GATEWAY, Json(envelope)).into_response()
        }
    }
}

/// Liveness probe.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
