//! Forwarding gateway for the prompt engineering service.
//!
//! Accepts generation requests over HTTP, validates mode-specific
//! preconditions, and relays each request to the first upstream
//! candidate that produces a parseable JSON response. Failures are
//! classified into a stable JSON error envelope instead of leaking raw
//! network errors to the caller.

pub mod config;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use gateway::Forwarder;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
