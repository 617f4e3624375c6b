//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; the request id rides on every
//!   gateway event
//! - Filter comes from RUST_LOG when set, config fallback otherwise
//! - No metrics endpoint; the gateway's observable surface is its logs

pub mod logging;
