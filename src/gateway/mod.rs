//! The inbound request gateway.
//!
//! # Data Flow
//! ```text
//! POST /api/generate
//!     → request.rs (typed payload)
//!     → validate.rs (mode preconditions, no network yet)
//!     → config::candidates (ordered upstream list, computed per request)
//!     → forward.rs (sequential attempts)
//!         → outcome.rs (classify each reply)
//!     → envelope.rs (relayed body, or synthesized error)
//! ```
//!
//! # Design Decisions
//! - Exactly one terminal envelope per inbound request
//! - Per-candidate failures are data, not errors; nothing is thrown
//!   past the forwarder boundary

pub mod envelope;
pub mod error;
pub mod forward;
pub mod outcome;
pub mod request;
pub mod validate;

pub use error::GatewayError;
pub use forward::{ForwardReply, Forwarder};
pub use request::{ContextAnswers, GenerationRequest, Mode};
