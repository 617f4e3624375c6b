//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → candidates.rs (per-request upstream candidate resolution)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Candidate resolution is a pure function of the config value; the
//!   environment is read exactly once at load time

pub mod candidates;
pub mod loader;
pub mod schema;
pub mod validation;

pub use candidates::{resolve_candidates, LOCAL_EMULATOR_URL, PRODUCTION_API_URL};
pub use schema::GatewayConfig;
pub use schema::UpstreamConfig;
