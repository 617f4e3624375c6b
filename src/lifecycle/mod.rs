//! Process lifecycle coordination.
//!
//! # Design Decisions
//! - Shutdown is a broadcast: every long-running task subscribes and
//!   winds down on its own
//! - Ctrl+C handling lives in the binary, not the library

pub mod shutdown;

pub use shutdown::Shutdown;
