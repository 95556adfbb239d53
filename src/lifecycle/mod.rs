//! Process lifecycle subsystem.
//!
//! # Design Decisions
//! - A broadcast channel carries the shutdown signal; the accept loop and
//!   integration tests subscribe to the same channel
//! - Steady-state serving never triggers shutdown; only Ctrl+C (or a test)
//!   does

pub mod shutdown;

pub use shutdown::Shutdown;
