//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process arguments
//!     → args.rs (parse optional port override)
//!     → ServerConfig (validated, immutable)
//!     → shared into the server at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once constructed; there is no reload
//! - All fields have defaults so the server runs with zero arguments
//! - The reply file name is a program constant, not configuration

pub mod args;
pub mod schema;

pub use args::Cli;
pub use schema::ListenerConfig;
pub use schema::ServerConfig;
