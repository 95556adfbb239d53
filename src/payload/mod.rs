//! Reply payload subsystem.
//!
//! # Data Flow
//! ```text
//! reply.txt (fixed relative filename)
//!     → loader.rs (metadata-sized full read at startup)
//!     → Bytes (immutable, cheaply cloned into every handler)
//! ```
//!
//! # Design Decisions
//! - Loaded exactly once, before the listener starts accepting
//! - A missing or unreadable file degrades to an empty buffer, never fatal
//! - A short read is a hard error rather than a buffer with undefined tail

pub mod loader;

pub use loader::{load_reply, PayloadError, REPLY_FILE};
