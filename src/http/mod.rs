//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → request.rs (read + parse request head: method, path, Host)
//!     → [routing layer picks the action]
//!     → server.rs (payload selection, connection takeover, raw write)
//!     → response.rs (structured error path, only if takeover fails)
//! ```
//!
//! The happy path deliberately bypasses structured response writing: the
//! selected payload goes onto the hijacked socket byte-for-byte.

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestError, RequestHead};
pub use server::{HttpServer, FALLBACK_PAYLOAD};
