//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind + accept loop)
//!     → connection.rs (id, raw-takeover capability)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - No connection limit and no admission control; one task per connection
//! - Raw takeover is an explicit capability that fails closed, not an
//!   assumption baked into the handler
//! - The socket is released on every exit path, success or failure

pub mod connection;
pub mod listener;

pub use connection::{Connection, ConnectionId, HijackError, RawConnection};
pub use listener::{Listener, ListenerError};
