//! Connection lifecycle and raw takeover.
//!
//! # Responsibilities
//! - Generate unique connection IDs for tracing
//! - Grant exclusive low-level socket access exactly once per connection
//! - Keep a structured error path available when takeover fails

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Global atomic counter for connection IDs.
/// Relaxed ordering is sufficient since we only need uniqueness.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique connection ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Error type for raw connection takeover.
#[derive(Debug, thiserror::Error)]
pub enum HijackError {
    /// The transport cannot grant exclusive low-level access
    /// (already taken over, or no raw handle remains).
    #[error("connection does not support raw takeover")]
    Unsupported,
}

/// An accepted connection, prior to takeover.
///
/// Holds the socket until either the handler hijacks it (raw payload path)
/// or falls back to the structured error path. The socket closes when the
/// last holder drops, on every exit path.
#[derive(Debug)]
pub struct Connection {
    id: ConnectionId,
    peer: SocketAddr,
    stream: Option<TcpStream>,
}

impl Connection {
    /// Wrap an accepted TCP stream.
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self {
            id: ConnectionId::new(),
            peer,
            stream: Some(stream),
        }
    }

    /// Get this connection's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Get the peer address.
    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Borrow the underlying stream for reading the request head.
    /// Returns `None` once the connection has been hijacked.
    pub fn stream_mut(&mut self) -> Option<&mut TcpStream> {
        self.stream.as_mut()
    }

    /// Take exclusive low-level access to the socket.
    ///
    /// Fails closed with [`HijackError::Unsupported`] if no raw handle can
    /// be granted, leaving the structured error path on `self` intact when
    /// the stream is still held elsewhere.
    pub fn try_hijack(&mut self) -> Result<RawConnection, HijackError> {
        match self.stream.take() {
            Some(stream) => Ok(RawConnection {
                id: self.id,
                stream,
            }),
            None => Err(HijackError::Unsupported),
        }
    }

    /// Best-effort structured error response, for when takeover fails.
    ///
    /// Writes a minimal framed HTTP response if the socket is still
    /// available; errors here are absorbed, there is nothing left to tell
    /// the client.
    pub async fn respond_error(&mut self, status: u16, reason: &str, body: &str) {
        let Some(stream) = self.stream.as_mut() else {
            tracing::debug!(
                connection_id = %self.id,
                "No socket left for structured error response"
            );
            return;
        };
        if let Err(e) = crate::http::response::write_error(stream, status, reason, body).await {
            tracing::debug!(
                connection_id = %self.id,
                error = %e,
                "Failed to write structured error response"
            );
        }
        let _ = stream.shutdown().await;
    }
}

/// Exclusive low-level handle to a hijacked socket.
///
/// Whatever is written here goes on the wire verbatim; no status line,
/// no headers, no framing. Dropping the handle closes the socket.
#[derive(Debug)]
pub struct RawConnection {
    id: ConnectionId,
    stream: TcpStream,
}

impl RawConnection {
    /// Get the owning connection's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Write the payload bytes exactly as stored, then close the write side.
    pub async fn send(&mut self, payload: &[u8]) -> std::io::Result<()> {
        self.stream.write_all(payload).await?;
        self.stream.shutdown().await
    }
}
