//! Request head reading and parsing.
//!
//! # Responsibilities
//! - Read the request head off the socket, bounded, up to the blank line
//! - Parse the request line into method and path
//! - Extract the Host header for diagnostics
//!
//! # Design Decisions
//! - Only the head is consumed; the body is irrelevant to dispatch and is
//!   never read
//! - No path normalization, no query splitting; the raw request target is
//!   matched as-is
//! - A malformed head is a recoverable error: the caller answers it with
//!   the fallback payload rather than dropping the connection

use tokio::io::{AsyncRead, AsyncReadExt};

/// Upper bound on the request head we are willing to buffer.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Error type for request head handling.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The head is not a parseable HTTP/1.x request head.
    #[error("malformed request head")]
    Malformed,

    /// The peer sent more head bytes than we accept.
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    TooLarge,

    /// The socket failed while reading.
    #[error("connection error while reading request: {0}")]
    Io(#[from] std::io::Error),
}

/// The parsed request head: just enough to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    /// Request method, verbatim (case-sensitive).
    pub method: String,
    /// Request target path, verbatim (no normalization).
    pub path: String,
    /// Host header value, if the client sent one.
    pub host: Option<String>,
}

impl RequestHead {
    /// Parse a complete request head (request line + header lines).
    pub fn parse(head: &str) -> Result<Self, RequestError> {
        let mut lines = head.split("\r\n");
        let request_line = lines.next().ok_or(RequestError::Malformed)?;

        let mut parts = request_line.split(' ');
        let method = parts.next().filter(|m| !m.is_empty());
        let path = parts.next().filter(|p| !p.is_empty());
        let version = parts.next();
        let (Some(method), Some(path), Some(version)) = (method, path, version) else {
            return Err(RequestError::Malformed);
        };
        if parts.next().is_some() || !version.starts_with("HTTP/") {
            return Err(RequestError::Malformed);
        }

        let host = lines
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("host"))
            .map(|(_, value)| value.trim().to_string());

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
            host,
        })
    }
}

/// Read and parse a request head from the stream.
///
/// Reads until the blank line terminating the head, EOF, or the
/// [`MAX_HEAD_BYTES`] cap, whichever comes first.
pub async fn read_head<R>(stream: &mut R) -> Result<RequestHead, RequestError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        if let Some(pos) = find_head_end(&buf) {
            break pos;
        }
        if buf.len() >= MAX_HEAD_BYTES {
            return Err(RequestError::TooLarge);
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            // EOF before the blank line: parse what we have, it is most
            // likely malformed and will get the fallback payload.
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = std::str::from_utf8(&buf[..head_end]).map_err(|_| RequestError::Malformed)?;
    RequestHead::parse(head)
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
