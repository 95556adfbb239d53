//! Structured response writing.
//!
//! The payload path never comes through here; it goes raw onto the
//! hijacked socket. This module only covers the one case where the
//! structured channel is still the best we have: reporting a failed
//! connection takeover back to the client.

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Write a minimal framed HTTP/1.1 error response.
pub async fn write_error<W>(
    stream: &mut W,
    status: u16,
    reason: &str,
    body: &str,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_framed_error() {
        let mut buf = Vec::new();
        write_error(&mut buf, 500, "Internal Server Error", "takeover unsupported")
            .await
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("HTTP/1.1 500 Internal Server Error\r\n"));
        assert!(text.contains("Content-Length: 20\r\n"));
        assert!(text.ends_with("\r\n\r\ntakeover unsupported"));
    }
}
