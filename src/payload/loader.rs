//! Startup loading of the reply file.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use bytes::Bytes;

/// Fixed relative filename whose contents become the trigger reply.
pub const REPLY_FILE: &str = "reply.txt";

/// Error type for payload loading.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// Failed to open or stat the reply file.
    #[error("failed to read reply file: {0}")]
    Io(#[from] io::Error),

    /// The file reported one size but yielded fewer bytes.
    #[error("short read of reply file: expected {expected} bytes, got {read}")]
    ShortRead { expected: usize, read: usize },
}

/// Read the reply file fully into an immutable buffer.
///
/// The buffer is sized from file metadata and must be filled completely;
/// a read that ends early is an explicit [`PayloadError::ShortRead`]
/// rather than a buffer with an undefined zero tail.
pub fn load_reply(path: &Path) -> Result<Bytes, PayloadError> {
    let mut file = File::open(path)?;
    let expected = file.metadata()?.len() as usize;

    let mut buf = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        match file.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(PayloadError::ShortRead {
                    expected,
                    read: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(Bytes::from(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_file_contents_exactly() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"id\":\"chatcmpl-123\"}").unwrap();
        file.flush().unwrap();

        let reply = load_reply(file.path()).unwrap();
        assert_eq!(&reply[..], b"{\"id\":\"chatcmpl-123\"}");
    }

    #[test]
    fn empty_file_loads_as_empty_buffer() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let reply = load_reply(file.path()).unwrap();
        assert!(reply.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_reply(&dir.path().join("no-such-reply.txt")).unwrap_err();
        assert!(matches!(err, PayloadError::Io(_)));
    }
}
