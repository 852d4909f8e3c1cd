//! Text/binary decoding policy for entry content.
//!
//! Entry bytes are decoded as UTF-8 text when possible. Bytes that are not
//! valid UTF-8 degrade to a sentinel string starting with
//! [`BINARY_FILE_MARKER`] instead of failing: the search engine uses the
//! marker to skip binary content silently, and a viewer uses it to render
//! a placeholder instead of code. Decoding itself never errors; only a
//! missing path does.

use async_trait::async_trait;

use crate::error::Result;
use crate::loader::LoadedArchive;

/// Fixed prefix of the sentinel returned for undecodable content.
pub const BINARY_FILE_MARKER: &str = "[binary file]";

/// Decodes entry bytes as text, falling back to the binary sentinel.
///
/// A leading UTF-8 BOM is stripped from decoded text.
pub fn decode_entry_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
        Err(_) => format!("{BINARY_FILE_MARKER} {} bytes", bytes.len()),
    }
}

/// Whether decoded content is the binary sentinel rather than real text.
pub fn is_binary_sentinel(content: &str) -> bool {
    content.starts_with(BINARY_FILE_MARKER)
}

/// Asynchronous access to an entry's decoded text content.
///
/// Implementations honor the sentinel convention of this module: content
/// that cannot be decoded as text is returned as a sentinel string, and
/// only a missing path fails. Each read is a single attempt; there are no
/// retries.
#[async_trait]
pub trait ContentReader: Send + Sync {
    async fn read_text(&self, path: &str) -> Result<String>;
}

#[async_trait]
impl ContentReader for LoadedArchive {
    async fn read_text(&self, path: &str) -> Result<String> {
        let bytes = self.read_entry(path)?;
        Ok(decode_entry_text(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchiveError;
    use crate::test_support::build_zip;

    #[test]
    fn decodes_utf8_text() {
        assert_eq!(decode_entry_text(b"hello world"), "hello world");
        assert_eq!(decode_entry_text("héllo ✓".as_bytes()), "héllo ✓");
    }

    #[test]
    fn strips_leading_bom() {
        assert_eq!(decode_entry_text(b"\xef\xbb\xbfhello"), "hello");
    }

    #[test]
    fn invalid_utf8_yields_sentinel() {
        let decoded = decode_entry_text(&[0x00, 0xff, 0xfe, 0x01]);
        assert!(decoded.starts_with(BINARY_FILE_MARKER));
        assert!(is_binary_sentinel(&decoded));
    }

    #[test]
    fn text_is_not_sentinel() {
        assert!(!is_binary_sentinel("plain text"));
        assert!(!is_binary_sentinel(""));
    }

    #[tokio::test]
    async fn archive_reader_returns_text() {
        let bytes = build_zip(&[("a.txt", Some(b"content"))]);
        let archive = crate::loader::LoadedArchive::from_bytes(bytes).unwrap();

        assert_eq!(archive.read_text("a.txt").await.unwrap(), "content");
    }

    #[tokio::test]
    async fn archive_reader_returns_sentinel_for_binary() {
        let bytes = build_zip(&[("blob.bin", Some(&[0xff, 0xfe, 0x00, 0x01]))]);
        let archive = crate::loader::LoadedArchive::from_bytes(bytes).unwrap();

        let content = archive.read_text("blob.bin").await.unwrap();
        assert!(is_binary_sentinel(&content));
    }

    #[tokio::test]
    async fn archive_reader_missing_path_fails() {
        let bytes = build_zip(&[("a.txt", Some(b"content"))]);
        let archive = crate::loader::LoadedArchive::from_bytes(bytes).unwrap();

        assert!(matches!(
            archive.read_text("missing.txt").await,
            Err(ArchiveError::EntryNotFound(_))
        ));
    }
}
