//! Gzip compression for processed assets.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::{self, Write};

/// Gzip-frame `content` at maximum compression.
///
/// Level 9 trades build time for the best ratio, which is the right call
/// for assets baked into a flash filesystem image.
pub fn gzip_bytes(content: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(content)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(bytes).read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_gzip_round_trip() {
        let input = b"the quick brown fox jumps over the lazy dog".repeat(10);
        let compressed = gzip_bytes(&input).unwrap();
        assert_eq!(gunzip(&compressed), input);
        assert!(compressed.len() < input.len());
    }

    #[test]
    fn test_gzip_magic_header() {
        let compressed = gzip_bytes(b"hello").unwrap();
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
    }

    #[test]
    fn test_gzip_empty_input() {
        let compressed = gzip_bytes(b"").unwrap();
        assert_eq!(gunzip(&compressed), b"");
    }
}
