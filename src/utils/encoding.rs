//! Encoding resolution and strict file decoding.
//!
//! This module provides file reading that handles:
//! - WHATWG encoding labels (`utf-8`, `latin1`, `utf-16le`, `shift_jis`, ...)
//! - BOM stripping for the chosen encoding
//! - `auto` detection: BOM, then strict UTF-8, then chardetng
//! - Malformed input reported as an error rather than replaced

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

use crate::error::{Error, Result};

/// Label that asks for the encoding to be detected from the file contents.
pub const AUTO_DETECT: &str = "auto";

/// Resolve an encoding label. `None` means UTF-8.
///
/// `auto` cannot be resolved without content and is rejected here; use
/// [`read_text`] for detection.
pub fn resolve_encoding(label: Option<&str>) -> Result<&'static Encoding> {
    match label.map(str::trim) {
        None => Ok(UTF_8),
        Some(name) => Encoding::for_label(name.as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(name.to_string())),
    }
}

/// Detect the encoding of `bytes`.
///
/// Strategy:
/// 1. Check for BOM markers first (most reliable)
/// 2. Try strict UTF-8 decoding of the whole input
/// 3. Fall back to chardetng for non-UTF-8 content
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, false)
}

/// Read `path` and decode it as `encoding` (a label, `auto`, or `None` for UTF-8).
///
/// The label is checked before the file is touched. A BOM matching the
/// chosen encoding is stripped, as is a UTF-8 BOM in front of a single-byte
/// encoding.
pub fn read_text(path: &Path, encoding: Option<&str>) -> Result<String> {
    let requested = match encoding {
        Some(label) if label.trim().eq_ignore_ascii_case(AUTO_DETECT) => None,
        other => Some(resolve_encoding(other)?),
    };

    let bytes =
        std::fs::read(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;

    let encoding = requested.unwrap_or_else(|| detect_encoding(&bytes));
    tracing::debug!(path = %path.display(), encoding = encoding.name(), "decoding file");

    decode_strict(&bytes, encoding)
        .ok_or_else(|| Error::Decode { path: path.to_path_buf(), encoding: encoding.name() })
}

fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let body = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len))
            if bom_encoding == encoding || (bom_encoding == UTF_8 && encoding.is_single_byte()) =>
        {
            &bytes[bom_len..]
        }
        _ => bytes,
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_resolve_default_is_utf8() {
        assert_eq!(resolve_encoding(None).unwrap(), UTF_8);
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(resolve_encoding(Some("utf8")).unwrap(), UTF_8);
        assert_eq!(resolve_encoding(Some(" UTF-8 ")).unwrap(), UTF_8);
        assert_eq!(resolve_encoding(Some("latin1")).unwrap().name(), "windows-1252");
    }

    #[test]
    fn test_resolve_unknown_label() {
        let err = resolve_encoding(Some("klingon")).unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(ref name) if name == "klingon"));
    }

    #[test]
    fn test_read_utf8() {
        let file = temp_file("A=🚀\n".as_bytes());
        assert_eq!(read_text(file.path(), None).unwrap(), "A=🚀\n");
    }

    #[test]
    fn test_read_strips_utf8_bom() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"A=1");
        let file = temp_file(&bytes);
        assert_eq!(read_text(file.path(), None).unwrap(), "A=1");
    }

    #[test]
    fn test_read_invalid_utf8_is_error() {
        let file = temp_file(&[b'A', b'=', 0xff, 0xfe, 0xfd]);
        let err = read_text(file.path(), None).unwrap_err();
        assert!(matches!(err, Error::Decode { encoding: "UTF-8", .. }));
    }

    #[test]
    fn test_read_latin1() {
        let file = temp_file(&[b'A', b'=', b'c', b'a', b'f', 0xe9]);
        assert_eq!(read_text(file.path(), Some("latin1")).unwrap(), "A=café");
    }

    #[test]
    fn test_read_utf16le_with_bom() {
        let mut bytes = vec![0xff, 0xfe];
        for unit in "A=1".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let file = temp_file(&bytes);
        assert_eq!(read_text(file.path(), Some("utf-16le")).unwrap(), "A=1");
        assert_eq!(read_text(file.path(), Some("auto")).unwrap(), "A=1");
    }

    #[test]
    fn test_auto_detects_utf8() {
        let file = temp_file("A=héllo".as_bytes());
        assert_eq!(read_text(file.path(), Some(AUTO_DETECT)).unwrap(), "A=héllo");
    }

    #[test]
    fn test_auto_detects_non_utf8_after_long_ascii_prefix() {
        let mut bytes = Vec::new();
        for i in 0..3000 {
            bytes.extend_from_slice(format!("K{}=v\n", i).as_bytes());
        }
        assert!(bytes.len() > 8192);
        bytes.extend_from_slice(&[b'N', b'=', b'n', 0xe3, b'o', b'\n']);
        let file = temp_file(&bytes);

        let text = read_text(file.path(), Some(AUTO_DETECT)).unwrap();
        assert!(text.starts_with("K0=v\n"));
        assert!(text.contains("\nN=n"));
        assert_ne!(detect_encoding(&bytes), UTF_8);
    }

    #[test]
    fn test_utf8_bom_stripped_for_single_byte_label() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice(b"A=1");
        let file = temp_file(&bytes);
        assert_eq!(read_text(file.path(), Some("latin1")).unwrap(), "A=1");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_text(&dir.path().join("nope.env"), None).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_unknown_label_checked_before_reading() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_text(&dir.path().join("nope.env"), Some("klingon")).unwrap_err();
        assert!(matches!(err, Error::UnknownEncoding(_)));
    }
}
