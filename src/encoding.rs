//! Reading text files with legacy-encoding fallback.
//!
//! Long-form documents in the wild, web novel dumps especially, are not
//! reliably UTF-8. Candidate encodings are tried in a fixed priority order
//! and the first that decodes the whole file without error wins:
//!
//! 1. UTF-8
//! 2. GBK (simplified Chinese)
//! 3. Shift_JIS (Japanese)
//! 4. UTF-16 (BOM-aware; little-endian assumed when no BOM)
//! 5. Windows-1252 (the WHATWG latin1 superset)
//!
//! Windows-1252 decodes any byte sequence, so it acts as the terminal
//! fallback; [`Error::Decode`] is kept for API completeness but is not
//! reachable through this priority list. No statistical detection is done:
//! a fixed order keeps the result deterministic for a given file.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, GBK, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

use crate::{Error, Result};

/// UTF-16 LE BOM: FF FE
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
/// UTF-16 BE BOM: FE FF
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

fn try_decode(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
}

fn try_decode_utf16(bytes: &[u8]) -> Option<String> {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        try_decode(UTF_16LE, rest)
    } else if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        try_decode(UTF_16BE, rest)
    } else {
        try_decode(UTF_16LE, bytes)
    }
}

/// Decode raw bytes using the fixed encoding priority.
///
/// Returns the decoded text and the name of the encoding that matched, or
/// `None` if every candidate rejects the bytes; the Windows-1252 fallback
/// prevents that in practice.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> Option<(String, &'static str)> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes); // UTF-8 BOM

    if let Some(text) = try_decode(UTF_8, bytes) {
        return Some((text, UTF_8.name()));
    }
    if let Some(text) = try_decode(GBK, bytes) {
        return Some((text, GBK.name()));
    }
    if let Some(text) = try_decode(SHIFT_JIS, bytes) {
        return Some((text, SHIFT_JIS.name()));
    }
    if let Some(text) = try_decode_utf16(bytes) {
        return Some((text, "UTF-16"));
    }
    if let Some(text) = try_decode(WINDOWS_1252, bytes) {
        return Some((text, WINDOWS_1252.name()));
    }
    None
}

/// Read a text file, trying the supported encodings in priority order.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Decode`]
/// if no candidate encoding accepts its bytes.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    match decode_bytes(&bytes) {
        Some((text, encoding)) => {
            log::debug!("decoded {} as {encoding}", path.display());
            Ok(text)
        }
        None => Err(Error::Decode {
            path: path.to_path_buf(),
        }),
    }
}
