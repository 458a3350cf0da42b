//! Document loading and decoding.
//!
//! Decoding is the only place the pipeline can fail: everything after it
//! works on valid text and is best-effort.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChunkerError, Result};

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Character encoding of an input document.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// Strict UTF-8; invalid bytes are an error.
    #[default]
    Utf8,

    /// ISO-8859-1; every byte maps to one character.
    Latin1,
}

/// Decode raw document bytes into text.
///
/// A leading UTF-8 byte order mark is dropped.
///
/// # Examples
/// ```
/// use peraturan_chunker::document::{decode_document, InputEncoding};
///
/// assert_eq!(decode_document(b"Pasal 1", InputEncoding::Utf8).unwrap(), "Pasal 1");
/// assert!(decode_document(&[0x50, 0xFF], InputEncoding::Utf8).is_err());
/// assert_eq!(decode_document(&[0x50, 0xE9], InputEncoding::Latin1).unwrap(), "P\u{e9}");
/// ```
pub fn decode_document(bytes: &[u8], encoding: InputEncoding) -> Result<String> {
    match encoding {
        InputEncoding::Utf8 => {
            let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            std::str::from_utf8(bytes)
                .map(str::to_string)
                .map_err(|e| ChunkerError::Encoding {
                    offset: e.valid_up_to(),
                })
        }
        InputEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Read and decode a document file.
pub fn read_document(path: &Path, encoding: InputEncoding) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let text = decode_document(&bytes, encoding)?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "read document"
    );
    Ok(text)
}
