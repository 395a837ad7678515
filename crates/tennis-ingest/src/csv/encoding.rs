//! Text decoding for source archives.
//!
//! Most files are UTF-8. Older player and match files carry Latin-1 names, so
//! invalid UTF-8 is decoded again as Windows-1252, which accepts every byte.

use encoding_rs::WINDOWS_1252;

/// Encoding a file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Windows1252,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes raw file bytes, stripping a leading UTF-8 byte order mark.
pub fn decode_bytes(bytes: Vec<u8>) -> (String, TextEncoding) {
    let bytes = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };
    match String::from_utf8(bytes) {
        Ok(text) => (text, TextEncoding::Utf8),
        Err(err) => {
            let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(err.as_bytes());
            (decoded.into_owned(), TextEncoding::Windows1252)
        }
    }
}
