//! Byte -> text decoding.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::ParseError;

/// UTF-8 BOM: EF BB BF
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decode UTF-8 bytes, removing a leading BOM and replacing malformed sequences with U+FFFD.
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(bytes);
    text
}

/// Decode UTF-8 bytes, removing a leading BOM and failing on malformed sequences.
pub fn decode_strict(bytes: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    UTF_8
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| ParseError::Decode {
            valid_up_to: (bytes.len() - body.len()) + Encoding::utf8_valid_up_to(body),
        })
}
