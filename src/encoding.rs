//! Charset sniffing for raw page bytes.
//!
//! Rendered pages normally arrive as UTF-8, but saved files and some CMS
//! exports still declare legacy charsets. The declaration is read from the
//! first kilobyte and the bytes are decoded lossily before parsing.

use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

use crate::dom::{self, Document};
use crate::patterns::META_CHARSET;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Encoding declared in the document head, falling back to UTF-8.
#[must_use]
pub fn sniff_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(bytes);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes);
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded
}

/// Decode and parse page bytes with the default parser.
#[must_use]
pub fn parse_bytes(bytes: &[u8]) -> Document {
    dom::parse(&decode(bytes))
}
