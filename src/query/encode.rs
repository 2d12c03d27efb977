//! Canonical percent-encoding for query parameter values.
//!
//! Only the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`) passes through untouched; every
//! other byte becomes `%XX` with uppercase hex. Spaces are rendered as `%20`, never `+`, since
//! the endpoint re-derives the canonical string with the same rule when verifying signatures.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes that must be escaped: everything except ASCII alphanumerics and `-_.~`.
pub const QUERY_ESCAPE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encodes `value` for inclusion in a canonical query string.
///
/// Returns the input unchanged (borrowed) when no byte needs escaping.
pub fn encode(value: &str) -> Cow<'_, str> {
	utf8_percent_encode(value, QUERY_ESCAPE_SET).into()
}
