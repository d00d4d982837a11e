//! Percent-encoding against the RFC 3986 character classes of each component.
//!
//! A [`AsciiSet`] lists the bytes that must be escaped, so each class below is
//! built by removing its allowed characters from [`NON_ALPHANUMERIC`]. Bytes
//! outside ASCII are always escaped, one `%XX` per UTF-8 byte.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// `unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"`
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `unreserved / sub-delims`
const UNRESERVED_SUB_DELIMS: &AsciiSet = &UNRESERVED
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// `pchar = unreserved / pct-encoded / sub-delims / ":" / "@"`
const PCHAR: &AsciiSet = &UNRESERVED_SUB_DELIMS.remove(b':').remove(b'@');

/// Bytes escaped in a path: anything that is not a pchar, `/` or `%`.
pub const PATH: &AsciiSet = &PCHAR.remove(b'/').remove(b'%');

/// Bytes escaped in a query. Same class as the path.
pub const QUERY: &AsciiSet = PATH;

/// Bytes escaped in a fragment: like the path, plus `?` is allowed.
pub const FRAGMENT: &AsciiSet = &PATH.remove(b'?');

/// Bytes escaped in a user name or password. `:` stays escaped because it
/// separates the two.
pub const USER_INFO: &AsciiSet = &UNRESERVED_SUB_DELIMS.remove(b'%');

/// Percent-encode every character of `input` that is not allowed by `set`.
///
/// Never fails. Literal `%` signs are only left alone if `set` allows them, so
/// run [`normalize_percent`] first to keep the result idempotent.
pub fn encode_except(input: &str, set: &'static AsciiSet) -> String {
    utf8_percent_encode(input, set).to_string()
}

/// Escape every `%` that does not start a valid `%XX` triplet as `%25`.
///
/// Valid triplets are kept verbatim, including their hex digit case.
pub fn normalize_percent(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let is_triplet = |i: usize| {
        i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
    };

    if !(0..bytes.len()).any(|i| bytes[i] == b'%' && !is_triplet(i)) {
        return Cow::Borrowed(input);
    }

    let mut normalized = String::with_capacity(input.len() + 4);
    for (i, ch) in input.char_indices() {
        if ch == '%' && !is_triplet(i) {
            normalized.push_str("%25");
        } else {
            normalized.push(ch);
        }
    }

    Cow::Owned(normalized)
}

/// Normalize stray `%` signs, then encode against `set`.
pub fn normalize_and_encode(input: &str, set: &'static AsciiSet) -> String {
    encode_except(&normalize_percent(input), set)
}
