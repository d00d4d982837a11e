//! Locating and splitting the authority of a URL by hand.
//!
//! General URL parsers rewrite or reject non-ASCII hosts, so the authority is
//! cut out of the raw string here and its host is IDN-encoded in place before
//! anything else looks at the URL.

use std::borrow::Cow;
use std::ops::Range;

use crate::core::codec::{is_ascii_host, to_ascii};
use crate::url::normalizer::is_ip_literal;
use crate::url::splitter::split_url;

/// Raw parts of an authority, borrowed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityParts<'a> {
    /// Everything before the last `@`
    pub user_info: Option<&'a str>,
    /// User info up to the first `:`
    pub user: Option<&'a str>,
    /// User info after the first `:`
    pub password: Option<&'a str>,
    /// The host, never empty
    pub host: &'a str,
    /// Byte range of the host within the authority
    pub host_range: Range<usize>,
    /// Port digits, never empty
    pub port: Option<&'a str>,
}

/// The authority of `url`: the text between `//` and the next `/`, `?`, `#`
/// or the end of the string.
///
/// `None` if the URL has no `//` after its optional scheme.
pub fn authority_from_url(url: &str) -> Option<&str> {
    split_url(url).authority
}

/// Split an authority into user info, host and port.
///
/// The port is the text after the last `:` that follows any `]`, provided it
/// is all digits. An empty port is dropped together with its colon. Returns
/// `None` if no host is left.
pub fn split_authority(authority: &str) -> Option<AuthorityParts<'_>> {
    // User info ends at the last `@`, the host may not contain one
    let (user_info, host_start) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), at + 1),
        None => (None, 0),
    };

    let (user, password) = match user_info {
        Some(info) => match info.split_once(':') {
            Some((user, password)) => (Some(user), Some(password)),
            None => (Some(info), None),
        },
        None => (None, None),
    };

    // Look for the port only after an IPv6 literal
    let host_and_port = &authority[host_start..];
    let bracket_end = host_and_port.rfind(']').map_or(0, |i| i + 1);

    let (host, port) = match host_and_port[bracket_end..].rfind(':') {
        Some(colon) => {
            let colon = bracket_end + colon;
            let digits = &host_and_port[colon + 1..];

            // `host:` drops the colon, `host:8o` keeps it in the host
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                let port = (!digits.is_empty()).then_some(digits);
                (&host_and_port[..colon], port)
            } else {
                (host_and_port, None)
            }
        }
        None => (host_and_port, None),
    };

    if host.is_empty() {
        return None;
    }

    Some(AuthorityParts {
        user_info,
        user,
        password,
        host,
        host_range: host_start..host_start + host.len(),
        port,
    })
}

/// IDN-encode the host of `url` in place, leaving every other byte as is.
///
/// URLs without an authority, with an ASCII host or with an IP literal are
/// returned unchanged, and so are hosts the IDNA conversion rejects; host
/// validation reports those later.
pub fn encode_idn_host_in_url(url: &str) -> Cow<'_, str> {
    let raw = split_url(url);
    let Some(parts) = raw.authority.and_then(split_authority) else {
        return Cow::Borrowed(url);
    };

    if is_ascii_host(parts.host) || is_ip_literal(parts.host) {
        return Cow::Borrowed(url);
    }

    let encoded = match to_ascii(parts.host) {
        Ok(encoded) => encoded,
        Err(err) => {
            tracing::debug!(host = parts.host, error = %err, "host left unencoded");
            return Cow::Borrowed(url);
        }
    };

    // Splice the encoded host over the original host bytes
    let start = raw.authority_start + parts.host_range.start;
    let end = raw.authority_start + parts.host_range.end;
    tracing::trace!(from = parts.host, to = %encoded, "encoded IDN host");

    let mut rewritten = String::with_capacity(url.len() + encoded.len());
    rewritten.push_str(&url[..start]);
    rewritten.push_str(&encoded);
    rewritten.push_str(&url[end..]);

    Cow::Owned(rewritten)
}
