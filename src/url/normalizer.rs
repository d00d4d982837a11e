//! Host normalization and validation.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::core::codec::{is_ascii_host, to_ascii};
use crate::error::UrlError;

/// Normalize a host: IP literals are only lowercased, names go through
/// [`normalize_dns_name`].
///
/// Accepts bracketed IPv6 (`[::1]`), IPvFuture (`[v1.x]`) and dotted IPv4.
pub fn normalize_host(host: &str) -> Result<String, UrlError> {
    let host = host.trim();

    if is_ip_literal(host) {
        return Ok(host.to_ascii_lowercase());
    }

    normalize_dns_name(host)
}

/// Normalize a host name.
///
/// This function:
/// 1. Applies IDNA conversion if the name has characters outside `[a-zA-Z0-9.-]`
/// 2. Converts to lowercase
/// 3. Validates the labels with [`validate_host`]
pub fn normalize_dns_name(name: &str) -> Result<String, UrlError> {
    let name = name.trim();

    let normalized = if is_ascii_host(name) {
        name.to_ascii_lowercase()
    } else {
        to_ascii(name)?.to_ascii_lowercase()
    };

    validate_host(&normalized)?;

    Ok(normalized)
}

/// Validate a host name made of dot-separated labels.
///
/// Every label must pass [`validate_dns_label`]. A single trailing dot is
/// allowed (`example.com.`).
pub fn validate_host(host: &str) -> Result<(), UrlError> {
    let name = host.strip_suffix('.').unwrap_or(host);

    if name.is_empty() {
        return Err(UrlError::InvalidHost(host.to_string()));
    }

    for label in name.split('.') {
        validate_dns_label(label).map_err(|_| UrlError::InvalidHost(host.to_string()))?;
    }

    Ok(())
}

/// Validate a single label: letters, digits and hyphens, starting and ending
/// with a letter or digit.
pub fn validate_dns_label(label: &str) -> Result<(), UrlError> {
    let bytes = label.as_bytes();

    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return Err(UrlError::InvalidHost(label.to_string()));
    };

    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return Err(UrlError::InvalidHost(label.to_string()));
    }

    if !bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-') {
        return Err(UrlError::InvalidHost(label.to_string()));
    }

    Ok(())
}

/// Whether `host` is an IP literal: `[IPv6]`, `[vX.future]` or dotted IPv4.
pub fn is_ip_literal(host: &str) -> bool {
    if let Some(inner) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return inner.parse::<Ipv6Addr>().is_ok() || is_ip_future(inner);
    }

    host.parse::<Ipv4Addr>().is_ok()
}

/// `IPvFuture = "v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`
fn is_ip_future(literal: &str) -> bool {
    let Some(rest) = literal.strip_prefix(['v', 'V']) else {
        return false;
    };
    let Some((version, address)) = rest.split_once('.') else {
        return false;
    };

    !version.is_empty()
        && version.bytes().all(|b| b.is_ascii_hexdigit())
        && !address.is_empty()
        && address.bytes().all(|b| {
            b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:".contains(&b)
        })
}
