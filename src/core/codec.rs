//! IDNA adapter: converts Unicode host names to their ASCII-compatible form.

use percent_encoding::percent_decode_str;

use crate::error::UrlError;

/// Convert a host or label to its ASCII-compatible (punycode) encoding.
///
/// Existing percent-encoding is decoded first, so `dom%C3%A4in.org` and
/// `domäin.org` encode the same way. The conversion applies UTS-46 mapping,
/// which also lowercases, and leaves ASCII input unchanged apart from case.
pub fn to_ascii(input: &str) -> Result<String, UrlError> {
    let decoded = percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| UrlError::Idna(input.to_string()))?;

    idna::domain_to_ascii(&decoded).map_err(|_| UrlError::Idna(input.to_string()))
}

/// Whether `host` is made only of `[a-zA-Z0-9.-]` and needs no IDNA pass.
pub fn is_ascii_host(host: &str) -> bool {
    host.bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii_unicode_host() {
        assert_eq!(to_ascii("domäin.example.org").unwrap(), "xn--domin-ira.example.org");
        assert_eq!(to_ascii("café.com").unwrap(), "xn--caf-dma.com");
    }

    #[test]
    fn test_to_ascii_decodes_percent_first() {
        assert_eq!(to_ascii("dom%C3%A4in.example.org").unwrap(), "xn--domin-ira.example.org");
    }

    #[test]
    fn test_to_ascii_is_idempotent_on_ascii() {
        assert_eq!(to_ascii("example.com").unwrap(), "example.com");
        assert_eq!(to_ascii("xn--domin-ira.example.org").unwrap(), "xn--domin-ira.example.org");
    }

    #[test]
    fn test_to_ascii_rejects_broken_utf8() {
        assert!(matches!(to_ascii("%C3.com"), Err(UrlError::Idna(_))));
    }

    #[test]
    fn test_is_ascii_host() {
        assert!(is_ascii_host("www.Example-1.com"));
        assert!(!is_ascii_host("domäin.org"));
        assert!(!is_ascii_host("ex_ample.org"));
        assert!(!is_ascii_host("a%20b.org"));
    }
}
