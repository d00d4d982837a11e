//! Error types for URL component validation and registry loading.

use thiserror::Error;

/// Reasons a URL or one of its components is rejected.
///
/// Every validator reports failure through this type instead of panicking.
/// Empty input is not an error: validators that accept absence return an
/// empty string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The scheme is syntactically invalid or not a registered URI scheme.
    #[error("Unknown or invalid scheme: {0}")]
    InvalidScheme(String),

    /// An authority was present but no host remained after stripping
    /// user info and port.
    #[error("Authority has an empty host")]
    EmptyHost,

    /// The host contains characters or labels not allowed in a host name.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// The host is well formed but its public suffix is not known.
    #[error("No known public suffix for: {0}")]
    UnknownSuffix(String),

    /// A registrable domain was expected, but the input is a public suffix.
    #[error("Public suffix is not a registrable domain: {0}")]
    NotRegistrable(String),

    /// A registrable domain was expected, but the input still has a subdomain.
    #[error("Domain contains a subdomain: {0}")]
    HasSubdomain(String),

    /// The port number is outside 0..=65535 or not a number.
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    /// The path is ambiguous or malformed for its position in the reference.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IDNA (punycode) conversion of a host failed.
    #[error("IDNA conversion failed for: {0}")]
    Idna(String),

    /// An absolute URL was required but the input is a relative reference
    /// or not a conformant absolute URI.
    #[error("Not an absolute URL: {0}")]
    NotAbsolute(String),

    /// The name does not denote a URL component.
    #[error("Unknown component name: {0}")]
    UnknownComponent(String),
}

/// Errors raised while building a registry from its data source.
///
/// These mean the data itself is unusable and are reported at construction
/// time, never during validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The source produced no usable entries.
    #[error("{0} data source contains no entries")]
    EmptySource(&'static str),

    /// A public suffix rule line could not be parsed.
    #[error("Invalid public suffix rule on line {line}: {rule}")]
    InvalidRule {
        /// 1-based line number in the source
        line: usize,
        /// The offending rule text
        rule: String,
    },

    /// A scheme table line could not be parsed.
    #[error("Invalid scheme entry on line {line}: {entry}")]
    InvalidScheme {
        /// 1-based line number in the source
        line: usize,
        /// The offending line text
        entry: String,
    },
}
