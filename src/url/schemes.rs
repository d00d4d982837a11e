//! Registry of known URI schemes and their standard ports.

use std::collections::HashMap;

use crate::error::RegistryError;

/// The scheme table compiled into the crate.
const BUNDLED_SCHEMES: &str = include_str!("../../data/schemes.txt");

/// Immutable mapping of lowercase scheme name to its standard port.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    ports: HashMap<String, Option<u16>>,
}

impl SchemeRegistry {
    /// Build a registry from `scheme [port]` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(source: &str) -> Result<Self, RegistryError> {
        let mut ports = HashMap::new();

        for (index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = || RegistryError::InvalidScheme {
                line: index + 1,
                entry: line.to_string(),
            };

            let mut fields = line.split_whitespace();
            let name = fields.next().filter(|name| is_scheme_syntax(name)).ok_or_else(invalid)?;
            let port = fields
                .next()
                .map(|port| port.parse::<u16>().map_err(|_| invalid()))
                .transpose()?;

            if fields.next().is_some() {
                return Err(invalid());
            }

            ports.insert(name.to_ascii_lowercase(), port);
        }

        if ports.is_empty() {
            return Err(RegistryError::EmptySource("scheme"));
        }

        tracing::info!(schemes = ports.len(), "loaded scheme registry");

        Ok(Self { ports })
    }

    /// Build the registry from the table bundled with the crate.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::parse(BUNDLED_SCHEMES)
    }

    /// Number of known schemes.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Whether no schemes are known.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Trim and lowercase `scheme`, returning it if it is registered.
    pub fn validate(&self, scheme: &str) -> Option<String> {
        let scheme = scheme.trim().to_ascii_lowercase();
        self.ports.contains_key(&scheme).then_some(scheme)
    }

    /// The standard port of `scheme`, if it has one.
    pub fn standard_port(&self, scheme: &str) -> Option<u16> {
        let scheme = scheme.trim().to_ascii_lowercase();
        self.ports.get(&scheme).copied().flatten()
    }
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_scheme_syntax(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();

    bytes.next().is_some_and(|first| first.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
