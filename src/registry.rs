//! Lookup capabilities the validators depend on, and the process-wide default.

use std::sync::LazyLock;

use crate::error::RegistryError;
use crate::url::psl::{registrable_part, SuffixList};
use crate::url::schemes::SchemeRegistry;

/// Read-only lookups needed to validate schemes, ports and domains.
///
/// Implementations must be immutable after construction so a single instance
/// can be shared by concurrent validators.
pub trait Registry: Send + Sync {
    /// Lowercased scheme if it is known.
    fn validate_scheme(&self, scheme: &str) -> Option<String>;

    /// Standard port of a scheme.
    fn standard_port(&self, scheme: &str) -> Option<u16>;

    /// Longest public suffix of an IDN-encoded, lowercase host.
    fn suffix_of<'h>(&self, host: &'h str) -> Option<&'h str>;

    /// Whether the input is itself a public suffix.
    fn suffix_exists(&self, suffix: &str) -> bool;

    /// The public suffix of `host` plus the one label to its left.
    fn registrable_domain<'h>(&self, host: &'h str) -> Option<&'h str> {
        let name = host.strip_suffix('.').unwrap_or(host);
        registrable_part(name, self.suffix_of(name)?)
    }
}

/// The scheme registry and public suffix list together.
#[derive(Debug, Clone)]
pub struct Registries {
    schemes: SchemeRegistry,
    suffixes: SuffixList,
}

static GLOBAL: LazyLock<Registries> = LazyLock::new(|| {
    Registries::bundled().unwrap_or_else(|err| panic!("bundled registry data is unusable: {err}"))
});

impl Registries {
    /// Combine already loaded registries.
    pub fn new(schemes: SchemeRegistry, suffixes: SuffixList) -> Self {
        Self { schemes, suffixes }
    }

    /// Load both registries from the data bundled with the crate.
    pub fn bundled() -> Result<Self, RegistryError> {
        Ok(Self::new(SchemeRegistry::bundled()?, SuffixList::bundled()?))
    }

    /// The process-wide registries, built from bundled data on first use.
    ///
    /// # Panics
    ///
    /// Panics on first use if the bundled data cannot be parsed.
    pub fn global() -> &'static Registries {
        &GLOBAL
    }

    /// The scheme registry.
    pub fn schemes(&self) -> &SchemeRegistry {
        &self.schemes
    }

    /// The public suffix list.
    pub fn suffixes(&self) -> &SuffixList {
        &self.suffixes
    }
}

impl Registry for Registries {
    fn validate_scheme(&self, scheme: &str) -> Option<String> {
        self.schemes.validate(scheme)
    }

    fn standard_port(&self, scheme: &str) -> Option<u16> {
        self.schemes.standard_port(scheme)
    }

    fn suffix_of<'h>(&self, host: &'h str) -> Option<&'h str> {
        self.suffixes.suffix_of(host)
    }

    fn suffix_exists(&self, suffix: &str) -> bool {
        self.suffixes.exists(suffix)
    }

    fn registrable_domain<'h>(&self, host: &'h str) -> Option<&'h str> {
        self.suffixes.registrable_domain(host)
    }
}
