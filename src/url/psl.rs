//! Public Suffix List matching for domain classification.
//!
//! Rules come in three kinds, as in the list's own format:
//! - ordinary: `com`, `co.uk`
//! - wildcard: `*.ck` matches any single label directly left of `ck`
//! - exception: `!www.ck` carves `www.ck` back out of the wildcard
//!
//! Rules are stored in their ASCII (punycode) form, so lookups expect hosts
//! that were already IDN-encoded and lowercased.

use std::collections::HashSet;

use crate::core::codec::{is_ascii_host, to_ascii};
use crate::error::RegistryError;

/// The PSL snapshot compiled into the crate (ICANN section).
const BUNDLED_LIST: &str = include_str!("../../data/public_suffix_list.dat");

/// An immutable set of public suffix rules.
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    rules: HashSet<String>,
    /// Wildcard rules, stored without the leading `*.`
    wildcards: HashSet<String>,
    /// Exception rules, stored without the leading `!`
    exceptions: HashSet<String>,
}

impl SuffixList {
    /// Build a rule set from text in the Public Suffix List format.
    ///
    /// Only the first whitespace-delimited token of a line is read. Blank
    /// lines and `//` comments are skipped. Unicode rules are converted to
    /// punycode.
    pub fn parse(source: &str) -> Result<Self, RegistryError> {
        let mut list = SuffixList::default();

        for (index, line) in source.lines().enumerate() {
            // Only the first token counts, the rest of the line is ignored
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            if token.starts_with("//") {
                continue;
            }

            let invalid = || RegistryError::InvalidRule {
                line: index + 1,
                rule: token.to_string(),
            };

            if let Some(rule) = token.strip_prefix('!') {
                let rule = encode_rule(rule).ok_or_else(invalid)?;
                if !rule.contains('.') {
                    return Err(invalid());
                }
                list.exceptions.insert(rule);
            } else if let Some(rule) = token.strip_prefix("*.") {
                list.wildcards.insert(encode_rule(rule).ok_or_else(invalid)?);
            } else {
                list.rules.insert(encode_rule(token).ok_or_else(invalid)?);
            }
        }

        if list.is_empty() {
            return Err(RegistryError::EmptySource("public suffix"));
        }

        tracing::info!(
            rules = list.rules.len(),
            wildcards = list.wildcards.len(),
            exceptions = list.exceptions.len(),
            "loaded public suffix list"
        );

        Ok(list)
    }

    /// Build the rule set from the snapshot bundled with the crate.
    pub fn bundled() -> Result<Self, RegistryError> {
        Self::parse(BUNDLED_LIST)
    }

    /// Total number of rules of all kinds.
    pub fn len(&self) -> usize {
        self.rules.len() + self.wildcards.len() + self.exceptions.len()
    }

    /// Whether the list holds no rules.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the longest public suffix of `host`.
    ///
    /// `host` must be lowercase and IDN-encoded. One trailing dot is ignored.
    /// An exception rule wins over the wildcard it carves out and yields the
    /// rule minus its leftmost label. Returns `None` when no rule matches;
    /// there is no implicit `*` rule.
    pub fn suffix_of<'h>(&self, host: &'h str) -> Option<&'h str> {
        let name = host.strip_suffix('.').unwrap_or(host);
        if name.is_empty() {
            return None;
        }

        // Candidates from the whole name down to the last label
        let starts = std::iter::once(0).chain(name.match_indices('.').map(|(i, _)| i + 1));

        for start in starts {
            let candidate = &name[start..];

            // Exception: the suffix is the rule without its leftmost label
            if self.exceptions.contains(candidate) {
                return candidate.split_once('.').map(|(_, parent)| parent);
            }

            if self.rules.contains(candidate) {
                return Some(candidate);
            }

            // Wildcard: any single label over a listed parent
            if let Some((_, parent)) = candidate.split_once('.') {
                if self.wildcards.contains(parent) {
                    return Some(candidate);
                }
            }
        }

        None
    }

    /// Whether `candidate` is itself a public suffix.
    pub fn exists(&self, candidate: &str) -> bool {
        let name = candidate.strip_suffix('.').unwrap_or(candidate);
        self.suffix_of(name) == Some(name)
    }

    /// The public suffix of `host` plus the one label to its left.
    ///
    /// `None` if the suffix is unknown or `host` is a public suffix itself.
    pub fn registrable_domain<'h>(&self, host: &'h str) -> Option<&'h str> {
        let name = host.strip_suffix('.').unwrap_or(host);
        registrable_part(name, self.suffix_of(name)?)
    }
}

/// Cut `name` down to `suffix` plus the one label to its left.
///
/// `None` if `name` does not end in `.suffix`.
pub(crate) fn registrable_part<'h>(name: &'h str, suffix: &str) -> Option<&'h str> {
    let rest = name.strip_suffix(suffix)?.strip_suffix('.')?;
    let label_start = rest.rfind('.').map_or(0, |i| i + 1);

    if label_start == rest.len() {
        return None;
    }

    Some(&name[label_start..])
}

/// Lowercase a rule and convert Unicode labels to punycode.
fn encode_rule(rule: &str) -> Option<String> {
    if rule.is_empty() || rule.contains(['*', '!']) {
        return None;
    }

    let encoded = if is_ascii_host(rule) {
        rule.to_ascii_lowercase()
    } else {
        to_ascii(rule).ok()?
    };

    if encoded.split('.').any(str::is_empty) {
        return None;
    }

    Some(encoded)
}
