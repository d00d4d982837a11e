//! Validation and normalization of URLs and their components.

use crate::core::percent::{self, normalize_and_encode};
use crate::error::UrlError;
use crate::registry::{Registries, Registry};
use crate::types::{user_info_string, AuthorityComponents, Component, UrlComponents};
use crate::url::authority::{encode_idn_host_in_url, split_authority};
use crate::url::normalizer::{normalize_dns_name, normalize_host, validate_dns_label};
use crate::url::splitter::split_url;

/// Validates URLs and URL components against a [`Registry`].
///
/// Each method returns the normalized value, or the reason it was rejected.
/// Normalizing an already normalized value returns it unchanged.
///
/// # Examples
///
/// ```
/// use url_components::Validator;
///
/// let validator = Validator::new();
///
/// assert_eq!(
///     validator.url("https://www.example.com/a/b#frag").unwrap(),
///     "https://www.example.com/a/b#frag"
/// );
/// assert_eq!(validator.domain("google.com").unwrap(), "google.com");
/// assert!(validator.domain("www.google.com").is_err());
/// ```
#[derive(Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r dyn Registry,
}

impl Validator<'static> {
    /// A validator backed by the process-wide bundled registries.
    pub fn new() -> Self {
        Self::with_registry(Registries::global())
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl<'r> Validator<'r> {
    /// A validator backed by a caller-supplied registry.
    pub fn with_registry(registry: &'r dyn Registry) -> Self {
        Self { registry }
    }

    /// Validate and normalize a URL or relative reference.
    ///
    /// Empty or whitespace-only input yields an empty string. Otherwise every
    /// component is validated and the URL is rebuilt; if any component is
    /// invalid the whole URL is.
    pub fn url(&self, input: &str) -> Result<String, UrlError> {
        self.url_and_components(input).map(|(url, _)| url)
    }

    /// Like [`Validator::url`], but the input must be an absolute URL.
    ///
    /// Conformance is checked with the WHATWG parser of the `url` crate, which
    /// is stricter than RFC 3986 for some hosts: IPvFuture literals
    /// (`http://[v1.x]/`) and dotted names with a numeric last label
    /// (`http://1.2.3.4.5/`) pass [`Validator::url`] but are rejected here.
    pub fn absolute_url(&self, input: &str) -> Result<String, UrlError> {
        self.absolute_url_and_components(input).map(|(url, _)| url)
    }

    /// The normalized URL together with its validated components.
    pub fn url_and_components(&self, input: &str) -> Result<(String, UrlComponents), UrlError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok((String::new(), UrlComponents::default()));
        }

        self.assemble(input, false)
    }

    /// The normalized absolute URL together with its validated components.
    pub fn absolute_url_and_components(
        &self,
        input: &str,
    ) -> Result<(String, UrlComponents), UrlError> {
        self.assemble(input.trim(), true)
    }

    fn assemble(&self, input: &str, absolute: bool) -> Result<(String, UrlComponents), UrlError> {
        let components = self.url_components(input, absolute).inspect_err(|err| {
            tracing::debug!(url = input, error = %err, "URL rejected");
        })?;

        Ok((components.to_url_string(self.registry), components))
    }

    fn url_components(&self, input: &str, absolute: bool) -> Result<UrlComponents, UrlError> {
        // IDN-encode the host first so no later step sees non-ASCII host bytes
        let encoded = encode_idn_host_in_url(input);
        let raw = split_url(&encoded);

        if absolute {
            // WHATWG parsing, see `absolute_url`
            let conformant = raw.scheme.is_some() && ::url::Url::parse(&encoded).is_ok();
            if !conformant {
                return Err(UrlError::NotAbsolute(input.to_string()));
            }
        }

        let mut components = UrlComponents::default();

        if let Some(scheme) = non_empty(raw.scheme) {
            components.scheme = Some(self.scheme(scheme)?);
        }

        // `file:///path` is the one authority allowed to be empty
        let mut has_authority = false;
        match raw.authority {
            Some("") if components.scheme.as_deref() == Some("file") => {}
            Some(authority) => {
                let parts = split_authority(authority).ok_or(UrlError::EmptyHost)?;

                components.user = non_empty(parts.user).map(|user| self.user(user)).transpose()?;
                components.password = non_empty(parts.password)
                    .map(|password| self.password(password))
                    .transpose()?;
                components.host = Some(self.host(parts.host)?);
                components.port = parts.port.map(|port| self.port_digits(port)).transpose()?;
                has_authority = true;
            }
            None => {}
        }

        // Empty components are dropped, not kept as empty strings
        if !raw.path.is_empty() {
            let has_scheme = components.scheme.is_some();
            components.path = Some(self.checked_path(raw.path, has_authority, has_scheme)?);
        }

        if let Some(query) = non_empty(raw.query) {
            components.query = Some(normalize_and_encode(query, percent::QUERY));
        }

        if let Some(fragment) = non_empty(raw.fragment) {
            components.fragment = Some(normalize_and_encode(fragment, percent::FRAGMENT));
        }

        Ok(components)
    }

    /// Validate a scheme: trimmed, lowercased and registered.
    pub fn scheme(&self, scheme: &str) -> Result<String, UrlError> {
        let result = self
            .registry
            .validate_scheme(scheme)
            .ok_or_else(|| UrlError::InvalidScheme(scheme.to_string()));

        logged(Component::Scheme, scheme, result)
    }

    /// Validate an authority and serialize it as `user:password@host:port`.
    pub fn authority(&self, authority: &str) -> Result<String, UrlError> {
        Ok(self.authority_components(authority)?.to_authority_string())
    }

    /// Split an authority and validate each of its parts.
    pub fn authority_components(&self, authority: &str) -> Result<AuthorityComponents, UrlError> {
        let result = split_authority(authority.trim())
            .ok_or(UrlError::EmptyHost)
            .and_then(|parts| {
                let user = non_empty(parts.user).map(|user| self.user(user)).transpose()?;
                let password = non_empty(parts.password)
                    .map(|password| self.password(password))
                    .transpose()?;

                Ok(AuthorityComponents {
                    user_info: user_info_string(user.as_deref(), password.as_deref()),
                    user,
                    password,
                    host: self.host(parts.host)?,
                    port: parts.port.map(|port| self.port_digits(port)).transpose()?,
                })
            });

        logged(Component::Authority, authority, result)
    }

    /// Validate `user[:password]`. The first `:` is kept as the delimiter.
    pub fn user_info(&self, user_info: &str) -> Result<String, UrlError> {
        Ok(match user_info.split_once(':') {
            Some((user, password)) => format!("{}:{}", self.user(user)?, self.password(password)?),
            None => self.user(user_info)?,
        })
    }

    /// Percent-encode a user name. `:` is always escaped.
    pub fn user(&self, user: &str) -> Result<String, UrlError> {
        Ok(normalize_and_encode(user, percent::USER_INFO))
    }

    /// Percent-encode a password. `:` is always escaped.
    pub fn password(&self, password: &str) -> Result<String, UrlError> {
        Ok(normalize_and_encode(password, percent::USER_INFO))
    }

    /// Alias of [`Validator::password`].
    pub fn pass(&self, password: &str) -> Result<String, UrlError> {
        self.password(password)
    }

    /// Validate a host name or IP literal.
    ///
    /// IP literals are lowercased. Names are IDN-encoded and lowercased and
    /// must consist of alphanumeric labels that may contain inner hyphens.
    pub fn host(&self, host: &str) -> Result<String, UrlError> {
        logged(Component::Host, host, normalize_host(host))
    }

    /// Validate a registrable domain: a single label followed by a known
    /// public suffix.
    pub fn domain(&self, domain: &str) -> Result<String, UrlError> {
        logged(Component::Domain, domain, self.registrable(domain))
    }

    fn registrable(&self, domain: &str) -> Result<String, UrlError> {
        let name = normalize_dns_name(domain)?;
        let trimmed = name.strip_suffix('.').unwrap_or(&name);

        if self.registry.suffix_of(trimmed).is_none() {
            return Err(UrlError::UnknownSuffix(name));
        }

        // A bare suffix has no label to register under it
        let Some(registrable) = self.registry.registrable_domain(trimmed) else {
            return Err(UrlError::NotRegistrable(name));
        };

        if registrable != trimmed {
            return Err(UrlError::HasSubdomain(name));
        }

        Ok(name)
    }

    /// Validate the registrable label of a domain, without its suffix.
    pub fn domain_label(&self, label: &str) -> Result<String, UrlError> {
        let result = normalize_dns_name(label)
            .and_then(|normalized| validate_dns_label(&normalized).map(|()| normalized));

        logged(Component::DomainLabel, label, result)
    }

    /// Validate a public suffix such as `co.uk`.
    pub fn domain_suffix(&self, suffix: &str) -> Result<String, UrlError> {
        let result = normalize_dns_name(suffix).and_then(|normalized| {
            if self.registry.suffix_exists(&normalized) {
                Ok(normalized)
            } else {
                Err(UrlError::UnknownSuffix(normalized))
            }
        });

        logged(Component::DomainSuffix, suffix, result)
    }

    /// Validate subdomain labels such as `www` or `api.v2`.
    pub fn subdomain(&self, subdomain: &str) -> Result<String, UrlError> {
        logged(Component::Subdomain, subdomain, normalize_dns_name(subdomain))
    }

    /// Validate a port number: `0..=65535`.
    pub fn port(&self, port: i64) -> Result<u16, UrlError> {
        let result = u16::try_from(port).map_err(|_| UrlError::InvalidPort(port.to_string()));
        logged(Component::Port, port, result)
    }

    fn port_digits(&self, digits: &str) -> Result<u16, UrlError> {
        match digits.parse::<i64>() {
            Ok(port) => self.port(port),
            Err(_) => logged(Component::Port, digits, Err(UrlError::InvalidPort(digits.to_string()))),
        }
    }

    /// Validate and percent-encode a path.
    ///
    /// Without an authority, a path must not start with `//`, and a path
    /// not starting with `/` must not have a `:` in its first segment, since
    /// either would be read back as something other than a path.
    pub fn path(&self, path: &str, has_authority: bool) -> Result<String, UrlError> {
        logged(Component::Path, path, self.checked_path(path, has_authority, false))
    }

    /// After a scheme, a colon in the first segment can no longer be
    /// mistaken for one (`urn:isbn:0451450523`).
    fn checked_path(
        &self,
        path: &str,
        has_authority: bool,
        has_scheme: bool,
    ) -> Result<String, UrlError> {
        if !has_authority {
            // `//x` would be read back as an authority
            if path.starts_with("//") {
                return Err(UrlError::InvalidPath(path.to_string()));
            }

            let first_segment = path.split('/').next().unwrap_or_default();
            if !has_scheme && !path.starts_with('/') && first_segment.contains(':') {
                return Err(UrlError::InvalidPath(path.to_string()));
            }
        }

        Ok(normalize_and_encode(path, percent::PATH))
    }

    /// Percent-encode a query, dropping one leading `?`.
    pub fn query(&self, query: &str) -> Result<String, UrlError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(normalize_and_encode(query, percent::QUERY))
    }

    /// Percent-encode a fragment, dropping one leading `#`.
    pub fn fragment(&self, fragment: &str) -> Result<String, UrlError> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Ok(normalize_and_encode(fragment, percent::FRAGMENT))
    }

    /// Validate `value` as the given component.
    ///
    /// Paths are validated as if there were no authority, and ports must be
    /// given as decimal digits.
    pub fn component(&self, component: Component, value: &str) -> Result<String, UrlError> {
        match component {
            Component::Scheme => self.scheme(value),
            Component::Authority => self.authority(value),
            Component::UserInfo => self.user_info(value),
            Component::User => self.user(value),
            Component::Password => self.password(value),
            Component::Host => self.host(value),
            Component::Domain => self.domain(value),
            Component::DomainLabel => self.domain_label(value),
            Component::DomainSuffix => self.domain_suffix(value),
            Component::Subdomain => self.subdomain(value),
            Component::Port => self.port_digits(value.trim()).map(|port| port.to_string()),
            Component::Path => self.path(value, false),
            Component::Query => self.query(value),
            Component::Fragment => self.fragment(value),
        }
    }
}

/// Log a rejected component at debug level and pass the result through.
fn logged<T>(
    component: Component,
    value: impl std::fmt::Display,
    result: Result<T, UrlError>,
) -> Result<T, UrlError> {
    result.inspect_err(|err| {
        tracing::debug!(%component, %value, error = %err, "component rejected");
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
