//! Core data structures for validated URL components.

use std::fmt;
use std::str::FromStr;

use crate::error::UrlError;
use crate::registry::Registry;

/// Validated components of a URL.
///
/// A field is `Some` only if the component was present in the source string
/// with a non-empty value and passed its validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    /// Lowercased, registered scheme (https, mailto, ...)
    pub scheme: Option<String>,
    /// Percent-encoded user name
    pub user: Option<String>,
    /// Percent-encoded password
    pub password: Option<String>,
    /// Lowercased host, IDN hosts in punycode
    pub host: Option<String>,
    /// Port number as written, even if it is the scheme's standard port
    pub port: Option<u16>,
    /// Percent-encoded path
    pub path: Option<String>,
    /// Percent-encoded query without the leading `?`
    pub query: Option<String>,
    /// Percent-encoded fragment without the leading `#`
    pub fragment: Option<String>,
}

impl UrlComponents {
    /// `user[:password]`, if any user info is present.
    pub fn user_info(&self) -> Option<String> {
        user_info_string(self.user.as_deref(), self.password.as_deref())
    }

    /// Serialize the components back into a URL string.
    ///
    /// The port is left out when it equals the standard port of the scheme,
    /// so `http://example.com:80` becomes `http://example.com`.
    pub fn to_url_string(&self, registry: &dyn Registry) -> String {
        let mut url = String::new();

        if let Some(scheme) = &self.scheme {
            url.push_str(scheme);
            url.push(':');
        }

        if let Some(host) = &self.host {
            url.push_str("//");

            if let Some(user_info) = self.user_info() {
                url.push_str(&user_info);
                url.push('@');
            }

            url.push_str(host);

            if let Some(port) = self.port {
                let standard = self
                    .scheme
                    .as_deref()
                    .and_then(|scheme| registry.standard_port(scheme));

                if standard != Some(port) {
                    url.push(':');
                    url.push_str(&port.to_string());
                }
            }
        }

        if let Some(path) = &self.path {
            url.push_str(path);
        }

        if let Some(query) = &self.query {
            url.push('?');
            url.push_str(query);
        }

        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }

        url
    }
}

/// Validated components of an authority (`[user-info@]host[:port]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityComponents {
    /// `user[:password]` as it will be serialized
    pub user_info: Option<String>,
    /// Percent-encoded user name
    pub user: Option<String>,
    /// Percent-encoded password
    pub password: Option<String>,
    /// Lowercased host, never empty
    pub host: String,
    /// Port number
    pub port: Option<u16>,
}

impl AuthorityComponents {
    /// Serialize as `user:password@host:port`, leaving out absent parts.
    pub fn to_authority_string(&self) -> String {
        let mut authority = String::new();

        if let Some(user_info) = &self.user_info {
            authority.push_str(user_info);
            authority.push('@');
        }

        authority.push_str(&self.host);

        if let Some(port) = self.port {
            authority.push(':');
            authority.push_str(&port.to_string());
        }

        authority
    }
}

pub(crate) fn user_info_string(user: Option<&str>, password: Option<&str>) -> Option<String> {
    match (user, password) {
        (None, None) => None,
        (user, None) => user.map(str::to_string),
        (user, Some(password)) => Some(format!("{}:{}", user.unwrap_or(""), password)),
    }
}

/// The URL components that can be validated on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// URL scheme (https, mailto)
    Scheme,
    /// `[user-info@]host[:port]`
    Authority,
    /// `user[:password]`
    UserInfo,
    /// User name
    User,
    /// Password, also accepted under the name `pass`
    Password,
    /// Host name or IP literal (www.example.com, [::1])
    Host,
    /// Registrable domain (example.co.uk)
    Domain,
    /// Registrable label without suffix (example)
    DomainLabel,
    /// Public suffix (co.uk)
    DomainSuffix,
    /// Subdomain labels (www, api.v2)
    Subdomain,
    /// Port number
    Port,
    /// Path component (/api/v1/users)
    Path,
    /// Query string (foo=bar&baz=qux)
    Query,
    /// Fragment (section1)
    Fragment,
}

impl Component {
    /// All components, in URL order.
    pub const ALL: [Component; 14] = [
        Component::Scheme,
        Component::Authority,
        Component::UserInfo,
        Component::User,
        Component::Password,
        Component::Host,
        Component::Domain,
        Component::DomainLabel,
        Component::DomainSuffix,
        Component::Subdomain,
        Component::Port,
        Component::Path,
        Component::Query,
        Component::Fragment,
    ];

    /// The component's conventional name.
    pub fn name(self) -> &'static str {
        match self {
            Component::Scheme => "scheme",
            Component::Authority => "authority",
            Component::UserInfo => "userInfo",
            Component::User => "user",
            Component::Password => "password",
            Component::Host => "host",
            Component::Domain => "domain",
            Component::DomainLabel => "domainLabel",
            Component::DomainSuffix => "domainSuffix",
            Component::Subdomain => "subdomain",
            Component::Port => "port",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Component {
    type Err = UrlError;

    /// Parse a component name, ignoring case. `pass` is an alias of `password`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Component::Password);
        }

        Component::ALL
            .into_iter()
            .find(|component| component.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UrlError::UnknownComponent(s.to_string()))
    }
}
