//! Property-based tests for normalization invariants.
//!
//! Normalizing an already normalized value must be a no-op, whole URLs must
//! survive a second pass unchanged, and lookups must not depend on case.

use proptest::prelude::*;

use url_components::{Registries, Validator};

/// Strategies for generating URL-shaped inputs.
mod strategies {
    use super::*;

    /// A host label of ASCII letters/digits or a few Latin-1 letters that
    /// need IDNA encoding.
    pub fn host_label() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9äöüé]{1,12}"
    }

    /// A host made of 1-3 labels under a few common suffixes.
    pub fn host() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(host_label(), 1..=3),
            prop::sample::select(vec!["com", "org", "co.uk", "de", "example"]),
        )
            .prop_map(|(labels, suffix)| format!("{}.{}", labels.join("."), suffix))
    }

    /// An ASCII-only host name with mixed case.
    pub fn ascii_host() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9]([a-zA-Z0-9-]{0,8}[a-zA-Z0-9])?", 1..=4)
            .prop_map(|labels| labels.join("."))
    }

    /// Path text: segments with spaces, percent signs and non-ASCII
    /// characters, but no `?` or `#`.
    pub fn path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9 %:@!$&'()*+,;=._~äöß<>\\[\\]-]{0,8}", 0..=4)
            .prop_map(|segments| segments.iter().map(|s| format!("/{}", s)).collect())
    }

    /// Query or fragment text: anything except `#`.
    pub fn query() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 %=&?/:@äö{}|^-]{0,16}"
    }

    /// A full absolute URL assembled from the strategies above.
    pub fn url() -> impl Strategy<Value = String> {
        (
            prop::sample::select(vec!["http", "HTTPS", "ftp", "ws"]),
            prop::option::of("[a-zA-Z0-9 :%äö]{1,8}"),
            host(),
            prop::option::of(0u32..=70000),
            path(),
            prop::option::of(query()),
            prop::option::of(query()),
        )
            .prop_map(|(scheme, user_info, host, port, path, query, fragment)| {
                let mut url = format!("{}://", scheme);
                if let Some(user_info) = user_info {
                    url.push_str(&user_info);
                    url.push('@');
                }
                url.push_str(&host);
                if let Some(port) = port {
                    url.push_str(&format!(":{}", port));
                }
                url.push_str(&path);
                if let Some(query) = query {
                    url.push('?');
                    url.push_str(&query);
                }
                if let Some(fragment) = fragment {
                    url.push('#');
                    url.push_str(&fragment);
                }
                url
            })
    }
}

proptest! {
    #[test]
    fn path_is_idempotent(input in any::<String>(), has_authority in any::<bool>()) {
        let validator = Validator::new();
        if let Ok(once) = validator.path(&input, has_authority) {
            prop_assert_eq!(validator.path(&once, has_authority).unwrap(), once);
        }
    }

    #[test]
    fn query_fragment_user_password_are_idempotent(input in any::<String>()) {
        let validator = Validator::new();

        let query = validator.query(&input).unwrap();
        prop_assert_eq!(validator.query(&query).unwrap(), query);

        let fragment = validator.fragment(&input).unwrap();
        prop_assert_eq!(validator.fragment(&fragment).unwrap(), fragment);

        let user = validator.user(&input).unwrap();
        prop_assert_eq!(validator.user(&user).unwrap(), user);

        let password = validator.password(&input).unwrap();
        prop_assert_eq!(validator.password(&password).unwrap(), password);
    }

    #[test]
    fn encoded_components_are_ascii(input in any::<String>()) {
        let validator = Validator::new();

        prop_assert!(validator.query(&input).unwrap().is_ascii());
        prop_assert!(validator.fragment(&input).unwrap().is_ascii());
        prop_assert!(validator.user(&input).unwrap().is_ascii());
    }

    #[test]
    fn url_round_trips(input in strategies::url()) {
        let validator = Validator::new();
        if let Ok(once) = validator.url(&input) {
            prop_assert_eq!(validator.url(&once).unwrap(), once.clone());
            prop_assert!(once.is_ascii());
        }
    }

    #[test]
    fn valid_generated_urls_are_accepted(
        host in strategies::host(),
        path in strategies::path(),
        query in strategies::query(),
    ) {
        let validator = Validator::new();
        let url = format!("https://{}{}?{}", host, path, query);
        prop_assert!(validator.url(&url).is_ok(), "rejected: {}", url);
    }

    #[test]
    fn host_is_case_insensitive(host in strategies::ascii_host()) {
        let validator = Validator::new();
        let lower = validator.host(&host).unwrap();

        prop_assert_eq!(validator.host(&host.to_uppercase()).unwrap(), lower.clone());
        prop_assert_eq!(lower, host.to_ascii_lowercase());
    }

    #[test]
    fn suffix_holds_under_longer_hosts(
        label in "[a-z0-9]{1,10}",
        suffix in prop::sample::select(vec!["com", "org", "co.uk", "de", "ac.jp", "k12.ak.us"]),
    ) {
        let validator = Validator::new();
        prop_assert_eq!(validator.domain_suffix(suffix).unwrap(), suffix);

        let host = format!("{}.{}", label, suffix);
        prop_assert_eq!(Registries::global().suffixes().suffix_of(&host), Some(suffix));
        prop_assert_eq!(validator.domain(&host).unwrap(), host);
    }

    #[test]
    fn port_bounds(port in any::<i64>()) {
        let validator = Validator::new();
        prop_assert_eq!(validator.port(port).is_ok(), (0..=65535).contains(&port));
    }
}
