//! Public Suffix List matching against the list's published test vectors.
//!
//! Each case gives a host and its expected registrable domain (`None` when
//! the host is itself a public suffix or has no known suffix).

use publicsuffix::{List, Psl};
use url_components::{Registries, SuffixList};

const BUNDLED_LIST: &str = include_str!("../data/public_suffix_list.dat");

/// Every host the vectors below use.
const HOSTS: &[&str] = &[
    "example",
    "example.example",
    "b.example.example",
    "a.b.example.example",
    "biz",
    "domain.biz",
    "b.domain.biz",
    "a.b.domain.biz",
    "com",
    "example.com",
    "b.example.com",
    "a.b.example.com",
    "uk",
    "co.uk",
    "example.co.uk",
    "b.example.co.uk",
    "www.example.co.uk",
    "er",
    "c.er",
    "b.c.er",
    "a.b.c.er",
    "ck",
    "test.ck",
    "b.test.ck",
    "a.b.test.ck",
    "anything.ck",
    "www.ck",
    "www.www.ck",
    "jp",
    "test.jp",
    "www.test.jp",
    "ac.jp",
    "test.ac.jp",
    "www.test.ac.jp",
    "kyoto.jp",
    "test.kyoto.jp",
    "ide.kyoto.jp",
    "b.ide.kyoto.jp",
    "a.b.ide.kyoto.jp",
    "c.kobe.jp",
    "b.c.kobe.jp",
    "a.b.c.kobe.jp",
    "city.kobe.jp",
    "www.city.kobe.jp",
    "us",
    "test.us",
    "www.test.us",
    "ak.us",
    "test.ak.us",
    "www.test.ak.us",
    "k12.ak.us",
    "test.k12.ak.us",
    "www.test.k12.ak.us",
    "xn--85x722f.com.cn",
    "xn--85x722f.xn--55qx5d.cn",
    "www.xn--85x722f.xn--55qx5d.cn",
    "shishi.xn--55qx5d.cn",
    "xn--55qx5d.cn",
    "idk",
];

fn suffixes() -> &'static SuffixList {
    Registries::global().suffixes()
}

fn check_registrable(cases: &[(&str, Option<&str>)]) {
    for (host, expected) in cases {
        assert_eq!(
            suffixes().registrable_domain(host),
            *expected,
            "registrable domain of {}",
            host
        );
    }
}

#[test]
fn test_unlisted_tld() {
    check_registrable(&[
        ("example", None),
        ("example.example", None),
        ("b.example.example", None),
        ("a.b.example.example", None),
    ]);
}

#[test]
fn test_tld_with_one_rule() {
    check_registrable(&[
        ("biz", None),
        ("domain.biz", Some("domain.biz")),
        ("b.domain.biz", Some("domain.biz")),
        ("a.b.domain.biz", Some("domain.biz")),
    ]);
}

#[test]
fn test_tld_with_some_two_level_rules() {
    check_registrable(&[
        ("com", None),
        ("example.com", Some("example.com")),
        ("b.example.com", Some("example.com")),
        ("a.b.example.com", Some("example.com")),
        ("uk", None),
        ("co.uk", None),
        ("example.co.uk", Some("example.co.uk")),
        ("b.example.co.uk", Some("example.co.uk")),
    ]);
}

#[test]
fn test_tld_with_only_wildcard_rule() {
    check_registrable(&[
        ("er", None),
        ("c.er", None),
        ("b.c.er", Some("b.c.er")),
        ("a.b.c.er", Some("b.c.er")),
    ]);
}

#[test]
fn test_wildcard_with_exception() {
    check_registrable(&[
        ("ck", None),
        ("test.ck", None),
        ("b.test.ck", Some("b.test.ck")),
        ("a.b.test.ck", Some("b.test.ck")),
        ("www.ck", Some("www.ck")),
        ("www.www.ck", Some("www.ck")),
    ]);
}

#[test]
fn test_more_complex_tld() {
    check_registrable(&[
        ("jp", None),
        ("test.jp", Some("test.jp")),
        ("www.test.jp", Some("test.jp")),
        ("ac.jp", None),
        ("test.ac.jp", Some("test.ac.jp")),
        ("www.test.ac.jp", Some("test.ac.jp")),
        ("kyoto.jp", None),
        ("test.kyoto.jp", Some("test.kyoto.jp")),
        ("ide.kyoto.jp", None),
        ("b.ide.kyoto.jp", Some("b.ide.kyoto.jp")),
        ("a.b.ide.kyoto.jp", Some("b.ide.kyoto.jp")),
        ("c.kobe.jp", None),
        ("b.c.kobe.jp", Some("b.c.kobe.jp")),
        ("a.b.c.kobe.jp", Some("b.c.kobe.jp")),
        ("city.kobe.jp", Some("city.kobe.jp")),
        ("www.city.kobe.jp", Some("city.kobe.jp")),
    ]);
}

#[test]
fn test_us_k12() {
    check_registrable(&[
        ("us", None),
        ("test.us", Some("test.us")),
        ("www.test.us", Some("test.us")),
        ("ak.us", None),
        ("test.ak.us", Some("test.ak.us")),
        ("www.test.ak.us", Some("test.ak.us")),
        ("k12.ak.us", None),
        ("test.k12.ak.us", Some("test.k12.ak.us")),
        ("www.test.k12.ak.us", Some("test.k12.ak.us")),
    ]);
}

#[test]
fn test_idn_labels_in_punycode() {
    check_registrable(&[
        ("xn--85x722f.com.cn", Some("xn--85x722f.com.cn")),
        ("xn--85x722f.xn--55qx5d.cn", Some("xn--85x722f.xn--55qx5d.cn")),
        ("www.xn--85x722f.xn--55qx5d.cn", Some("xn--85x722f.xn--55qx5d.cn")),
        ("shishi.xn--55qx5d.cn", Some("shishi.xn--55qx5d.cn")),
        ("xn--55qx5d.cn", None),
    ]);
}

#[test]
fn test_suffix_of_longest_match() {
    assert_eq!(suffixes().suffix_of("www.example.co.uk"), Some("co.uk"));
    assert_eq!(suffixes().suffix_of("a.b.c.kobe.jp"), Some("c.kobe.jp"));
    assert_eq!(suffixes().suffix_of("www.city.kobe.jp"), Some("kobe.jp"));
    assert_eq!(suffixes().suffix_of("example.example"), None);
}

#[test]
fn test_suffix_exists() {
    for suffix in ["com", "co.uk", "k12.ak.us", "anything.ck", "xn--55qx5d.cn"] {
        assert!(suffixes().exists(suffix), "{} should be a public suffix", suffix);
    }

    for not_suffix in ["idk", "example.com", "www.ck", "city.kobe.jp", "ck"] {
        assert!(!suffixes().exists(not_suffix), "{} should not be a public suffix", not_suffix);
    }
}

#[test]
fn test_suffix_stays_under_longer_hosts() {
    for suffix in ["com", "co.uk", "ac.jp", "k12.ak.us"] {
        let host = format!("anything.{}", suffix);
        assert_eq!(suffixes().suffix_of(&host), Some(suffix));
    }
}

#[test]
fn test_suffix_of_matches_publicsuffix_crate() {
    let reference: List = BUNDLED_LIST.parse().unwrap();

    for host in HOSTS {
        // The crate falls back to the last label; only listed suffixes count
        let expected = reference
            .suffix(host.as_bytes())
            .filter(|suffix| suffix.is_known())
            .map(|suffix| std::str::from_utf8(suffix.as_bytes()).unwrap());

        assert_eq!(suffixes().suffix_of(host), expected, "suffix of {}", host);
    }
}

#[test]
fn test_registrable_domain_matches_publicsuffix_crate() {
    let reference: List = BUNDLED_LIST.parse().unwrap();

    for host in HOSTS {
        let expected = reference
            .domain(host.as_bytes())
            .filter(|domain| domain.suffix().is_known())
            .map(|domain| std::str::from_utf8(domain.as_bytes()).unwrap());

        assert_eq!(suffixes().registrable_domain(host), expected, "registrable domain of {}", host);
    }
}
