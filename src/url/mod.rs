//! URL processing: splitting, host handling and component validation.
//!
//! This module contains URL-related functionality:
//! - Splitting URI references and authorities without a general URL parser
//! - In-place IDNA encoding of hosts
//! - Public Suffix List (PSL) matching
//! - The scheme registry
//! - The component validator

pub mod authority;
pub mod normalizer;
pub mod psl;
pub mod schemes;
pub mod splitter;
pub mod validator;

// Re-export main functionality
pub use authority::{authority_from_url, encode_idn_host_in_url, split_authority, AuthorityParts};
pub use normalizer::{is_ip_literal, normalize_dns_name, normalize_host, validate_dns_label, validate_host};
pub use psl::SuffixList;
pub use schemes::{is_scheme_syntax, SchemeRegistry};
pub use splitter::{split_url, RawComponents};
pub use validator::Validator;
