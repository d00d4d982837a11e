//! Stateless encoding primitives shared by every component validator.
//!
//! - Percent-encoding against per-component character classes
//! - IDNA conversion of host names

pub mod codec;
pub mod percent;

pub use codec::{is_ascii_host, to_ascii};
pub use percent::{encode_except, normalize_and_encode, normalize_percent};
