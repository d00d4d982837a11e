//! Splitting a URI reference into its five top-level parts.
//!
//! The scan follows the grammar of RFC 3986 Appendix B and only ever cuts at
//! the ASCII delimiters `:`, `/`, `?` and `#`, so multi-byte characters in any
//! part come through untouched. Nothing is decoded or validated here.

/// Raw parts of a URI reference, borrowed from the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawComponents<'a> {
    /// Text before the first `:`, if that colon comes before any `/`, `?` or `#`
    pub scheme: Option<&'a str>,
    /// Text after `//` up to the next `/`, `?`, `#` or the end
    pub authority: Option<&'a str>,
    /// Byte offset of the authority within the input
    pub authority_start: usize,
    /// Path, possibly empty
    pub path: &'a str,
    /// Text after `?`, without it
    pub query: Option<&'a str>,
    /// Text after `#`, without it
    pub fragment: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scheme,
    HierStart,
    Authority,
    Path,
    Query,
    Fragment,
}

/// Split `input` into scheme, authority, path, query and fragment.
///
/// Every input splits; a string without delimiters is a relative path.
pub fn split_url(input: &str) -> RawComponents<'_> {
    let bytes = input.as_bytes();
    let mut parts = RawComponents::default();
    let mut state = State::Scheme;
    let mut mark = 0;
    let mut i = 0;

    while i <= bytes.len() {
        let byte = bytes.get(i).copied();

        match (state, byte) {
            (State::Scheme, Some(b':')) if i > 0 => {
                parts.scheme = Some(&input[..i]);
                mark = i + 1;
                state = State::HierStart;
            }
            (State::Scheme, None | Some(b':' | b'/' | b'?' | b'#')) => {
                // No scheme: rescan the whole input as a relative reference.
                i = 0;
                mark = 0;
                state = State::HierStart;
                continue;
            }
            (State::Scheme, _) => {}
            (State::HierStart, _) => {
                if input[i..].starts_with("//") {
                    i += 2;
                    state = State::Authority;
                } else {
                    state = State::Path;
                }
                mark = i;
                continue;
            }
            (State::Authority, None | Some(b'/' | b'?' | b'#')) => {
                parts.authority = Some(&input[mark..i]);
                parts.authority_start = mark;
                mark = i;
                state = State::Path;
                continue;
            }
            (State::Path, Some(b'?')) => {
                parts.path = &input[mark..i];
                mark = i + 1;
                state = State::Query;
            }
            (State::Path, Some(b'#')) => {
                parts.path = &input[mark..i];
                mark = i + 1;
                state = State::Fragment;
            }
            (State::Path, None) => parts.path = &input[mark..i],
            (State::Query, Some(b'#')) => {
                parts.query = Some(&input[mark..i]);
                mark = i + 1;
                state = State::Fragment;
            }
            (State::Query, None) => parts.query = Some(&input[mark..i]),
            (State::Fragment, None) => parts.fragment = Some(&input[mark..i]),
            _ => {}
        }

        i += 1;
    }

    parts
}
