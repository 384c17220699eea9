//! Canonical representations of request parameters.
//!
//! Everything in here is pure: the same input always yields the same string,
//! so servers that recompute a signature byte-for-byte arrive at the same value.

use percent_encoding::utf8_percent_encode;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// AsciiSet for [RFC 3986 percent encoding](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static UNRESERVED_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent encode input with [`UNRESERVED_ENCODE_SET`].
///
/// Spaces become `%20`, never `+`.
#[inline]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, &UNRESERVED_ENCODE_SET).to_string()
}

/// Sort pairs by key, then value, and join them.
///
/// The comparison is ordinal (byte order), which is the same as code point
/// order for UTF-8.
///
/// ```shell
/// [(b, 2), (a, 1)] => "a=1&b=2"
/// ```
pub fn join_sorted(mut pairs: Vec<(String, String)>, sep: &str, join: &str) -> String {
    pairs.sort();

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.into_iter().enumerate() {
        if idx != 0 {
            s.push_str(join);
        }

        s.push_str(&k);
        s.push_str(sep);
        s.push_str(&v);
    }

    s
}

/// Percent encode both key and value of every pair, then sort and join them
/// as `k=v&k=v`.
pub fn encode_and_join_sorted(pairs: &[(String, String)]) -> String {
    join_sorted(
        pairs
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect(),
        "=",
        "&",
    )
}
