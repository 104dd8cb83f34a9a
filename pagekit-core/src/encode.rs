//! URI component percent-encoding.
//!
//! Matches the browser's `encodeURIComponent`: ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )` pass through, every other UTF-8 byte becomes `%XX`
//! with uppercase hex.

use std::fmt::Write;

const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-encode `input` as a URI component.
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_passes_through() {
        let raw = "AZaz09-_.!~*'()";
        assert_eq!(encode_uri_component(raw), raw);
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(encode_uri_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_uri_component("Jo Doe"), "Jo%20Doe");
        assert_eq!(encode_uri_component("jo@x.com"), "jo%40x.com");
        assert_eq!(encode_uri_component("?/#+,;:$"), "%3F%2F%23%2B%2C%3B%3A%24");
    }

    #[test]
    fn unicode_is_utf8_encoded() {
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component("\u{2019}"), "%E2%80%99");
        assert_eq!(encode_uri_component("🦀"), "%F0%9F%A6%80");
    }

    #[test]
    fn newlines_are_escaped() {
        assert_eq!(encode_uri_component("hi\r\nthere"), "hi%0D%0Athere");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(encode_uri_component(""), "");
    }
}
