use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;

/// Characters escaped in keys and values: everything except the RFC 3986
/// unreserved marks that `encodeURIComponent` also leaves alone.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a key or value for use inside a filter string
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Decode a key or value taken from a filter string.
///
/// `+` is a space in query strings; a literal plus arrives as `%2B`.
/// Malformed escapes are kept as written.
pub fn decode_component(input: &str) -> String {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_characters_are_escaped() {
        assert_eq!(encode_component("foo:in"), "foo%3Ain");
        assert_eq!(encode_component("foo[bar]"), "foo%5Bbar%5D");
        assert_eq!(encode_component("a,b c"), "a%2Cb%20c");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("1+1"), "1%2B1");
    }

    #[test]
    fn test_unreserved_marks_pass_through() {
        assert_eq!(encode_component("10..20"), "10..20");
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }

    #[test]
    fn test_decode_handles_plus_and_bad_escapes() {
        assert_eq!(decode_component("hello+world"), "hello world");
        assert_eq!(decode_component("1%2B1"), "1+1");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz"), "%zz");
    }

    #[test]
    fn test_non_ascii_round_trips() {
        let encoded = encode_component("Größe");
        assert_eq!(encoded, "Gr%C3%B6%C3%9Fe");
        assert_eq!(decode_component(&encoded), "Größe");
    }
}
