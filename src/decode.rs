//! Primitive request decoders
//!
//! The lowest layer of the extraction pipeline: base64 and percent decoding
//! plus the Unicode safety check applied to values that end up embedded in
//! SQL-adjacent query contexts downstream. Excluding control characters here
//! is defense in depth, not a substitute for parameterized queries.

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::errors::{ExtractError, ExtractResult};

lazy_static! {
    /// Unicode Cc/Cf/Co code points, minus tab and line feed
    static ref UNSAFE_CONTROL_CHARS: Regex =
        Regex::new(r"[[\p{Cc}\p{Cf}\p{Co}]--[\t\n]]").unwrap();
}

/// Decode base64 input, falling back from the standard alphabet to the
/// URL-safe alphabet, then to the URL-safe alphabet without padding. The
/// first successful decode wins.
pub fn decode_base64_any(input: &str) -> ExtractResult<Vec<u8>> {
    general_purpose::STANDARD
        .decode(input)
        .or_else(|_| general_purpose::URL_SAFE.decode(input))
        .or_else(|_| general_purpose::URL_SAFE_NO_PAD.decode(input))
        .map_err(|e| ExtractError::Decode(format!("base64 decoding failed: {e}")))
}

/// Check that a value is safe text for use in query contexts: optionally
/// base64-decode it (with the fallback chain above), require valid UTF-8,
/// then reject Unicode control and other-category code points. Tab and line
/// feed are the only control characters allowed through.
pub fn check_unicode(raw_input: &str, decode_base64: bool) -> ExtractResult<String> {
    let decoded = if decode_base64 {
        decode_base64_any(raw_input)?
    } else {
        raw_input.as_bytes().to_vec()
    };

    let text = String::from_utf8(decoded).map_err(|_| {
        ExtractError::UnsafeCharacter("string contains invalid characters".to_string())
    })?;

    if UNSAFE_CONTROL_CHARS.is_match(&text) {
        return Err(ExtractError::UnsafeCharacter(
            "string contains invalid characters".to_string(),
        ));
    }

    Ok(text)
}

/// Percent-decode a URL query component. `+` decodes to a space, and every
/// `%` must introduce a two-hex-digit escape.
pub fn unescape_query_component(input: &str) -> ExtractResult<String> {
    // percent_decode_str passes malformed escapes through untouched, so
    // reject them up front.
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                let escape = String::from_utf8_lossy(&bytes[i..bytes.len().min(i + 3)]);
                return Err(ExtractError::Decode(format!(
                    "invalid URL escape \"{escape}\""
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let replaced = input.replace('+', " ");
    let decoded = percent_decode_str(&replaced)
        .decode_utf8()
        .map_err(|e| ExtractError::Decode(format!("decoded value is not valid UTF-8: {e}")))?;
    Ok(decoded.into_owned())
}

/// Strict boolean parser: accepts `1`, `t`, `T`, `true`, `TRUE`, `True` and
/// their false counterparts, nothing else.
pub fn parse_bool(input: &str) -> ExtractResult<bool> {
    match input {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ExtractError::Decode(format!(
            "cannot parse '{input}' as a boolean"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_base64_standard_alphabet() {
        let bytes = b"hello world".to_vec();
        let encoded = general_purpose::STANDARD.encode(&bytes);
        assert_eq!(decode_base64_any(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_base64_url_safe_fallback() {
        // 0xfb encodes to '-' in the URL-safe alphabet, which the standard
        // alphabet rejects
        let bytes = vec![0xfbu8, 0xef, 0xbe];
        let encoded = general_purpose::URL_SAFE.encode(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert_eq!(decode_base64_any(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_base64_url_safe_unpadded_fallback() {
        let bytes = vec![0xfbu8, 0xef];
        let encoded = general_purpose::URL_SAFE_NO_PAD.encode(&bytes);
        assert!(!encoded.ends_with('='));
        assert_eq!(decode_base64_any(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_base64_garbage_fails() {
        let err = decode_base64_any("not base64 at all!").unwrap_err();
        assert!(matches!(err, ExtractError::Decode(_)));
    }

    #[test]
    fn test_check_unicode_printable_passthrough() {
        let input = "SELECT * FROM 'table1'\twith\ntabs and newlines";
        assert_eq!(check_unicode(input, false).unwrap(), input);
    }

    #[test_case("null\u{0}byte")]
    #[test_case("bell\u{7}")]
    #[test_case("escape\u{1b}[31m")]
    #[test_case("c1 control\u{85}here")]
    #[test_case("zero width\u{200b}space")]
    fn test_check_unicode_rejects_control_chars(input: &str) {
        let err = check_unicode(input, false).unwrap_err();
        assert!(matches!(err, ExtractError::UnsafeCharacter(_)));
    }

    #[test]
    fn test_check_unicode_with_base64() {
        let encoded = general_purpose::STANDARD.encode("safe text");
        assert_eq!(check_unicode(&encoded, true).unwrap(), "safe text");

        let encoded = general_purpose::STANDARD.encode("evil\u{0}text");
        assert!(check_unicode(&encoded, true).is_err());

        // Invalid UTF-8 after decoding
        let encoded = general_purpose::STANDARD.encode([0xffu8, 0xfe]);
        assert!(check_unicode(&encoded, true).is_err());
    }

    #[test_case("alice%20db", "alice db")]
    #[test_case("a+b", "a b")]
    #[test_case("caf%C3%A9", "café")]
    #[test_case("plain", "plain")]
    fn test_unescape_query_component(input: &str, expected: &str) {
        assert_eq!(unescape_query_component(input).unwrap(), expected);
    }

    #[test_case("bad%zzescape")]
    #[test_case("truncated%2")]
    #[test_case("lone%")]
    fn test_unescape_malformed(input: &str) {
        let err = unescape_query_component(input).unwrap_err();
        assert!(matches!(err, ExtractError::Decode(_)));
    }

    #[test]
    fn test_unescape_invalid_utf8() {
        assert!(unescape_query_component("%ff%fe").is_err());
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true; "uppercase_true")]
    #[test_case("1", true)]
    #[test_case("t", true)]
    #[test_case("false", false)]
    #[test_case("False", false; "capitalized_false")]
    #[test_case("0", false)]
    fn test_parse_bool(input: &str, expected: bool) {
        assert_eq!(parse_bool(input).unwrap(), expected);
    }

    #[test_case("notabool")]
    #[test_case("yes")]
    #[test_case("")]
    fn test_parse_bool_rejects(input: &str) {
        assert!(parse_bool(input).is_err());
    }
}
