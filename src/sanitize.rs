//! Output sanitization helpers
//!
//! User-controlled values are sanitized before they are written to logs or
//! echoed back in error messages, to prevent log injection and markup
//! injection respectively.

/// Make a user-controlled string safe to embed in a single-quoted log line:
/// newlines become spaces, carriage returns are dropped, and single quotes
/// are escaped.
pub fn sanitise_log_string(value: &str) -> String {
    value
        .replace('\n', " ")
        .replace('\r', "")
        .replace('\'', "\\'")
}

/// Minimal HTML entity escaping, for echoing a rejected value back inside an
/// error message
pub fn escape_html(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitise_log_string() {
        assert_eq!(
            sanitise_log_string("bad\ninput's\r value"),
            "bad input\\'s value"
        );
    }

    #[test]
    fn test_sanitise_log_string_clean_input_unchanged() {
        assert_eq!(sanitise_log_string("perfectly ordinary"), "perfectly ordinary");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert('x & "y"')</script>"#),
            "&lt;script&gt;alert(&#39;x &amp; &#34;y&#34;&#39;)&lt;/script&gt;"
        );
    }
}
