//! HTML entity escaping for untrusted input.

/// Escape the HTML-significant characters `& < > " ' /`
///
/// A single left-to-right pass over the input; `&` produced by an earlier
/// escape can never be re-escaped, so output is stable under the documented
/// replacement order.
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ampersand_escapes_first() {
        // Exactly one level of escaping, never &amp;lt;
        assert_eq!(sanitize_input("&<>"), "&amp;&lt;&gt;");
    }

    #[test]
    fn test_all_significant_characters() {
        assert_eq!(
            sanitize_input(r#"<a href="/x" onclick='y'>&</a>"#),
            "&lt;a href=&quot;&#x2F;x&quot; onclick=&#39;y&#39;&gt;&amp;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn test_clean_input_unchanged() {
        assert_eq!(sanitize_input("plain text 123"), "plain text 123");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn test_already_escaped_input_escapes_again() {
        // The function is not idempotent by design; callers escape once
        assert_eq!(sanitize_input("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_multibyte_passthrough() {
        assert_eq!(sanitize_input("héllo <wörld>"), "héllo &lt;wörld&gt;");
    }
}
