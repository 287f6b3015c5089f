//! HTML-metacharacter escaping for stored submission fields.
//!
//! Submissions are rendered verbatim in the admin view, so every free-text
//! field is escaped before it hits the store. `&` maps to its entity first
//! so produced entities are not double-escaped.

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
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
    fn escapes_script_tags() {
        let escaped = escape_html("<script>alert('xss')</script>");

        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;&#x2F;script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_once() {
        assert_eq!(escape_html("a & b < c"), "a &amp; b &lt; c");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(
            escape_html(r#"say "hi" o'clock"#),
            "say &quot;hi&quot; o&#x27;clock"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(escape_html("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn handles_unicode() {
        assert_eq!(escape_html("héllo <b>wörld</b>"), "héllo &lt;b&gt;wörld&lt;&#x2F;b&gt;");
    }
}
