//! Markup escaping for untrusted input text

/// Escapes the markup-significant characters (`& < > " '`) in `input` so
/// arbitrary terminal output cannot inject structural HTML.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_significant_chars() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn leaves_escape_bytes_and_text_alone() {
        assert_eq!(escape("\u{1b}[31m ok"), "\u{1b}[31m ok");
    }
}
