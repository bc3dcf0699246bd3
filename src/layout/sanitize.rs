//! Text sanitizing and string-literal escaping.
//!
//! The simple text-show operator with the two standard Type1 fonts only
//! covers printable ASCII (0x20..=0x7E). Everything else is replaced by a
//! space before whitespace is collapsed.

/// Collapse whitespace, strip non-printable-ASCII characters and trim.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c == ' ' || c.is_ascii_graphic() {
            if c == ' ' {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Sanitize and escape text for a content-stream string literal.
pub fn escape(text: &str) -> String {
    let safe = sanitize(text);
    let mut out = String::with_capacity(safe.len() + 8);
    for c in safe.chars() {
        if matches!(c, '\\' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Sanitize and cut to at most `max_chars`, ending with `...` when cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let safe = sanitize(text);
    if safe.len() <= max_chars {
        return safe;
    }

    // Sanitized text is ASCII, so byte and char indices agree.
    let keep = max_chars.saturating_sub(3);
    format!("{}...", &safe[..keep])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize("  Hello,\r\n\tworld  "), "Hello, world");
        assert_eq!(sanitize("a    b\n\nc"), "a b c");
    }

    #[test]
    fn test_sanitize_strips_non_ascii() {
        assert_eq!(sanitize("Caf\u{e9} au lait"), "Caf au lait");
        assert_eq!(sanitize("Net \u{2014} benefit"), "Net benefit");
        assert_eq!(sanitize("\u{1F600}"), "");
        assert_eq!(sanitize("bell\u{7}char"), "bell char");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(" \n\t "), "");
    }

    #[test]
    fn test_escape_reserved() {
        assert_eq!(escape(r"ROI (est.) \ NPV"), r"ROI \(est.\) \\ NPV");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Acme Co", 10), "Acme Co");
        assert_eq!(truncate_with_ellipsis("abcdefghijkl", 10), "abcdefg...");
        assert_eq!(truncate_with_ellipsis(&"x".repeat(90), 70).len(), 70);
    }
}
