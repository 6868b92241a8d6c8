/// Opening tag placed before every substituted span
pub const HIGHLIGHT_OPEN: &str = r#"<span class="highlight">"#;

/// Closing tag placed after every substituted span
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Wrap a substituted span in highlight markup
///
/// The text is inserted as-is; markup-significant characters are not escaped.
pub fn highlight(text: &str) -> String {
    format!("{HIGHLIGHT_OPEN}{text}{HIGHLIGHT_CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight() {
        assert_eq!(
            highlight("favourite"),
            r#"<span class="highlight">favourite</span>"#
        );
    }

    #[test]
    fn test_highlight_does_not_escape() {
        assert_eq!(
            highlight("fish & <chips>"),
            r#"<span class="highlight">fish & <chips></span>"#
        );
    }
}
