//! Text decoding helpers shared by the manifest reader and the merger

/// Translate `\r\n` and lone `\r` line endings to `\n`.
///
/// Files are treated as text, so every line ending in the output document
/// is a plain newline regardless of the platform a source was written on.
#[must_use]
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_and_lone_cr() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
    }

    #[test]
    fn test_cr_before_crlf() {
        assert_eq!(normalize_newlines("a\r\r\nb".to_string()), "a\n\nb");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize_newlines("a\nb".to_string()), "a\nb");
    }
}
