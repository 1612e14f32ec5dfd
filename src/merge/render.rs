//! Block formatting for the output document
//!
//! Every block starts with a newline, so consecutive blocks are separated by
//! a blank line.

/// Width of the separator line around a file header.
pub const SEPARATOR_WIDTH: usize = 50;

/// Separator line around a file header.
pub const SEPARATOR: &str = "==================================================";

/// Block for a successfully read file.
///
/// A newline is always appended after `content`, even if it already ends
/// with one.
pub fn render_merged(relative: &str, content: &str) -> String {
    format!("\n{SEPARATOR}\nFile: {relative}\n{SEPARATOR}\n\n{content}\n")
}

/// Placeholder for a path that doesn't exist or isn't a regular file.
pub fn render_missing(relative: &str) -> String {
    format!("\n!! [MISSING FILE] {relative} !!\n")
}

/// Placeholder for a file that exists but couldn't be read.
pub fn render_error(relative: &str, message: &str) -> String {
    format!("\n!! [ERROR READING] {relative}: {message} !!\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), SEPARATOR_WIDTH);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn test_render_merged() {
        let block = render_merged("src/a.txt", "hello");
        let expected = format!("\n{0}\nFile: src/a.txt\n{0}\n\nhello\n", "=".repeat(50));
        assert_eq!(block, expected);
    }

    #[test]
    fn test_render_merged_always_appends_newline() {
        assert!(render_merged("a", "line\n").ends_with("line\n\n"));
        assert!(render_merged("a", "").ends_with("\n\n\n"));
    }

    #[test]
    fn test_render_placeholders() {
        assert_eq!(render_missing("b.txt"), "\n!! [MISSING FILE] b.txt !!\n");
        assert_eq!(
            render_error("c.txt", "permission denied"),
            "\n!! [ERROR READING] c.txt: permission denied !!\n"
        );
    }
}
