//! Underlined source lines shown beneath a diagnostic.

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the columns to
/// underline.
///
/// # Examples
///
/// ```
/// use tpa_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("paite x # y;", 1, 9, 10);
/// assert_eq!(snippet.format(), "  1 | paite x # y;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    ///
    /// # Arguments
    ///
    /// * `line` - The source line content
    /// * `line_number` - Line number (1-based)
    /// * `start_column` - Column where the issue starts (1-based)
    /// * `end_column` - Column where the issue ends (1-based, exclusive)
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Width of the line-number gutter.
    pub fn gutter_width(&self) -> usize {
        self.line_number.to_string().len().max(3)
    }

    /// Format the snippet as two lines: the numbered source line and the
    /// caret underline. No trailing newline.
    ///
    /// Tabs before the underlined columns are repeated in the padding so the
    /// carets stay under the right characters whatever the tab width.
    pub fn format(&self) -> String {
        let width = self.gutter_width();
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);

        result.push_str(&format!("{:>width$} | ", ""));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        let padding: String = self
            .line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(underline_start)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        result.push_str(&padding);
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_snippet_format() {
        let snippet = SourceSnippet::new("sa s -> !\"abc", 4, 9, 14);
        assert_eq!(snippet.format(), "  4 | sa s -> !\"abc\n    |         ^^^^^");
    }

    #[test]
    fn test_underline_keeps_leading_tabs() {
        let snippet = SourceSnippet::new("\t\tpaite x # y;", 2, 11, 12);
        assert_eq!(snippet.format(), "  2 | \t\tpaite x # y;\n    | \t\t        ^");
    }

    #[test]
    fn test_underline_past_line_end() {
        let snippet = SourceSnippet::new("x", 1, 2, 3);
        assert_eq!(snippet.format(), "  1 | x\n    |  ^");
    }

    #[test]
    fn test_gutter_grows_with_line_number() {
        let snippet = SourceSnippet::new("x", 12345, 1, 2);
        assert_eq!(snippet.gutter_width(), 5);
        assert!(snippet.format().starts_with("12345 | x"));
    }
}
