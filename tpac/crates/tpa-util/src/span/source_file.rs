//! Source files with precomputed line offsets.
//!
//! [`SourceFile`] answers the questions a diagnostic renderer asks: which line
//! does this offset fall on, what is the text of that line, and which columns
//! of it does a span cover.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use tpa_util::span::SourceFile;
///
/// let file = SourceFile::new("input.tpa", "tuichaveva\npaha");
/// assert_eq!(file.name(), "input.tpa");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];

        for (i, byte) in content.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use tpa_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.tpa", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to 1-indexed (line, column) coordinates.
    ///
    /// Columns count characters from the start of the line, matching the
    /// columns the lexer assigns to tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use tpa_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.tpa", "paite x;\nsa y;");
    /// assert_eq!(file.offset_to_line_col(6), (1, 7));
    /// assert_eq!(file.offset_to_line_col(12), (2, 4));
    /// ```
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(insert_point) => insert_point.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let end = offset.min(self.content.len());
        let col = self
            .content
            .get(line_start..end)
            .map_or(end - line_start, |text| text.chars().count())
            + 1;
        (line + 1, col)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use tpa_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.tpa", "line1\r\nline2");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }

    /// Build the snippet shown under a diagnostic for `span`.
    ///
    /// Spans that run past the end of their first line (an unterminated
    /// string in a whole-file scan) are underlined up to the end of that line.
    pub fn snippet(&self, span: Span) -> SourceResult<SourceSnippet> {
        let text = self.extract_range(span.start, span.end)?;
        let line_number = span.line as usize;
        let line = self
            .line_at(line_number)
            .ok_or(SourceError::InvalidLineNumber {
                line: line_number,
                max_lines: self.line_count(),
            })?;

        let start_column = (span.column as usize).max(1);
        let line_width = line.chars().count();
        let first_line_width = text.lines().next().map_or(0, |l| l.chars().count());
        let end_column = (start_column + first_line_width.max(1)).min(line_width + 1);

        Ok(SourceSnippet::new(
            line,
            line_number,
            start_column,
            end_column.max(start_column + 1),
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}
