//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into a scanned unit together with the line and column of
//! the first character.
//!
//! # Examples
//!
//! ```
//! use tpa_util::span::Span;
//!
//! // "paha" at the start of line 3
//! let span = Span::new(40, 44, 3, 1);
//! assert_eq!(span.len(), 4);
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), end exclusive
/// - Line and column numbers of `start` (1-based, columns count characters)
///
/// # Examples
///
/// ```
/// use tpa_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use tpa_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Byte range covered by this span, for slicing the source it came from.
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Moves the byte offsets forward by `delta`, keeping line and column.
    ///
    /// Used to place a span scanned from one line of a file back into the
    /// whole file.
    ///
    /// ```
    /// use tpa_util::span::Span;
    ///
    /// let span = Span::new(2, 4, 3, 3).shifted(20);
    /// assert_eq!(span, Span::new(22, 24, 3, 3));
    /// ```
    #[inline]
    pub fn shifted(self, delta: usize) -> Span {
        Span {
            start: self.start + delta,
            end: self.end + delta,
            ..self
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
