//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and rendering
//! diagnostics (errors and warnings with help messages).
//!
//! Diagnostics are plain values. Whoever produces them returns them to the
//! caller; nothing here counts or stores them globally.
//!
//! # Examples
//!
//! ```
//! use tpa_util::diagnostic::{Diagnostic, DiagnosticCode};
//! use tpa_util::Span;
//!
//! let diag = Diagnostic::error("unterminated string literal", Span::new(7, 13, 1, 8))
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .with_help("close the string with `\"!`");
//! assert!(diag.level.is_error());
//! ```

mod codes;
mod snippet;

pub use codes::DiagnosticCode;
pub use snippet::SourceSnippet;

use crate::span::{SourceFile, Span};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use tpa_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A fault in the input
    Error,
    /// Suspicious but accepted input
    Warning,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the file it was reported in.
    ///
    /// ```text
    /// error[E1004]: unknown token '#'
    ///   --> input.tpa:1:9
    ///     |
    ///   1 | paite x # y;
    ///     |         ^
    ///     = help: remove the character
    /// ```
    ///
    /// If the span cannot be mapped onto the file the location line is still
    /// printed and the snippet is left out.
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = format!("{}\n", self);
        out.push_str(&format!(
            "  --> {}:{}:{}\n",
            file.name(),
            self.span.line,
            self.span.column
        ));

        if let Ok(snippet) = file.snippet(self.span) {
            let gutter = snippet.gutter_width();
            out.push_str(&format!("{:>width$} |\n", "", width = gutter));
            out.push_str(&snippet.format());
            out.push('\n');
        }

        let gutter = (self.span.line.to_string().len()).max(3);
        for help in &self.helps {
            out.push_str(&format!("{:>width$} = help: {}\n", "", help, width = gutter));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}
