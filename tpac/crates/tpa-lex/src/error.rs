//! Lexical error taxonomy.
//!
//! Every fault the scanner can detect is local: the offending fragment becomes
//! an error token, a [`LexDiagnostic`] is recorded, and scanning continues
//! right after the fragment.

use thiserror::Error;
use tpa_util::{Diagnostic, DiagnosticCode, Span};

/// Kinds of lexical fault.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// `!"` without a closing `"!` before the end of the unit
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A character that starts no token
    #[error("unknown token")]
    UnknownToken,

    /// A digit run with more than one `.`
    #[error("malformed number literal")]
    MalformedNumber,

    /// A `'` that does not form `'x'`
    #[error("malformed character literal")]
    MalformedCharLiteral,
}

impl LexErrorKind {
    /// Stable code used when the fault is presented to a user.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::MalformedNumber => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexErrorKind::UnknownToken => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            LexErrorKind::MalformedCharLiteral => DiagnosticCode::E_LEXER_MALFORMED_CHAR,
        }
    }

    /// A one-line suggestion for fixing the fault.
    pub fn help(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "close the string with `\"!`",
            LexErrorKind::UnknownToken => "remove the character or replace it with a valid symbol",
            LexErrorKind::MalformedNumber => "a number may contain at most one `.`",
            LexErrorKind::MalformedCharLiteral => {
                "a character literal holds exactly one character, as in `'x'`"
            }
        }
    }

    /// Message for a fault over `fragment`.
    ///
    /// Unterminated strings can run to the end of a file, so their text is
    /// left out.
    pub fn message(&self, fragment: &str) -> String {
        match self {
            LexErrorKind::UnterminatedString => self.to_string(),
            _ => format!("{self} `{fragment}`"),
        }
    }
}

/// A lexical fault found during a scan.
///
/// # Examples
///
/// ```
/// use tpa_lex::{scan, LexErrorKind, SymbolTables};
///
/// let out = scan("paite x # 1;", SymbolTables::global());
/// let diag = &out.diagnostics[0];
/// assert_eq!(diag.kind, LexErrorKind::UnknownToken);
/// assert_eq!(diag.message, "unknown token `#`");
/// assert_eq!((diag.span.line, diag.span.column), (1, 9));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message} at {span}")]
pub struct LexDiagnostic {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Human-readable description, including the fragment where useful.
    pub message: String,
    /// Location of the offending fragment.
    pub span: Span,
}

impl LexDiagnostic {
    /// Creates a diagnostic for `fragment` at `span`.
    pub fn new(kind: LexErrorKind, fragment: &str, span: Span) -> Self {
        Self {
            kind,
            message: kind.message(fragment),
            span,
        }
    }

    /// Converts into a presentation diagnostic with code and help line.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message.clone(), self.span)
            .with_code(self.kind.code())
            .with_help(self.kind.help())
    }
}

impl From<&LexDiagnostic> for Diagnostic {
    fn from(diag: &LexDiagnostic) -> Self {
        diag.to_diagnostic()
    }
}

impl From<LexDiagnostic> for Diagnostic {
    fn from(diag: LexDiagnostic) -> Self {
        Diagnostic::error(diag.message, diag.span)
            .with_code(diag.kind.code())
            .with_help(diag.kind.help())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpa_util::{Level, SourceFile};

    #[test]
    fn test_kind_display() {
        assert_eq!(LexErrorKind::UnterminatedString.to_string(), "unterminated string literal");
        assert_eq!(LexErrorKind::MalformedNumber.to_string(), "malformed number literal");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexErrorKind::UnterminatedString.code().as_str(), "E1002");
        assert_eq!(LexErrorKind::MalformedNumber.code().as_str(), "E1003");
        assert_eq!(LexErrorKind::UnknownToken.code().as_str(), "E1004");
        assert_eq!(LexErrorKind::MalformedCharLiteral.code().as_str(), "E1005");
    }

    #[test]
    fn test_message_includes_fragment() {
        let diag = LexDiagnostic::new(LexErrorKind::MalformedNumber, "1.2.3", Span::new(0, 5, 1, 1));
        assert_eq!(diag.message, "malformed number literal `1.2.3`");
        assert_eq!(diag.to_string(), "malformed number literal `1.2.3` at 1:1");
    }

    #[test]
    fn test_unterminated_message_omits_fragment() {
        let diag = LexDiagnostic::new(
            LexErrorKind::UnterminatedString,
            "!\"a very long tail",
            Span::new(0, 18, 1, 1),
        );
        assert_eq!(diag.message, "unterminated string literal");
    }

    #[test]
    fn test_to_diagnostic() {
        let diag = LexDiagnostic::new(LexErrorKind::UnknownToken, "#", Span::new(8, 9, 1, 9));
        let converted: Diagnostic = (&diag).into();
        assert_eq!(converted.level, Level::Error);
        assert_eq!(converted.code, Some(DiagnosticCode::E_LEXER_UNKNOWN_TOKEN));
        assert_eq!(converted.helps.len(), 1);
        assert_eq!(converted, Diagnostic::from(diag));
    }

    #[test]
    fn test_rendered_against_source() {
        let file = SourceFile::new("input.tpa", "paite x # 1;");
        let diag = LexDiagnostic::new(LexErrorKind::UnknownToken, "#", Span::new(8, 9, 1, 9));
        let rendered = diag.to_diagnostic().render(&file);
        assert!(rendered.starts_with("error[E1004]: unknown token `#`"));
        assert!(rendered.contains("  1 | paite x # 1;"));
    }
}
