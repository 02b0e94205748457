//! tpa-lex - Lexical Analyzer for the Tupã Language
//!
//! This crate turns source text into a stream of classified tokens. It is
//! error tolerant: a fault never stops a scan, it becomes an error token
//! plus a diagnostic and scanning continues after the offending fragment.
//!
//! The lexer performs no I/O. Callers hand it a unit of text (a whole file
//! or a single line) and the shared [`SymbolTables`], and get back tokens and
//! diagnostics.
//!
//! # Example Usage
//!
//! ```
//! use tpa_lex::{scan, Keyword, SymbolTables, TokenKind};
//!
//! let out = scan("ramoramo !( x >= 10 )! !{ koseva x; }!", SymbolTables::global());
//! assert!(out.diagnostics.is_empty());
//! assert_eq!(out.tokens[0].kind, TokenKind::Keyword(Keyword::If));
//! assert_eq!(out.tokens.len(), 11);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`symbols`] - Fixed keyword and symbol tables
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical error kinds and diagnostics
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `tuichaveva`, `paha`, `ramoramo`, `neiramo`, `upe_aja`, `guara`, `kjaike`,
//! `koseva`. The old loop spellings `upeaja` and `upeicharo` are still read
//! as `upe_aja`.
//!
//! ## Type Keywords
//!
//! `paite` (integer), `anate` (real), `bool`, `sa` (string), `kar`
//! (character).
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Real**: `3.14`, `1.`
//! - **String**: `!"hello world"!`
//! - **Character**: `'x'`
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Assignment**: `->`
//! - **Equality**: `==`, `=!=`
//! - **Logical**: `&` (and), `&!` (or)
//! - **Arithmetic**: `+`, `-`, `*`, `%` (division)
//! - **Relational**: `>`, `<`, `>=`, `<=`, `=`
//!
//! ## Delimiters
//!
//! - **Grouping**: `!( )!`, `!{ }!`, `( )`, `{ }`, `[ ]`
//! - **Separation**: `;`, `,`, `:`
//!
//! ## Comments
//!
//! `//` to the end of the line, kept as [`TokenKind::Comment`] tokens.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod symbols;
pub mod token;

mod edge_cases;
mod properties;

// Re-export main types for convenience
pub use error::{LexDiagnostic, LexErrorKind};
pub use lexer::Lexer;
pub use symbols::SymbolTables;
pub use token::{Bracket, Keyword, Operator, Punctuation, Relational, Token, TokenKind, TypeKeyword};

/// Tokens and diagnostics produced by scanning one unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput<'src> {
    /// Every token of the unit, in source order, including comments and
    /// error tokens.
    pub tokens: Vec<Token<'src>>,
    /// One diagnostic per error token, in source order.
    pub diagnostics: Vec<LexDiagnostic>,
}

impl<'src> ScanOutput<'src> {
    /// Returns true if any lexical fault was found.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Tokens other than comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|t| !t.kind.is_trivia())
    }
}

/// Scans `unit` in one pass, numbering lines from 1.
pub fn scan<'src>(unit: &'src str, tables: &SymbolTables) -> ScanOutput<'src> {
    scan_from(unit, tables, 1)
}

/// Scans `unit` in one pass, numbering its first line `first_line`.
///
/// Line mode feeds each line of a file separately and uses this so that
/// spans still carry file line numbers.
///
/// ```
/// use tpa_lex::{scan_from, SymbolTables};
///
/// let out = scan_from("koseva #;", SymbolTables::global(), 4);
/// assert_eq!(out.diagnostics[0].span.line, 4);
/// ```
pub fn scan_from<'src>(unit: &'src str, tables: &SymbolTables, first_line: u32) -> ScanOutput<'src> {
    let mut lexer = Lexer::with_first_line(unit, tables, first_line);
    let tokens = lexer.by_ref().collect();
    ScanOutput {
        tokens,
        diagnostics: lexer.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source, SymbolTables::global())
            .tokens
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_conditional_block() {
        let source = "ramoramo !( sa x )! !{ koseva !\"hi\"! ; }!";
        let out = scan(source, SymbolTables::global());

        assert!(out.diagnostics.is_empty());
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Keyword(Keyword::If),
                TokenKind::Bracket(Bracket::ParenOpen),
                TokenKind::TypeKeyword(TypeKeyword::Sa),
                TokenKind::Identifier,
                TokenKind::Bracket(Bracket::ParenClose),
                TokenKind::Bracket(Bracket::BlockOpen),
                TokenKind::Keyword(Keyword::Output),
                TokenKind::StringLiteral,
                TokenKind::Punctuation(Punctuation::StatementEnd),
                TokenKind::Bracket(Bracket::BlockClose),
            ]
        );
        assert_eq!(out.tokens[7].value(), "hi");
    }

    #[test]
    fn test_whole_program() {
        let source = "tuichaveva\n\
                      paite n -> 10;\n\
                      anate media -> 2.5;\n\
                      kar letra -> 'a';\n\
                      bool ok -> true;\n\
                      upe_aja !( n > 0 )! !{\n\
                      \x20   koseva n;\n\
                      \x20   n -> n - 1;\n\
                      }!\n\
                      paha\n";
        let out = scan(source, SymbolTables::global());

        assert!(!out.has_errors());
        let first = out.tokens.first().unwrap();
        let last = out.tokens.last().unwrap();
        assert_eq!(first.kind, TokenKind::Keyword(Keyword::ProgramStart));
        assert_eq!(last.kind, TokenKind::Keyword(Keyword::ProgramEnd));
        assert_eq!(last.line(), 10);
        assert!(out.tokens.iter().any(|t| t.kind == TokenKind::Real));
        assert!(out.tokens.iter().any(|t| t.kind == TokenKind::CharLiteral));
        assert!(out.tokens.iter().any(|t| t.kind == TokenKind::Boolean));
        assert!(out
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::Keyword(Keyword::Loop)));
    }

    #[test]
    fn test_error_recovery_continues() {
        let out = scan("paite x -> # 42;", SymbolTables::global());

        assert_eq!(
            kinds("paite x -> # 42;"),
            vec![
                TokenKind::TypeKeyword(TypeKeyword::Paite),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Assign),
                TokenKind::Error(LexErrorKind::UnknownToken),
                TokenKind::Integer,
                TokenKind::Punctuation(Punctuation::StatementEnd),
            ]
        );
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].span.column, 12);
    }

    #[test]
    fn test_unterminated_string_then_clean_unit() {
        let tables = SymbolTables::global();
        let broken = scan("koseva !\"oops", tables);
        assert_eq!(broken.diagnostics.len(), 1);
        assert_eq!(broken.diagnostics[0].kind, LexErrorKind::UnterminatedString);
        assert_eq!(broken.tokens[1].lexeme, "!\"oops");

        let clean = scan("koseva x;", tables);
        assert!(clean.diagnostics.is_empty());
    }

    #[test]
    fn test_multiline_string_in_file_mode() {
        let out = scan("sa s -> !\"one\ntwo\"!;\npaha", SymbolTables::global());
        assert!(out.diagnostics.is_empty());
        assert_eq!(out.tokens[3].value(), "one\ntwo");
        assert_eq!(out.tokens[5].line(), 3);
    }

    #[test]
    fn test_operators_in_expression() {
        assert_eq!(
            kinds("a =!= b &! c & d == e"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Different),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Or),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::And),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Equals),
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_arithmetic_without_spaces() {
        assert_eq!(
            kinds("x->a+b*c%d-1"),
            vec![
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Assign),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Add),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Multiply),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Divide),
                TokenKind::Identifier,
                TokenKind::Operator(Operator::Subtract),
                TokenKind::Integer,
            ]
        );
    }

    #[test]
    fn test_input_statement() {
        assert_eq!(
            kinds("kjaike !( x , y )!;"),
            vec![
                TokenKind::Keyword(Keyword::Input),
                TokenKind::Bracket(Bracket::ParenOpen),
                TokenKind::Identifier,
                TokenKind::Punctuation(Punctuation::ArgumentSeparator),
                TokenKind::Identifier,
                TokenKind::Bracket(Bracket::ParenClose),
                TokenKind::Punctuation(Punctuation::StatementEnd),
            ]
        );
    }

    #[test]
    fn test_comment_is_kept_and_filtered() {
        let out = scan("paha // end\n", SymbolTables::global());
        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.tokens[1].lexeme, "// end");
        assert_eq!(out.significant().count(), 1);
    }

    #[test]
    fn test_line_column_tracking() {
        let out = scan("tuichaveva\n  paite x;\npaha", SymbolTables::global());
        let positions: Vec<_> = out.tokens.iter().map(|t| (t.line(), t.column())).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 9), (2, 10), (3, 1)]);
    }

    #[test]
    fn test_scan_from_numbers_lines() {
        let out = scan_from("x\ny", SymbolTables::global(), 5);
        assert_eq!(out.tokens[0].line(), 5);
        assert_eq!(out.tokens[1].line(), 6);
    }

    #[test]
    fn test_diagnostics_in_source_order() {
        let out = scan("1.2.3 @ 'ab' !\"x", SymbolTables::global());
        let found: Vec<_> = out.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            found,
            vec![
                LexErrorKind::MalformedNumber,
                LexErrorKind::UnknownToken,
                LexErrorKind::MalformedCharLiteral,
                LexErrorKind::UnterminatedString,
            ]
        );
        let error_tokens = out.tokens.iter().filter(|t| t.is_error()).count();
        assert_eq!(error_tokens, out.diagnostics.len());
    }

    #[test]
    fn test_empty_source() {
        let out = scan("", SymbolTables::global());
        assert!(out.tokens.is_empty());
        assert!(!out.has_errors());
    }
}
