//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, its dispatch loop and the
//! bookkeeping shared by the scanners in the sibling modules.

use tpa_util::Span;

use crate::cursor::Cursor;
use crate::error::LexDiagnostic;
use crate::symbols::SymbolTables;
use crate::token::{Token, TokenKind, CHAR_QUOTE, LINE_COMMENT, STRING_OPEN};

/// Lexer for the Tupã language.
///
/// Scans one unit of text (a whole file or a single line) into tokens. The
/// lexer is an iterator; faults show up as [`TokenKind::Error`] tokens and
/// the matching diagnostics are collected until [`Lexer::finish`].
///
/// # Examples
///
/// ```
/// use tpa_lex::{Lexer, SymbolTables, TokenKind};
///
/// let mut lexer = Lexer::new("paite x -> 42;", SymbolTables::global());
/// let kinds: Vec<_> = lexer.by_ref().map(|t| t.kind.describe()).collect();
/// assert_eq!(kinds, ["type keyword", "identifier", "operator", "integer", "punctuation"]);
/// assert!(lexer.finish().is_empty());
/// ```
pub struct Lexer<'src, 'tab> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Language tables consulted for words and symbols.
    pub(crate) tables: &'tab SymbolTables,

    /// Starting byte offset of the current token.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Faults found so far, in source order.
    diagnostics: Vec<LexDiagnostic>,
}

impl<'src, 'tab> Lexer<'src, 'tab> {
    /// Creates a lexer over `unit`, numbering lines from 1.
    pub fn new(unit: &'src str, tables: &'tab SymbolTables) -> Self {
        Self::with_first_line(unit, tables, 1)
    }

    /// Creates a lexer over `unit` whose first line is numbered `first_line`.
    pub fn with_first_line(unit: &'src str, tables: &'tab SymbolTables, first_line: u32) -> Self {
        let cursor = Cursor::with_line(unit, first_line);
        Self {
            token_start: 0,
            token_start_line: cursor.line(),
            token_start_column: 1,
            cursor,
            tables,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the next token, or `None` once the unit is exhausted.
    ///
    /// Whitespace is skipped. Every call that returns a token consumes at
    /// least one character.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        self.cursor.skip_whitespace();
        self.begin_token();

        if self.cursor.is_at_end() {
            return None;
        }

        let c = self.cursor.current_char();
        let kind = if self.cursor.starts_with(LINE_COMMENT) {
            self.lex_line_comment()
        } else if c.is_ascii_digit() {
            self.lex_number()
        } else if c == CHAR_QUOTE {
            self.lex_char()
        } else if self.cursor.starts_with(STRING_OPEN) {
            self.lex_string()
        } else if let Some(kind) = self.lex_boolean() {
            kind
        } else if let Some(kind) = self.lex_symbol() {
            kind
        } else if c.is_ascii_alphabetic() {
            self.lex_word()
        } else {
            self.lex_unknown()
        };

        Some(self.finish_token(kind))
    }

    /// Consumes the lexer and returns the diagnostics it collected.
    ///
    /// Any text not yet scanned is scanned first, so the result always
    /// covers the whole unit.
    pub fn finish(mut self) -> Vec<LexDiagnostic> {
        while self.next_token().is_some() {}
        self.diagnostics
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[LexDiagnostic] {
        &self.diagnostics
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte position in the unit.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn begin_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds the token spanning from the token start to the cursor, and
    /// records a diagnostic if it is an error token.
    fn finish_token(&mut self, kind: TokenKind) -> Token<'src> {
        let lexeme = self.cursor.slice_from(self.token_start);
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );

        if let TokenKind::Error(err) = kind {
            self.diagnostics.push(LexDiagnostic::new(err, lexeme, span));
        }

        Token::new(kind, lexeme, span)
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_, '_> {}
