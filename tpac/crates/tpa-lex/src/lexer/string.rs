//! String and character literal lexing.

use crate::error::LexErrorKind;
use crate::token::{TokenKind, CHAR_QUOTE, STRING_CLOSE, STRING_OPEN};
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a `!"..."!` string literal.
    ///
    /// The interior is taken raw: no escapes, whitespace and line breaks
    /// kept. Without a closing `"!` the rest of the unit becomes an
    /// unterminated string error.
    pub(crate) fn lex_string(&mut self) -> TokenKind {
        self.cursor.advance_n(STRING_OPEN.len());

        while !self.cursor.is_at_end() {
            if self.cursor.starts_with(STRING_CLOSE) {
                self.cursor.advance_n(STRING_CLOSE.len());
                return TokenKind::StringLiteral;
            }
            self.cursor.advance();
        }

        TokenKind::Error(LexErrorKind::UnterminatedString)
    }

    /// Lexes a `'x'` character literal.
    ///
    /// Any other shape is malformed. The error runs to the next `'` when one
    /// closes the fragment before whitespace or the end of the line, and is
    /// only the opening quote otherwise.
    pub(crate) fn lex_char(&mut self) -> TokenKind {
        let inner = self.cursor.peek_char(1);
        let rest = self.cursor.remaining();
        let has_inner = rest.chars().nth(1).is_some();

        if has_inner
            && inner != CHAR_QUOTE
            && inner != '\n'
            && self.cursor.peek_char(2) == CHAR_QUOTE
        {
            self.cursor.advance_n(3);
            return TokenKind::CharLiteral;
        }

        let closing = rest
            .chars()
            .skip(1)
            .take_while(|c| !c.is_whitespace())
            .position(|c| c == CHAR_QUOTE);
        match closing {
            Some(index) => self.cursor.advance_n(index + 2),
            None => self.cursor.advance_n(1),
        }

        TokenKind::Error(LexErrorKind::MalformedCharLiteral)
    }
}
