//! Number literal lexing.
//!
//! A number is a run of ASCII digits and `.` starting with a digit. The
//! count of dots in the run decides the kind.

use crate::error::LexErrorKind;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes an integer or real literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`
    /// - Real: `3.14`, `1.`
    ///
    /// A run with two or more dots (`1.2.3`, `1..`) is consumed whole and
    /// reported as a malformed number.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        let mut dots = 0usize;
        self.cursor.eat_while(|c| {
            if c == '.' {
                dots += 1;
            }
            c.is_ascii_digit() || c == '.'
        });

        match dots {
            0 => TokenKind::Integer,
            1 => TokenKind::Real,
            _ => TokenKind::Error(LexErrorKind::MalformedNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SymbolTables;

    fn lex_number(source: &str) -> (TokenKind, usize) {
        let mut lexer = Lexer::new(source, SymbolTables::global());
        let kind = lexer.lex_number();
        (kind, lexer.position())
    }

    #[test]
    fn test_integer() {
        assert_eq!(lex_number("123"), (TokenKind::Integer, 3));
        assert_eq!(lex_number("0;"), (TokenKind::Integer, 1));
    }

    #[test]
    fn test_leading_zeros_are_kept() {
        assert_eq!(lex_number("007"), (TokenKind::Integer, 3));
    }

    #[test]
    fn test_real() {
        assert_eq!(lex_number("123.45"), (TokenKind::Real, 6));
    }

    #[test]
    fn test_trailing_dot_is_real() {
        assert_eq!(lex_number("1. "), (TokenKind::Real, 2));
    }

    #[test]
    fn test_two_dots_malformed() {
        assert_eq!(
            lex_number("1.2.3;"),
            (TokenKind::Error(LexErrorKind::MalformedNumber), 5)
        );
    }

    #[test]
    fn test_adjacent_dots_malformed() {
        assert_eq!(
            lex_number("1..2"),
            (TokenKind::Error(LexErrorKind::MalformedNumber), 4)
        );
    }

    #[test]
    fn test_number_stops_at_letter() {
        assert_eq!(lex_number("12abc"), (TokenKind::Integer, 2));
    }

    #[test]
    fn test_scanning_resumes_after_malformed() {
        let out = crate::scan("1.2.3 4", SymbolTables::global());
        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.tokens[0].lexeme, "1.2.3");
        assert_eq!(out.tokens[1].kind, TokenKind::Integer);
        assert_eq!(out.diagnostics.len(), 1);
    }
}
