//! Comment lexing.
//!
//! Comments are kept as tokens so the token stream covers every
//! non-whitespace character of the unit. Report writers drop them.

use crate::token::TokenKind;
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes a `//` comment up to, but not including, the end of the line.
    ///
    /// In line mode the end of the line is the end of the unit.
    pub(crate) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c != '\n');
        TokenKind::Comment
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::{Lexer, SymbolTables};

    fn lex_comment(source: &str) -> (TokenKind, usize) {
        let mut lexer = Lexer::new(source, SymbolTables::global());
        let kind = lexer.lex_line_comment();
        (kind, lexer.position())
    }

    #[test]
    fn test_comment_to_end_of_unit() {
        assert_eq!(lex_comment("// koseva x;"), (TokenKind::Comment, 12));
    }

    #[test]
    fn test_comment_stops_before_newline() {
        assert_eq!(lex_comment("// note\npaha"), (TokenKind::Comment, 7));
    }

    #[test]
    fn test_empty_comment() {
        assert_eq!(lex_comment("//"), (TokenKind::Comment, 2));
    }

    #[test]
    fn test_comment_hides_string_opener() {
        let kinds: Vec<_> = Lexer::new("x // !\"not a string\nsa", SymbolTables::global())
            .map(|t| t.kind)
            .collect();
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[1], TokenKind::Comment);
    }

    #[test]
    fn test_single_slash_is_unknown() {
        let tokens: Vec<_> = Lexer::new("/", SymbolTables::global()).collect();
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_error());
    }
}
