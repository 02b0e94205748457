//! Keyword, type keyword, boolean and identifier lexing.

use crate::token::TokenKind;
use crate::Lexer;

/// Characters that may follow the first letter of a word.
#[inline]
pub(crate) fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'src> Lexer<'src, '_> {
    /// Lexes `true` or `false` if the word at the cursor is exactly one of
    /// them.
    ///
    /// Returns `None` without consuming anything otherwise, so `trueish`
    /// is left for [`Lexer::lex_word`].
    pub(crate) fn lex_boolean(&mut self) -> Option<TokenKind> {
        let rest = self.cursor.remaining();
        let len = rest.find(|c| !is_word_continue(c)).unwrap_or(rest.len());
        if self.tables.is_boolean(&rest[..len]) {
            self.cursor.advance_n(len);
            Some(TokenKind::Boolean)
        } else {
            None
        }
    }

    /// Lexes a word starting with an ASCII letter.
    ///
    /// The word is resolved against the keyword and type keyword table;
    /// anything not found there is an identifier.
    pub(crate) fn lex_word(&mut self) -> TokenKind {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(is_word_continue);

        let text = self.cursor.slice_from(start);
        self.tables.word(text).unwrap_or(TokenKind::Identifier)
    }
}
