//! Operator, bracket and punctuation lexing.
//!
//! Symbols are resolved by longest match against the symbol tables: every
//! candidate length from the longest registered symbol down to one is tried,
//! and the first registered spelling wins. `&!` is therefore always `Or`,
//! never `And` followed by a stray `!`.

use crate::error::LexErrorKind;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src> Lexer<'src, '_> {
    /// Lexes the longest registered symbol at the cursor.
    ///
    /// Returns `None` without consuming anything when no symbol matches.
    pub(crate) fn lex_symbol(&mut self) -> Option<TokenKind> {
        if !self.tables.is_symbol_start(self.cursor.current_char()) {
            return None;
        }

        let rest = self.cursor.remaining();
        for len in (1..=self.tables.max_symbol_len()).rev() {
            let Some(candidate) = rest.get(..len) else {
                continue;
            };
            if let Some(kind) = self.tables.symbol(candidate) {
                self.cursor.advance_n(candidate.chars().count());
                return Some(kind);
            }
        }

        None
    }

    /// Consumes one character that starts no token.
    pub(crate) fn lex_unknown(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::Error(LexErrorKind::UnknownToken)
    }
}
