//! Token definitions for the Tupã language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source it was
//! scanned from and its [`Span`]. Reserved words keep their identity in the
//! kind ([`Keyword`], [`TypeKeyword`]) instead of collapsing into a single
//! "reserved" bucket.

use std::fmt;

use tpa_util::Span;

use crate::error::LexErrorKind;

/// Opening delimiter of a string literal.
pub const STRING_OPEN: &str = "!\"";
/// Closing delimiter of a string literal.
pub const STRING_CLOSE: &str = "\"!";
/// Delimiter of a character literal.
pub const CHAR_QUOTE: char = '\'';
/// Line comment introducer.
pub const LINE_COMMENT: &str = "//";

/// A classified lexeme.
///
/// `lexeme` is always the exact source slice `unit[span.start..span.end]`, so
/// it is never empty. For string and character literals [`Token::value`]
/// strips the delimiters.
///
/// # Examples
///
/// ```
/// use tpa_lex::{scan, SymbolTables, TokenKind};
///
/// let out = scan("!\"hello world\"!", SymbolTables::global());
/// let token = &out.tokens[0];
/// assert_eq!(token.kind, TokenKind::StringLiteral);
/// assert_eq!(token.lexeme, "!\"hello world\"!");
/// assert_eq!(token.value(), "hello world");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Classification of the lexeme.
    pub kind: TokenKind,
    /// Source text the token was scanned from.
    pub lexeme: &'src str,
    /// Location of the lexeme in its unit.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The literal value of the token.
    ///
    /// Interior text for string (`!"..."!`) and character (`'x'`) literals,
    /// the lexeme itself for everything else.
    pub fn value(&self) -> &'src str {
        match self.kind {
            TokenKind::StringLiteral => self
                .lexeme
                .strip_prefix(STRING_OPEN)
                .and_then(|rest| rest.strip_suffix(STRING_CLOSE))
                .unwrap_or(self.lexeme),
            TokenKind::CharLiteral => self
                .lexeme
                .strip_prefix(CHAR_QUOTE)
                .and_then(|rest| rest.strip_suffix(CHAR_QUOTE))
                .unwrap_or(self.lexeme),
            _ => self.lexeme,
        }
    }

    /// 1-based line of the first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for error tokens.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.lexeme, self.span)
    }
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Digits without a decimal point: `42`
    Integer,
    /// Digits with exactly one decimal point: `3.14`, `1.`
    Real,
    /// `!"..."!`
    StringLiteral,
    /// `'x'`
    CharLiteral,
    /// `true` or `false`
    Boolean,
    /// Reserved statement word
    Keyword(Keyword),
    /// Reserved type name
    TypeKeyword(TypeKeyword),
    /// Assignment, equality, logical and arithmetic operators
    Operator(Operator),
    /// Ordering comparisons and the single `=`
    Relational(Relational),
    /// Paired delimiters
    Bracket(Bracket),
    /// Separators and terminators
    Punctuation(Punctuation),
    /// User-named entity
    Identifier,
    /// `//` to the end of the line
    Comment,
    /// Lexical fault; the lexeme is the skipped fragment
    Error(LexErrorKind),
}

impl TokenKind {
    /// Returns true for [`TokenKind::Error`].
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    /// Returns true for tokens that carry no program meaning (comments).
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    /// Short human-readable category name.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::StringLiteral => "string",
            TokenKind::CharLiteral => "character",
            TokenKind::Boolean => "boolean",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::TypeKeyword(_) => "type keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Relational(_) => "relational operator",
            TokenKind::Bracket(_) => "bracket",
            TokenKind::Punctuation(_) => "punctuation",
            TokenKind::Identifier => "identifier",
            TokenKind::Comment => "comment",
            TokenKind::Error(_) => "invalid token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw.as_str()),
            TokenKind::TypeKeyword(ty) => write!(f, "type keyword `{}`", ty.as_str()),
            TokenKind::Operator(op) => write!(f, "operator `{}`", op.as_str()),
            TokenKind::Relational(op) => write!(f, "relational operator `{}`", op.as_str()),
            TokenKind::Bracket(b) => write!(f, "bracket `{}`", b.as_str()),
            TokenKind::Punctuation(p) => write!(f, "punctuation `{}`", p.as_str()),
            TokenKind::Error(err) => write!(f, "invalid token ({})", err),
            other => f.write_str(other.describe()),
        }
    }
}

/// Reserved statement words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `tuichaveva`, opens a program
    ProgramStart,
    /// `paha`, closes a program
    ProgramEnd,
    /// `ramoramo`
    If,
    /// `neiramo`
    Else,
    /// `upe_aja` (also the deprecated spellings `upeaja` and `upeicharo`)
    Loop,
    /// `guara`
    For,
    /// `kjaike`, reads a value
    Input,
    /// `koseva`, writes a value
    Output,
}

impl Keyword {
    /// Every keyword, in table order.
    pub const ALL: [Keyword; 8] = [
        Keyword::ProgramStart,
        Keyword::ProgramEnd,
        Keyword::If,
        Keyword::Else,
        Keyword::Loop,
        Keyword::For,
        Keyword::Input,
        Keyword::Output,
    ];

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::ProgramStart => "tuichaveva",
            Keyword::ProgramEnd => "paha",
            Keyword::If => "ramoramo",
            Keyword::Else => "neiramo",
            Keyword::Loop => "upe_aja",
            Keyword::For => "guara",
            Keyword::Input => "kjaike",
            Keyword::Output => "koseva",
        }
    }
}

/// Reserved type names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    /// `paite`, integer
    Paite,
    /// `anate`, real
    Anate,
    /// `bool`
    Bool,
    /// `sa`, string
    Sa,
    /// `kar`, character
    Kar,
}

impl TypeKeyword {
    /// Every type keyword, in table order.
    pub const ALL: [TypeKeyword; 5] = [
        TypeKeyword::Paite,
        TypeKeyword::Anate,
        TypeKeyword::Bool,
        TypeKeyword::Sa,
        TypeKeyword::Kar,
    ];

    /// Spelling in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKeyword::Paite => "paite",
            TypeKeyword::Anate => "anate",
            TypeKeyword::Bool => "bool",
            TypeKeyword::Sa => "sa",
            TypeKeyword::Kar => "kar",
        }
    }
}

/// Assignment, equality, logical and arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `->`
    Assign,
    /// `==`
    Equals,
    /// `=!=`
    Different,
    /// `&`
    And,
    /// `&!`
    Or,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `%`. Division, not remainder: that is how the language defines it.
    Divide,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 9] = [
        Operator::Assign,
        Operator::Equals,
        Operator::Different,
        Operator::And,
        Operator::Or,
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Spelling in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Assign => "->",
            Operator::Equals => "==",
            Operator::Different => "=!=",
            Operator::And => "&",
            Operator::Or => "&!",
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "%",
        }
    }
}

/// Relational operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relational {
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
}

impl Relational {
    /// Every relational operator, in table order.
    pub const ALL: [Relational; 5] = [
        Relational::GreaterEqual,
        Relational::LessEqual,
        Relational::Greater,
        Relational::Less,
        Relational::Equal,
    ];

    /// Spelling in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Relational::GreaterEqual => ">=",
            Relational::LessEqual => "<=",
            Relational::Greater => ">",
            Relational::Less => "<",
            Relational::Equal => "=",
        }
    }
}

/// Paired delimiters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bracket {
    /// `!(`
    ParenOpen,
    /// `)!`
    ParenClose,
    /// `!{`
    BlockOpen,
    /// `}!`
    BlockClose,
    /// `(`
    RoundOpen,
    /// `)`
    RoundClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    SquareOpen,
    /// `]`
    SquareClose,
}

impl Bracket {
    /// Every bracket, in table order.
    pub const ALL: [Bracket; 10] = [
        Bracket::ParenOpen,
        Bracket::ParenClose,
        Bracket::BlockOpen,
        Bracket::BlockClose,
        Bracket::RoundOpen,
        Bracket::RoundClose,
        Bracket::BraceOpen,
        Bracket::BraceClose,
        Bracket::SquareOpen,
        Bracket::SquareClose,
    ];

    /// Spelling in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Bracket::ParenOpen => "!(",
            Bracket::ParenClose => ")!",
            Bracket::BlockOpen => "!{",
            Bracket::BlockClose => "}!",
            Bracket::RoundOpen => "(",
            Bracket::RoundClose => ")",
            Bracket::BraceOpen => "{",
            Bracket::BraceClose => "}",
            Bracket::SquareOpen => "[",
            Bracket::SquareClose => "]",
        }
    }

    /// Returns true for opening delimiters.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            Bracket::ParenOpen
                | Bracket::BlockOpen
                | Bracket::RoundOpen
                | Bracket::BraceOpen
                | Bracket::SquareOpen
        )
    }
}

/// Separators and terminators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Punctuation {
    /// `;`
    StatementEnd,
    /// `,`
    ArgumentSeparator,
    /// `:`
    Colon,
}

impl Punctuation {
    /// Every punctuation mark, in table order.
    pub const ALL: [Punctuation; 3] = [
        Punctuation::StatementEnd,
        Punctuation::ArgumentSeparator,
        Punctuation::Colon,
    ];

    /// Spelling in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Punctuation::StatementEnd => ";",
            Punctuation::ArgumentSeparator => ",",
            Punctuation::Colon => ":",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_strips_delimiters() {
        let token = Token::new(TokenKind::StringLiteral, "!\"a  b\"!", Span::new(0, 8, 1, 1));
        assert_eq!(token.value(), "a  b");
    }

    #[test]
    fn test_empty_string_value() {
        let token = Token::new(TokenKind::StringLiteral, "!\"\"!", Span::new(0, 4, 1, 1));
        assert_eq!(token.value(), "");
        assert!(!token.lexeme.is_empty());
    }

    #[test]
    fn test_char_value_strips_quotes() {
        let token = Token::new(TokenKind::CharLiteral, "'x'", Span::new(0, 3, 1, 1));
        assert_eq!(token.value(), "x");
    }

    #[test]
    fn test_value_of_other_kinds_is_lexeme() {
        let token = Token::new(TokenKind::Real, "1.5", Span::new(0, 3, 1, 1));
        assert_eq!(token.value(), "1.5");
        let token = Token::new(
            TokenKind::Error(LexErrorKind::UnterminatedString),
            "!\"oops",
            Span::new(0, 6, 1, 1),
        );
        assert_eq!(token.value(), "!\"oops");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::Integer.to_string(), "integer");
        assert_eq!(TokenKind::Keyword(Keyword::Loop).to_string(), "keyword `upe_aja`");
        assert_eq!(TokenKind::Operator(Operator::Divide).to_string(), "operator `%`");
        assert_eq!(
            TokenKind::Error(LexErrorKind::UnknownToken).to_string(),
            "invalid token (unknown token)"
        );
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::Identifier, "x", Span::new(4, 5, 2, 3));
        assert_eq!(token.to_string(), "identifier `x` at 2:3");
    }

    #[test]
    fn test_bracket_pairs() {
        let opens = Bracket::ALL.iter().filter(|b| b.is_open()).count();
        assert_eq!(opens * 2, Bracket::ALL.len());
    }
}
