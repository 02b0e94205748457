//! Fixed tables of reserved words and symbols.
//!
//! The tables are built once and never mutated afterwards, so a single
//! [`SymbolTables`] can be shared by any number of concurrent scans. Three
//! mappings are kept, one per lexeme category the scanner resolves against:
//!
//! - words: keywords and type keywords
//! - operators: operators and relational operators
//! - delimiters: brackets and punctuation
//!
//! A lexeme appears in at most one mapping. Boolean literals are kept apart
//! from the words because they are checked before any word resolution.

use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

use indexmap::IndexMap;
use rustc_hash::{FxHashSet, FxHasher};

use crate::token::{Bracket, Keyword, Operator, Punctuation, Relational, TokenKind, TypeKeyword};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Spellings of the loop keyword kept for old sources.
const DEPRECATED_LOOP_SPELLINGS: [&str; 2] = ["upeaja", "upeicharo"];

const BOOLEANS: [&str; 2] = ["true", "false"];

static GLOBAL: LazyLock<SymbolTables> = LazyLock::new(SymbolTables::new);

/// Lookup tables shared by every scan.
///
/// # Examples
///
/// ```
/// use tpa_lex::{Keyword, Operator, SymbolTables, TokenKind};
///
/// let tables = SymbolTables::global();
/// assert_eq!(tables.word("ramoramo"), Some(TokenKind::Keyword(Keyword::If)));
/// assert_eq!(tables.symbol("=!="), Some(TokenKind::Operator(Operator::Different)));
/// assert_eq!(tables.max_symbol_len(), 3);
/// assert!(tables.is_boolean("true"));
/// ```
#[derive(Clone, Debug)]
pub struct SymbolTables {
    words: FxIndexMap<&'static str, TokenKind>,
    operators: FxIndexMap<&'static str, TokenKind>,
    delimiters: FxIndexMap<&'static str, TokenKind>,
    symbol_starts: FxHashSet<char>,
    max_symbol_len: usize,
}

impl SymbolTables {
    /// Builds a fresh set of tables.
    ///
    /// Most callers want [`SymbolTables::global`] instead.
    pub fn new() -> Self {
        let mut words = FxIndexMap::default();
        for keyword in Keyword::ALL {
            words.insert(keyword.as_str(), TokenKind::Keyword(keyword));
        }
        for spelling in DEPRECATED_LOOP_SPELLINGS {
            words.insert(spelling, TokenKind::Keyword(Keyword::Loop));
        }
        for ty in TypeKeyword::ALL {
            words.insert(ty.as_str(), TokenKind::TypeKeyword(ty));
        }

        let mut operators = FxIndexMap::default();
        for op in Operator::ALL {
            operators.insert(op.as_str(), TokenKind::Operator(op));
        }
        for op in Relational::ALL {
            operators.insert(op.as_str(), TokenKind::Relational(op));
        }

        let mut delimiters = FxIndexMap::default();
        for bracket in Bracket::ALL {
            delimiters.insert(bracket.as_str(), TokenKind::Bracket(bracket));
        }
        for punct in Punctuation::ALL {
            delimiters.insert(punct.as_str(), TokenKind::Punctuation(punct));
        }

        let symbols = || operators.keys().chain(delimiters.keys());
        let symbol_starts = symbols().filter_map(|s| s.chars().next()).collect();
        let max_symbol_len = symbols().map(|s| s.len()).max().unwrap_or(0);

        Self {
            words,
            operators,
            delimiters,
            symbol_starts,
            max_symbol_len,
        }
    }

    /// The process-wide tables, built on first use.
    pub fn global() -> &'static SymbolTables {
        &GLOBAL
    }

    /// Resolves a complete word to its keyword or type keyword.
    ///
    /// Returns `None` for identifiers.
    #[inline]
    pub fn word(&self, text: &str) -> Option<TokenKind> {
        self.words.get(text).copied()
    }

    /// Resolves an exact symbol spelling to its operator, relational,
    /// bracket or punctuation kind.
    #[inline]
    pub fn symbol(&self, text: &str) -> Option<TokenKind> {
        self.operators
            .get(text)
            .or_else(|| self.delimiters.get(text))
            .copied()
    }

    /// Returns true for `true` and `false`.
    #[inline]
    pub fn is_boolean(&self, text: &str) -> bool {
        BOOLEANS.contains(&text)
    }

    /// Returns true if some registered symbol begins with `c`.
    #[inline]
    pub fn is_symbol_start(&self, c: char) -> bool {
        self.symbol_starts.contains(&c)
    }

    /// Length in bytes of the longest registered symbol.
    #[inline]
    pub fn max_symbol_len(&self) -> usize {
        self.max_symbol_len
    }

    /// Returns true for the old spellings of the loop keyword.
    ///
    /// ```
    /// use tpa_lex::SymbolTables;
    ///
    /// let tables = SymbolTables::global();
    /// assert!(tables.is_deprecated_alias("upeicharo"));
    /// assert!(!tables.is_deprecated_alias("upe_aja"));
    /// ```
    pub fn is_deprecated_alias(&self, text: &str) -> bool {
        DEPRECATED_LOOP_SPELLINGS.contains(&text)
    }

    /// Keywords and type keywords, in registration order.
    pub fn words(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.words.iter().map(|(text, kind)| (*text, *kind))
    }

    /// Operators and relational operators, in registration order.
    pub fn operators(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.operators.iter().map(|(text, kind)| (*text, *kind))
    }

    /// Brackets and punctuation, in registration order.
    pub fn delimiters(&self) -> impl Iterator<Item = (&'static str, TokenKind)> + '_ {
        self.delimiters.iter().map(|(text, kind)| (*text, *kind))
    }

    /// Boolean literal spellings.
    pub fn booleans(&self) -> impl Iterator<Item = &'static str> {
        BOOLEANS.into_iter()
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SymbolTables: Send, Sync);
