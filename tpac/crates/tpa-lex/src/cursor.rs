//! Character cursor for traversing source text.
//!
//! The `Cursor` keeps a byte position into a borrowed unit and the 1-based
//! line and column of that position. It never moves backwards: every scanner
//! decides how far to go by peeking first and then advancing.

/// A forward-only cursor over a unit of source text.
///
/// Columns count characters, not bytes. Only `'\n'` starts a new line; a
/// preceding `'\r'` is an ordinary character on the line it ends.
///
/// # Example
///
/// ```
/// use tpa_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("paite x;");
/// assert_eq!(cursor.current_char(), 'p');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The unit being traversed.
    source: &'a str,

    /// Current byte position.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self::with_line(source, 1)
    }

    /// Creates a cursor whose first line is numbered `line`.
    ///
    /// Used when a unit is one line of a larger file.
    ///
    /// ```
    /// use tpa_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::with_line("paha", 7);
    /// assert_eq!(cursor.line(), 7);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn with_line(source: &'a str, line: u32) -> Self {
        Self {
            source,
            position: 0,
            line: line.max(1),
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'` past the end.
    ///
    /// ```
    /// use tpa_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("!(");
    /// assert_eq!(cursor.peek_char(0), '!');
    /// assert_eq!(cursor.peek_char(1), '(');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        let bytes = rest.as_bytes();

        // ASCII fast path: byte offset equals character offset.
        if bytes.len() > offset && bytes[..=offset].is_ascii() {
            return bytes[offset] as char;
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Returns true if the remaining text starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Advances past the current character and returns it.
    ///
    /// Returns `None` at the end of the unit.
    ///
    /// ```
    /// use tpa_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.advance(), Some('a'));
    /// assert_eq!(cursor.advance(), Some('\n'));
    /// assert_eq!((cursor.line(), cursor.column()), (2, 1));
    /// assert_eq!(cursor.advance(), Some('b'));
    /// assert_eq!(cursor.advance(), None);
    /// ```
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advances by `count` characters, stopping early at the end.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Advances while `predicate` holds and returns how many characters were
    /// consumed.
    ///
    /// ```
    /// use tpa_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.remaining(), "abc");
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut eaten = 0;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
            eaten += 1;
        }
        eaten
    }

    /// Skips whitespace, including line breaks.
    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from byte `start` up to the current position.
    ///
    /// ```
    /// use tpa_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("koseva x;");
    /// let start = cursor.position();
    /// cursor.advance_n(6);
    /// assert_eq!(cursor.slice_from(start), "koseva");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The whole unit.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
