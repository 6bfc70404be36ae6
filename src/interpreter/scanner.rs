use std::{cmp::Ordering, fmt};

/// A 1-based `(line, column)` location inside a document.
///
/// Coordinates order lexicographically, first by line and then by column,
/// which is the order replacements are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number (in characters), starting at 1.
    pub column: usize,
}

impl Coordinate {
    /// Creates a coordinate from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves to the first column of the next line.
    const fn next_line(self) -> Self {
        Self { line:   self.line + 1,
               column: 1, }
    }

    /// Moves one column to the right.
    const fn next_column(self) -> Self {
        Self { line:   self.line,
               column: self.column + 1, }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A cursor into a block: a coordinate together with the raw byte offset of
/// the same character.
///
/// Two positions compare equal when their coordinates are equal; the offset
/// is derived data and never disagrees for positions over the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    /// Human-facing location.
    pub coord:  Coordinate,
    /// Byte offset into the block text.
    pub offset: usize,
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord.cmp(&other.coord)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.coord, self.offset)
    }
}

/// One unit of marked-up source handed to the interpreter.
///
/// The text starts at column 1 of line `begin.line`. Lexing starts at `begin`
/// and stops when the cursor reaches `end`, so a block may carry its own
/// delimiters (`\begin{preproc}` … `\end{preproc}`) without them being
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The raw text of the block.
    pub text:   String,
    /// Where lexing begins.
    pub begin:  Coordinate,
    /// Where lexing ends.
    pub end:    Coordinate,
    /// Length of `text` in bytes.
    pub length: usize,
}

impl Block {
    /// Creates a block whose interpreted region runs from `begin` to `end`.
    #[must_use]
    pub fn new(text: impl Into<String>, begin: Coordinate, end: Coordinate) -> Self {
        let text = text.into();
        let length = text.len();
        Self { text,
               begin,
               end,
               length }
    }

    /// Creates a block that interprets the whole of `text`, starting at line
    /// 1, column 1.
    ///
    /// # Example
    /// ```
    /// use texcalc::interpreter::scanner::{Block, Coordinate};
    ///
    /// let block = Block::from_source("x := 1\r\ny := 2");
    /// assert_eq!(block.begin, Coordinate::new(1, 1));
    /// assert_eq!(block.end, Coordinate::new(2, 7));
    /// ```
    #[must_use]
    pub fn from_source(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut scanner = Scanner::over(&text, Coordinate::new(1, 1));
        while !scanner.is_at_end() {
            scanner.advance();
        }
        let end = scanner.position().coord;
        Self::new(text, Coordinate::new(1, 1), end)
    }
}

/// Newline classification of the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Newline {
    None,
    Unix,
    Windows,
}

/// Walks a text buffer keeping line/column and byte offset in step.
///
/// `\n` and `\r\n` both count as a single line break. The scanner never moves
/// past the end of its text or past its end coordinate, if one is set.
#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    text:   &'t str,
    cursor: Position,
    limit:  Option<Coordinate>,
}

impl<'t> Scanner<'t> {
    /// Creates a scanner over `text` whose first character sits at `origin`.
    #[must_use]
    pub const fn over(text: &'t str, origin: Coordinate) -> Self {
        Self { text,
               cursor: Position { coord:  origin,
                                  offset: 0, },
               limit: None }
    }

    /// Creates a scanner positioned at the beginning of the block's
    /// interpreted region and bounded by its end coordinate.
    #[must_use]
    pub fn for_block(block: &'t Block) -> Self {
        let mut scanner = Self::over(&block.text, Coordinate::new(block.begin.line, 1));
        while scanner.cursor.coord < block.begin && !scanner.is_at_end() {
            scanner.advance();
        }
        scanner.limit = Some(block.end);
        scanner
    }

    /// The current position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.cursor
    }

    /// The character under the cursor, if any.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        if self.is_at_end() {
            return None;
        }
        self.text[self.cursor.offset..].chars().next()
    }

    /// Returns `true` once the cursor reached the end coordinate or the end
    /// of the text.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor.offset >= self.text.len() || self.limit.is_some_and(|end| self.cursor.coord >= end)
    }

    fn newline(&self) -> Newline {
        let rest = &self.text.as_bytes()[self.cursor.offset..];
        match rest {
            [b'\n', ..] => Newline::Unix,
            [b'\r', b'\n', ..] => Newline::Windows,
            _ => Newline::None,
        }
    }

    /// Advances by one logical character and returns the new position.
    pub fn advance(&mut self) -> Position {
        if self.is_at_end() {
            return self.cursor;
        }
        match self.newline() {
            Newline::Unix => {
                self.cursor.coord = self.cursor.coord.next_line();
                self.cursor.offset += 1;
            },
            Newline::Windows => {
                self.cursor.coord = self.cursor.coord.next_line();
                self.cursor.offset += 2;
            },
            Newline::None => {
                let width = self.current().map_or(1, char::len_utf8);
                self.cursor.coord = self.cursor.coord.next_column();
                self.cursor.offset += width;
            },
        }
        self.cursor
    }

    /// Advances until the cursor reaches byte `offset` (or the end) and
    /// returns the resulting position. Offsets behind the cursor return the
    /// current position.
    pub fn seek(&mut self, offset: usize) -> Position {
        while self.cursor.offset < offset && self.cursor.offset < self.text.len() {
            let before = self.cursor.offset;
            let limit = self.limit.take();
            self.advance();
            self.limit = limit;
            if self.cursor.offset == before {
                break;
            }
        }
        self.cursor
    }
}
