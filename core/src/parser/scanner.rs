//! # Scanner
//!
//! A byte-offset cursor over declaration text with the character classes the
//! extractor needs. All offsets are byte offsets into the original `&str` and
//! always sit on `char` boundaries.

/// Returns true for identifier characters (letters, digits, `_`).
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns true for characters allowed in a type expression run:
/// identifier characters, namespace separators and angle brackets.
pub fn is_type_char(c: char) -> bool {
    is_ident_char(c) || matches!(c, ':' | '<' | '>')
}

/// Returns true for the pointer/reference suffix of a type expression.
pub fn is_indirection(c: char) -> bool {
    matches!(c, '*' | '&')
}

/// Offset of the character following the one at `pos`.
///
/// Used to advance the search origin by one character after a failed match.
pub fn next_char_boundary(src: &str, pos: usize) -> usize {
    pos + src[pos..].chars().next().map_or(1, char::len_utf8)
}

/// Forward-only cursor over a string slice.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at `pos`.
    pub fn at(src: &'a str, pos: usize) -> Self {
        Self { src, pos }
    }

    /// Current byte offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Remaining text from the cursor.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// The character under the cursor, if any.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes `c` if it is the next character.
    pub fn eat_char(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `lit` if the remaining text starts with it.
    pub fn eat_str(&mut self, lit: &str) -> bool {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of characters satisfying `pred` and returns it.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest().len(), |(i, _)| i);
        self.pos += len;
        &self.src[start..self.pos]
    }

    /// Skips whitespace, returning the number of bytes skipped.
    pub fn skip_whitespace(&mut self) -> usize {
        self.take_while(char::is_whitespace).len()
    }

    /// Absolute offset of the next `c` at or after the cursor.
    pub fn find_char(&self, c: char) -> Option<usize> {
        self.rest().find(c).map(|i| self.pos + i)
    }

    /// Moves the cursor to an absolute offset.
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(self.src.is_char_boundary(pos));
        self.pos = pos;
    }

    /// Slice of the underlying text between two absolute offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }
}
