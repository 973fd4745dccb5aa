//! Byte cursor over source text.
//!
//! Patty's lexical classes are all ASCII, so the cursor works on bytes. Any
//! non-ASCII byte only ever appears inside string literals or as an error.

/// Forward-only position in a source string.
///
/// The cursor is [`Copy`], so a snapshot is just a copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Byte after the current one, or `None` past the end.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Character at the current position, for diagnostics.
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance past the next `\n`, or to end of input if there is none.
    pub fn skip_line(&mut self) {
        match self.source.as_bytes()[self.pos..].iter().position(|&b| b == b'\n') {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.source.len(),
        }
    }

    /// Move to `pos`, which must be a character boundary at or after the
    /// current position.
    pub fn jump_to(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos && self.source.is_char_boundary(pos));
        self.pos = pos.min(self.source.len());
    }

    /// Source text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Remaining input from the current position.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }
}
