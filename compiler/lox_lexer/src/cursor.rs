//! Character cursor with a lexeme-start marker.
//!
//! Positions are byte offsets into the source, always on a `char`
//! boundary. Lookahead is at most two characters.

pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    /// Byte offset where the current lexeme began.
    start: usize,
    line: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor {
            source,
            pos: 0,
            start: 0,
            line: 1,
        }
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The next unread character.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character after [`current`](Self::current).
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the next character.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the next character only if it is `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume the next two characters only if they are `first` then `second`.
    pub(crate) fn eat_pair(&mut self, first: char, second: char) -> bool {
        if self.current() == Some(first) && self.peek() == Some(second) {
            self.pos += first.len_utf8() + second.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `predicate` holds.
    pub(crate) fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Begin a new lexeme at the current position.
    #[inline]
    pub(crate) fn mark_start(&mut self) {
        self.start = self.pos;
    }

    /// Source text from the lexeme start to the current position.
    #[inline]
    pub(crate) fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    #[inline]
    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub(crate) fn newline(&mut self) {
        self.line += 1;
    }
}

#[cfg(test)]
mod tests;
