//! Token cursor for navigating the token stream.

use lox_ir::{Token, TokenKind};

/// Forward-only position over a scanned token slice.
///
/// The slice normally ends with an `Eof` token. If it does not, the cursor
/// behaves as though one followed the last token, so `current` never runs
/// off the end.
pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    end: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        let line = tokens.last().map_or(1, |token| token.line);
        Cursor {
            tokens,
            end: Token::eof(line),
            pos: 0,
        }
    }

    /// The token about to be consumed.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token. Before the first `advance` this is
    /// the first token.
    #[inline]
    pub(crate) fn previous(&self) -> &Token {
        self.pos
            .checked_sub(1)
            .and_then(|pos| self.tokens.get(pos))
            .unwrap_or_else(|| self.current())
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token unless at `Eof`, and return it.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Consume the current token if it has kind `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
