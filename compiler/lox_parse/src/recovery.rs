//! Error recovery for the parser.
//!
//! Token sets and statement-boundary synchronization for continuing after a
//! syntax error. Membership is a single bitwise AND.

use lox_ir::TokenKind;

use crate::cursor::Cursor;

const _: () = assert!(TokenKind::COUNT <= 64, "TokenSet is backed by a u64");

/// A set of token kinds, one bit per [`TokenKind`] discriminant.
///
/// ```
/// use lox_ir::TokenKind;
/// use lox_parse::TokenSet;
///
/// const SIGNS: TokenSet = TokenSet::new().with(TokenKind::Plus).with(TokenKind::Minus);
/// assert!(SIGNS.contains(TokenKind::Minus));
/// assert!(!SIGNS.contains(TokenKind::Star));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Keywords that begin a new statement or declaration.
pub const STATEMENT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens up to the next statement boundary.
///
/// The offending token is always consumed first. Stops just after a `;` or
/// just before a token in [`STATEMENT_START`]. Returns `false` if `Eof` was
/// reached instead.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>) -> bool {
    cursor.advance();
    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon
            || STATEMENT_START.contains(cursor.current_kind())
        {
            return true;
        }
        cursor.advance();
    }
    false
}
