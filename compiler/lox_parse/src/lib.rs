//! Recursive descent parser for Lox.
//!
//! Builds an owned statement tree from the scanner's tokens. Every syntax
//! error is reported to the [`Reporter`] as it is found; the failing
//! declaration is then abandoned, tokens are skipped to the next statement
//! boundary, and parsing resumes so that one pass reports every independent
//! fault.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use error::ParseError;
pub use recovery::{TokenSet, STATEMENT_START};

use lox_diagnostic::Reporter;
use lox_ir::{Expr, Stmt, Token, TokenKind};
use tracing::debug;

use cursor::Cursor;
use error::ParseResult;

/// Parser state.
pub struct Parser<'a, 'r> {
    cursor: Cursor<'a>,
    reporter: &'r mut Reporter,
}

impl<'a, 'r> Parser<'a, 'r> {
    pub fn new(tokens: &'a [Token], reporter: &'r mut Reporter) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            reporter,
        }
    }

    /// Parse declarations until `Eof`.
    ///
    /// A declaration that failed to parse leaves a `None` slot. The program
    /// must not be run if the reporter saw any static fault.
    pub fn parse(mut self) -> Vec<Option<Stmt>> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.declaration());
        }
        statements
    }

    /// Parse a single expression, requiring it to span the whole input.
    pub fn parse_expression(mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;
        if !self.cursor.is_at_end() {
            return Err(self.error_at_current("Expect end of expression."));
        }
        Ok(expr)
    }

    /// Consume a token of `kind` or fail with `message` at the current token.
    fn consume(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token> {
        if self.cursor.check(kind) {
            return Ok(self.cursor.advance().clone());
        }
        Err(self.error_at_current(message))
    }

    fn error_at_current(&mut self, message: &str) -> ParseError {
        ParseError::report(self.reporter, self.cursor.current(), message)
    }
}

/// Parse a token stream into top-level statements.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token], reporter: &mut Reporter) -> Vec<Option<Stmt>> {
    let statements = Parser::new(tokens, reporter).parse();
    debug!(
        statements = statements.len(),
        failed = statements.iter().filter(|s| s.is_none()).count(),
        "parsed"
    );
    statements
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
