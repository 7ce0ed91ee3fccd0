//! Parse error type.

use lox_diagnostic::{ErrorGuaranteed, Location, Reporter};
use lox_ir::Token;

/// A syntax error that has already been reported.
///
/// Raised by a grammar rule when an expected token is missing, and
/// propagated unchanged with `?` until the enclosing declaration catches it
/// and synchronizes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: u32,
    pub location: Location,
    guarantee: ErrorGuaranteed,
}

impl ParseError {
    /// Report `message` at `token` and build the matching error.
    #[cold]
    pub(crate) fn report(reporter: &mut Reporter, token: &Token, message: &str) -> Self {
        let guarantee = reporter.error_at(token, message);
        ParseError {
            message: message.to_owned(),
            line: token.line,
            location: Location::of_token(token),
            guarantee,
        }
    }

    /// Proof that this error reached the reporter.
    pub fn guarantee(&self) -> ErrorGuaranteed {
        self.guarantee
    }
}

pub(crate) type ParseResult<T> = Result<T, ParseError>;
