//! Scanner for Lox.
//!
//! Converts source text into a token sequence terminated by exactly one
//! `Eof` token. Scanning never aborts: lexical errors go to the
//! [`Reporter`] and scanning resumes at the next character, so one pass
//! surfaces every lexical fault.

mod cursor;
mod keywords;
mod scanner;

use lox_diagnostic::Reporter;
use lox_ir::Token;
use tracing::debug;

pub use scanner::Scanner;

/// Scan `source` into tokens, reporting lexical errors to `reporter`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    let tokens = Scanner::new(source, reporter).scan_tokens();
    debug!(tokens = tokens.len(), "scanned");
    tokens
}
