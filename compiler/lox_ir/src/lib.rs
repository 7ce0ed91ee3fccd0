//! Lox IR - shared data model for the Lox interpreter.
//!
//! Every pipeline stage depends on this crate and nothing else in the
//! workspace does the reverse:
//!
//! - [`Token`] / [`TokenKind`]: scanner output, parser input
//! - [`Value`]: literal payloads and runtime values
//! - [`Expr`] / [`Stmt`]: the syntax tree built by the parser
//! - [`printer`]: parenthesized rendering of syntax trees for debugging

mod ast;
pub mod printer;
mod token;
mod value;

pub use ast::{BinaryOp, Expr, LogicalOp, Stmt, UnaryOp};
pub use token::{Token, TokenKind};
pub use value::Value;
