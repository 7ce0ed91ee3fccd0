//! Grammar productions, split by syntactic category.
//!
//! Each production is a method on [`Parser`](crate::Parser). Rules return
//! [`ParseResult`](crate::error::ParseResult) and propagate failure with `?`;
//! only `declaration` catches it.

mod expr;
mod stmt;
