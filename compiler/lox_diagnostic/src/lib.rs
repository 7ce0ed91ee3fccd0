//! Error reporting for the Lox pipeline.
//!
//! Two channels that are never merged:
//! - **static**: lexical and syntax errors, accumulated while scanning and
//!   parsing. Any static error means the program must not be interpreted.
//! - **runtime**: raised while interpreting; fatal to the current run.
//!
//! A single [`Reporter`] is passed by `&mut` into the scanner, parser and
//! interpreter. The caller queries it afterwards (`had_static_fault`,
//! `had_runtime_fault`) and resets it between independent runs.
//!
//! # Error Guarantees
//!
//! Reporting returns an [`ErrorGuaranteed`], a proof value that cannot be
//! built outside this crate:
//!
//! ```text
//! let guarantee = reporter.runtime_error(line, "Operand must be a number.");
//! return Err(guarantee);
//! ```

mod diagnostic;
mod guarantee;
mod reporter;

pub use diagnostic::{Diagnostic, DiagnosticKind, Location};
pub use guarantee::ErrorGuaranteed;
pub use reporter::{Emitter, Reporter};
