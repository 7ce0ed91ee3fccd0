//! Tree-walking interpreter for Lox.
//!
//! Executes parsed statements in order against a chain of lexical scopes.
//! The first runtime error aborts the run and is reported on the runtime
//! channel of the [`Reporter`](lox_diagnostic::Reporter).

mod environment;
mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;

pub use environment::Environment;
pub use errors::{EvalResult, RuntimeError, RuntimeErrorKind};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
