//! Pipeline glue for the `lox` command.
//!
//! A [`Session`] owns one interpreter and one reporter and runs source text
//! through scan, parse and interpret. The binary in `main.rs` only deals
//! with arguments, files and the prompt.

use std::sync::Once;

use lox_diagnostic::Reporter;
use lox_eval::Interpreter;
use lox_ir::printer::print_stmt;
use lox_ir::Stmt;
use tracing::debug;

/// Exit statuses, following the BSD `sysexits.h` convention.
pub mod exit_code {
    /// Wrong command-line usage.
    pub const USAGE: u8 = 64;
    /// Lexical or syntax error in the script.
    pub const DATA_ERR: u8 = 65;
    /// Runtime error while executing the script.
    pub const SOFTWARE: u8 = 70;
    /// The script could not be read.
    pub const IO_ERR: u8 = 74;
}

/// How one run of source text ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// A lexical or syntax error was reported. Nothing was executed.
    StaticError,
    /// Execution stopped at a runtime error.
    RuntimeError,
}

impl Outcome {
    /// Process exit status for a file run.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::StaticError => exit_code::DATA_ERR,
            Outcome::RuntimeError => exit_code::SOFTWARE,
        }
    }
}

/// One interpreter plus its error sink.
///
/// Globals defined by one [`run`](Self::run) stay visible to the next, which
/// is what the prompt relies on.
pub struct Session {
    interpreter: Interpreter,
    reporter: Reporter,
}

impl Session {
    pub fn new(interpreter: Interpreter, reporter: Reporter) -> Self {
        Session {
            interpreter,
            reporter,
        }
    }

    /// Scan, parse and execute `source`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn run(&mut self, source: &str) -> Outcome {
        let Some(statements) = self.parse(source) else {
            return Outcome::StaticError;
        };
        match self.interpreter.interpret(&statements, &mut self.reporter) {
            Ok(()) => Outcome::Success,
            Err(_) => Outcome::RuntimeError,
        }
    }

    /// Scan and parse `source`, then print each statement's syntax tree
    /// through the interpreter's print handler instead of executing it.
    pub fn dump_ast(&mut self, source: &str) -> Outcome {
        let Some(statements) = self.parse(source) else {
            return Outcome::StaticError;
        };
        let handler = self.interpreter.print_handler();
        for statement in &statements {
            handler.println(&print_stmt(statement));
        }
        Outcome::Success
    }

    /// Statements of `source`, or `None` if any static error was reported.
    fn parse(&mut self, source: &str) -> Option<Vec<Stmt>> {
        let tokens = lox_lexer::scan(source, &mut self.reporter);
        let statements = lox_parse::parse(&tokens, &mut self.reporter);
        if self.reporter.had_static_fault() {
            debug!(
                errors = self.reporter.diagnostics().len(),
                "static errors, not executing"
            );
            return None;
        }
        statements.into_iter().collect()
    }

    /// Clear error flags between independent runs, such as prompt lines.
    pub fn reset_errors(&mut self) {
        self.reporter.reset();
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber. Safe to call more than once.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=lox_parse=trace`.
/// Logs go to stderr so they never mix with program output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
