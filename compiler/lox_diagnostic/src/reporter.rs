//! The error sink shared by every pipeline stage.

use lox_ir::Token;
use tracing::debug;

use crate::{Diagnostic, DiagnosticKind, ErrorGuaranteed, Location};

/// Where reported diagnostics are written as they arrive.
///
/// Every emitter also retains the diagnostics, so callers can always query
/// them through [`Reporter::diagnostics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Emitter {
    /// One line per static error, two per runtime error, on stderr.
    Stderr,
    /// Retain only. Used by tests and embedding hosts.
    #[default]
    Capture,
}

/// Explicit error-reporting context.
///
/// Flags stay set until [`reset`](Self::reset); the REPL resets after every
/// line, a file run never does.
#[derive(Debug, Default)]
pub struct Reporter {
    emitter: Emitter,
    diagnostics: Vec<Diagnostic>,
    had_static_fault: bool,
    had_runtime_fault: bool,
}

impl Reporter {
    pub fn new(emitter: Emitter) -> Self {
        Reporter {
            emitter,
            ..Reporter::default()
        }
    }

    /// Reporter writing to stderr.
    pub fn stderr() -> Self {
        Self::new(Emitter::Stderr)
    }

    /// Reporter that only retains diagnostics.
    pub fn capture() -> Self {
        Self::new(Emitter::Capture)
    }

    /// Report a lexical error (no token context).
    pub fn error(&mut self, line: u32, message: impl Into<String>) -> ErrorGuaranteed {
        self.emit(Diagnostic::lexical(line, message))
    }

    /// Report a syntax error at `token`.
    pub fn error_at(&mut self, token: &Token, message: impl Into<String>) -> ErrorGuaranteed {
        self.emit(Diagnostic::syntax(token, message))
    }

    /// Report a static error with an explicit location.
    ///
    /// `Location::None` is classified as lexical, anything else as syntax.
    pub fn report(
        &mut self,
        line: u32,
        location: Location,
        message: impl Into<String>,
    ) -> ErrorGuaranteed {
        let kind = match location {
            Location::None => DiagnosticKind::Lexical,
            Location::At(_) | Location::End => DiagnosticKind::Syntax,
        };
        self.emit(Diagnostic {
            kind,
            line,
            location,
            message: message.into(),
        })
    }

    /// Report a runtime error raised by the operator or name on `line`.
    pub fn runtime_error(&mut self, line: u32, message: impl Into<String>) -> ErrorGuaranteed {
        self.emit(Diagnostic::runtime(line, message))
    }

    /// Record, emit and flag a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) -> ErrorGuaranteed {
        debug!(
            kind = ?diagnostic.kind,
            line = diagnostic.line,
            message = %diagnostic.message,
            "diagnostic reported"
        );
        if diagnostic.kind.is_static() {
            self.had_static_fault = true;
        } else {
            self.had_runtime_fault = true;
        }
        if self.emitter == Emitter::Stderr {
            eprintln!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
        ErrorGuaranteed::new()
    }

    /// Whether a lexical or syntax error was reported since the last reset.
    #[inline]
    pub fn had_static_fault(&self) -> bool {
        self.had_static_fault
    }

    /// Whether a runtime error was reported since the last reset.
    #[inline]
    pub fn had_runtime_fault(&self) -> bool {
        self.had_runtime_fault
    }

    /// Proof of an earlier error, if any was reported since the last reset.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        (self.had_static_fault || self.had_runtime_fault).then(ErrorGuaranteed::new)
    }

    /// Clear both flags and the retained diagnostics.
    pub fn reset(&mut self) {
        self.had_static_fault = false;
        self.had_runtime_fault = false;
        self.diagnostics.clear();
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// All retained diagnostics rendered one per line, as stderr would show them.
    pub fn rendered(&self) -> String {
        let mut out = String::new();
        for diagnostic in &self.diagnostics {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
        out
    }

    pub fn emitter(&self) -> Emitter {
        self.emitter
    }
}
