//! A single reported error and its textual rendering.

use std::fmt;

use lox_ir::Token;

/// Which stage produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Scanner fault (unknown character, unterminated string).
    Lexical,
    /// Parser fault (missing token, invalid assignment target).
    Syntax,
    /// Interpreter fault. Terminates the run.
    Runtime,
}

impl DiagnosticKind {
    /// Lexical and syntax errors share the static channel.
    #[inline]
    pub fn is_static(self) -> bool {
        !matches!(self, DiagnosticKind::Runtime)
    }
}

/// Where on the line a static error points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    /// No token context (lexical errors).
    None,
    /// At a specific token, identified by its lexeme.
    At(String),
    /// The token stream was exhausted.
    End,
}

impl Location {
    /// Location of a parse error at `token`.
    pub fn of_token(token: &Token) -> Self {
        if token.is_eof() {
            Location::End
        } else {
            Location::At(token.lexeme.clone())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::None => Ok(()),
            Location::At(lexeme) => write!(f, " at '{lexeme}'"),
            Location::End => f.write_str(" at end"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: u32,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Lexical,
            line,
            location: Location::None,
            message: message.into(),
        }
    }

    pub fn syntax(token: &Token, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Syntax,
            line: token.line,
            location: Location::of_token(token),
            message: message.into(),
        }
    }

    pub fn runtime(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: DiagnosticKind::Runtime,
            line,
            location: Location::None,
            message: message.into(),
        }
    }
}

/// Static errors render as `[line N] Error<where>: <message>`.
/// Runtime errors render as two lines: `<message>` then `[line N]`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Lexical | DiagnosticKind::Syntax => write!(
                f,
                "[line {}] Error{}: {}",
                self.line, self.location, self.message
            ),
            DiagnosticKind::Runtime => write!(f, "{}\n[line {}]", self.message, self.line),
        }
    }
}
