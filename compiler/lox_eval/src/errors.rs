//! Runtime error type and its constructors.
//!
//! Every message the interpreter can raise is spelled out once, here.

use lox_ir::Value;

/// What went wrong, without the source position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("Operand must be a number.")]
    OperandMustBeNumber,
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    #[error("Operands must be two numbers or two strings.")]
    OperandsMustBeNumbersOrStrings,
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },
}

impl RuntimeErrorKind {
    /// Attach the line of the token that raised the error.
    #[inline]
    pub fn at(self, line: u32) -> RuntimeError {
        RuntimeError { kind: self, line }
    }
}

/// A fault raised while evaluating an expression. Fatal to the current run.
///
/// Renders the way the runtime channel reports it: the message, then the
/// line on its own.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}\n[line {line}]")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: u32,
}

pub type EvalResult<T = Value> = Result<T, RuntimeError>;

#[cold]
pub(crate) fn operand_must_be_number() -> RuntimeErrorKind {
    RuntimeErrorKind::OperandMustBeNumber
}

#[cold]
pub(crate) fn operands_must_be_numbers() -> RuntimeErrorKind {
    RuntimeErrorKind::OperandsMustBeNumbers
}

#[cold]
pub(crate) fn operands_must_be_numbers_or_strings() -> RuntimeErrorKind {
    RuntimeErrorKind::OperandsMustBeNumbersOrStrings
}

#[cold]
pub(crate) fn undefined_variable(name: &str) -> RuntimeErrorKind {
    RuntimeErrorKind::UndefinedVariable {
        name: name.to_owned(),
    }
}
