//! `InterpreterBuilder` for creating interpreters with non-default output or
//! a pre-populated environment.

use super::Interpreter;
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// Defaults: stdout printing and a fresh root [`Environment`].
#[derive(Default)]
pub struct InterpreterBuilder {
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    /// Send `print` output to `handler`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            env: self.env.unwrap_or_default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
        }
    }
}
