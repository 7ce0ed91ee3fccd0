//! RAII scope guard for block execution.
//!
//! [`ScopedInterpreter`] pushes a child scope when created and pops it when
//! dropped, so the enclosing scope is restored on every exit path, including
//! `?` returns and unwinding.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Access the interpreter through this guard; it derefs to [`Interpreter`].
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a child scope that is left when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` inside a child scope.
    pub fn with_env_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }
}
