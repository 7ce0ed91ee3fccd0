//! Environment for variable scoping in the interpreter.
//!
//! A stack of scopes, each linked to its enclosing scope. Blocks push a
//! child scope on entry and pop it on exit; lookups and assignments walk the
//! chain innermost first.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use lox_ir::{Token, Value};

use crate::errors::{undefined_variable, EvalResult};

/// Single-threaded shared scope handle.
///
/// A child scope observes its parent without owning it exclusively, so the
/// parent stays alive for as long as any child refers to it.
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub(crate) fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub(crate) fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalScope").field(&self.0).finish()
    }
}

/// Bindings of one lexical block.
#[derive(Debug, Default)]
pub(crate) struct Scope {
    values: FxHashMap<String, Value>,
    enclosing: Option<LocalScope<Scope>>,
}

impl Scope {
    fn with_enclosing(enclosing: LocalScope<Scope>) -> Self {
        Scope {
            values: FxHashMap::default(),
            enclosing: Some(enclosing),
        }
    }

    /// Bind `name` in this scope. Redefinition overwrites.
    #[inline]
    fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_owned(), value);
    }

    /// Walks the chain with a loop; block nesting depth is unbounded.
    fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        let mut next = self.enclosing.clone();
        while let Some(scope) = next {
            let guard = scope.borrow();
            if let Some(value) = guard.values.get(name) {
                return Some(value.clone());
            }
            next = guard.enclosing.clone();
        }
        None
    }

    /// Rebind `name` in the nearest scope that defines it.
    fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return true;
        }
        let mut next = self.enclosing.clone();
        while let Some(scope) = next {
            let mut guard = scope.borrow_mut();
            if let Some(slot) = guard.values.get_mut(name) {
                *slot = value;
                return true;
            }
            next = guard.enclosing.clone();
        }
        false
    }
}

/// The active scope chain of one interpreter.
pub struct Environment {
    /// Innermost scope last. Never empty.
    scopes: Vec<LocalScope<Scope>>,
    global: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root environment with an empty global scope.
    pub fn new() -> Self {
        let global = LocalScope::new(Scope::default());
        Environment {
            scopes: vec![global.clone()],
            global,
        }
    }

    /// Number of active scopes, including the global scope.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Enter a child scope of the current one.
    #[inline]
    pub fn push_scope(&mut self) {
        let child = LocalScope::new(Scope::with_enclosing(self.current().clone()));
        self.scopes.push(child);
    }

    /// Leave the current scope. The global scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    #[inline]
    fn current(&self) -> &LocalScope<Scope> {
        self.scopes.last().unwrap_or(&self.global)
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        self.current().borrow_mut().define(name, value);
    }

    /// Resolve `name` innermost first.
    pub fn get(&self, name: &Token) -> EvalResult {
        self.current()
            .borrow()
            .get(&name.lexeme)
            .ok_or_else(|| undefined_variable(&name.lexeme).at(name.line))
    }

    /// Rebind `name` in the nearest scope that already defines it.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if self.current().borrow_mut().assign(&name.lexeme, value) {
            Ok(())
        } else {
            Err(undefined_variable(&name.lexeme).at(name.line))
        }
    }

    /// Look up a global binding directly, bypassing any active block scopes.
    pub fn global(&self, name: &str) -> Option<Value> {
        self.global.borrow().values.get(name).cloned()
    }
}

/// Pops innermost first, so each scope is released while its parent is still
/// held by the stack and no `Rc` chain unwinds recursively.
impl Drop for Environment {
    fn drop(&mut self) {
        while self.scopes.pop().is_some() {}
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("global", &self.global)
            .finish_non_exhaustive()
    }
}
