//! Environment for variable scoping in the interpreter.
//!
//! Scopes are shared, never copied: a closure keeps a handle to the scope
//! it was created in, and every call gets a fresh child of that scope.
//! Only the root and function calls create scopes; `if`, `for` and blocks
//! run in the enclosing one.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::Value;
use monkey_ir::Name;

/// Error returned by `Scope::assign` when assignment fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable not found in any scope.
    Undefined,
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignError::Undefined => f.write_str("assignment to an unbound name"),
        }
    }
}

impl std::error::Error for AssignError {}

/// A single-threaded, reference-counted cell.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether two handles point at the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name here, then outward through the parents.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a scope and, through it, the whole chain of enclosing scopes.
///
/// Cloning the handle shares the scope.
#[derive(Clone)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// Create a root environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope::new()))
    }

    /// Create a child scope of `outer`, as done for every function call.
    #[must_use]
    pub fn enclosed(outer: &Environment) -> Self {
        tracing::trace!("new call scope");
        Environment(LocalScope::new(Scope::with_parent(outer.0.clone())))
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Bind in this scope. Used by `let` and parameter binding.
    pub fn set(&self, name: Name, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Mutate the nearest enclosing binding. Never creates one.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        self.0.borrow_mut().assign(name, value)
    }

    /// Whether both handles refer to the same scope.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Only local names: a closure stored here may capture this very scope.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(Name::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests;
