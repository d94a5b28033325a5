// volt-core - Environment for lexical scoping
// Copyright (c) 2026 The Volt Authors. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::context::Ctx;
use crate::error::{Error, Result};
use crate::value::Value;

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. Each environment
/// has its own bindings map and optionally a parent for outer-scope lookup.
/// Function values capture their defining environment by handle, so
/// mutations through one closure are visible to every closure sharing the
/// scope.
///
/// The root environment additionally carries the runtime context (I/O
/// handler, RNG, clock); children reach it by walking to the root.
///
/// # Examples
///
/// ```
/// use volt_core::{Env, Value};
///
/// let env = Env::new();
/// env.define("x", Value::Int(42));
/// assert_eq!(env.lookup("x").unwrap(), Value::Int(42));
///
/// // Children see and may shadow parent bindings.
/// let child = env.child();
/// assert_eq!(child.lookup("x").unwrap(), Value::Int(42));
/// child.define("x", Value::Int(100));
/// assert_eq!(child.lookup("x").unwrap(), Value::Int(100));
/// assert_eq!(env.lookup("x").unwrap(), Value::Int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<String, Value>,
    parent: Option<Env>,
    /// Runtime context (only set on the root environment)
    ctx: Option<Ctx>,
}

impl Env {
    /// Create a new root environment with a default (stdio) context.
    pub fn new() -> Self {
        Env::with_ctx(Ctx::new())
    }

    /// Create a new root environment carrying the given runtime context.
    pub fn with_ctx(ctx: Ctx) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
                ctx: Some(ctx),
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
                ctx: None, // children share the root's context
            })),
        }
    }

    /// Get the runtime context from the root environment.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    ///
    /// # Panics
    ///
    /// Panics if the root is missing its context, which indicates an
    /// internal bug (roots created via `Env::new`/`with_ctx` always have
    /// one).
    pub fn ctx(&self) -> Ctx {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(ref ctx) = inner.ctx {
                return ctx.clone();
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => panic!("Root environment missing runtime context"),
            }
        }
    }

    /// Define a binding in this environment (not a parent).
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.inner.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Look up a name in this environment or the parent chain.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.try_lookup(name)
            .ok_or_else(|| Error::UndefinedName(name.to_string()))
    }

    /// Look up a name, returning `None` when unbound.
    /// Uses iterative traversal to avoid stack overflow on deep chains.
    #[must_use]
    pub fn try_lookup(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(value) = inner.bindings.get(name) {
                return Some(value.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return None,
            }
        }
    }

    /// Rebind a name in the scope where it is defined, walking up the
    /// chain. Returns false when the name is not bound anywhere; the caller
    /// then decides to define it in the innermost scope instead.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut current = self.clone();
        loop {
            {
                let mut inner = current.inner.borrow_mut();
                if let Some(slot) = inner.bindings.get_mut(name) {
                    *slot = value;
                    return true;
                }
            }
            let parent = current.inner.borrow().parent.clone();
            match parent {
                Some(p) => current = p,
                None => return false,
            }
        }
    }

    /// Check whether a name is bound in this environment or a parent.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.try_lookup(name).is_some()
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_and_lookup() {
        let env = Env::new();
        env.define("x", Value::Int(42));
        assert_eq!(env.lookup("x").unwrap(), Value::Int(42));
    }

    #[test]
    fn undefined_name_is_an_error() {
        let env = Env::new();
        assert!(env.lookup("x").is_err());
    }

    #[test]
    fn child_inherits_parent() {
        let parent = Env::new();
        parent.define("x", Value::Int(42));
        let child = parent.child();
        assert_eq!(child.lookup("x").unwrap(), Value::Int(42));
    }

    #[test]
    fn child_shadows_parent() {
        let parent = Env::new();
        parent.define("x", Value::Int(42));
        let child = parent.child();
        child.define("x", Value::Int(100));
        assert_eq!(child.lookup("x").unwrap(), Value::Int(100));
        assert_eq!(parent.lookup("x").unwrap(), Value::Int(42));
    }

    #[test]
    fn assign_updates_in_defining_scope() {
        let parent = Env::new();
        parent.define("x", Value::Int(1));
        let child = parent.child();
        assert!(child.assign("x", Value::Int(2)));
        assert_eq!(parent.lookup("x").unwrap(), Value::Int(2));
    }

    #[test]
    fn assign_fails_for_unbound_names() {
        let env = Env::new();
        assert!(!env.assign("x", Value::Int(1)));
    }

    #[test]
    fn shared_scope_is_visible_across_clones() {
        let env = Env::new();
        let alias = env.clone();
        env.define("n", Value::Int(1));
        alias.assign("n", Value::Int(2));
        assert_eq!(env.lookup("n").unwrap(), Value::Int(2));
    }

    #[test]
    fn ctx_is_reachable_from_deep_children() {
        let root = Env::new();
        let deep = root.child().child().child();
        // Both handles should refer to the same context.
        assert!(deep.ctx().same_as(&root.ctx()));
    }
}
