use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use tracing::trace;

use crate::interpreter::value::core::Value;

/// Handle of a scope record inside a [`ScopeChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// A single scope: its own bindings plus a link to the enclosing scope.
#[derive(Debug)]
struct Scope<K> {
    bindings: HashMap<K, Value>,
    parent:   Option<ScopeId>,
}

/// Returned by [`ScopeChain::assign`] when no enclosing scope binds the name.
///
/// Carries the value back so the caller can define it instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Unbound(pub Value);

/// Lexical scopes stored in an arena and linked by parent handles.
///
/// The chain always holds the global scope. [`enter`](Self::enter) pushes a
/// child of the current scope and [`exit`](Self::exit) pops it again, so scopes
/// are strictly nested. Lookups walk from the current scope outward.
///
/// The chain is generic over the binding key: the tree-walking evaluator keys
/// by variable name, the compiled backend by interned symbol.
///
/// # Example
/// ```
/// use novolang::interpreter::{scope::ScopeChain, value::core::Value};
///
/// let mut scopes = ScopeChain::<String>::new();
/// scopes.define("x".to_string(), Value::from(1.0));
///
/// scopes.enter();
/// scopes.assign("x", Value::from(2.0)).unwrap();
/// scopes.exit();
///
/// assert_eq!(scopes.get("x"), Some(&Value::from(2.0)));
/// ```
#[derive(Debug)]
pub struct ScopeChain<K> {
    scopes:  Vec<Scope<K>>,
    current: ScopeId,
}

impl<K: Eq + Hash> Default for ScopeChain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> ScopeChain<K> {
    /// Creates a chain holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:  vec![Scope { bindings: HashMap::new(),
                                     parent:   None, }],
               current: ScopeId(0), }
    }

    /// Handle of the innermost scope.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of scopes currently alive, including the global one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Pushes a new child of the current scope and makes it current.
    pub fn enter(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 parent:   Some(self.current), });
        self.current = id;
        trace!(depth = self.scopes.len(), "entered scope");
        id
    }

    /// Destroys the current scope and makes its parent current.
    ///
    /// The global scope is never removed; exiting it does nothing.
    pub fn exit(&mut self) {
        let Some(parent) = self.scopes[self.current.0].parent else {
            return;
        };
        self.scopes.pop();
        self.current = parent;
        trace!(depth = self.scopes.len(), "exited scope");
    }

    /// Binds `key` in the current scope, shadowing any outer binding.
    pub fn define(&mut self, key: K, value: Value) {
        self.scopes[self.current.0].bindings.insert(key, value);
    }

    /// Updates the nearest existing binding of `key`.
    ///
    /// # Errors
    /// Returns [`Unbound`] holding `value` when no scope in the chain binds
    /// `key`. Nothing is modified in that case.
    pub fn assign<Q>(&mut self, key: &Q, value: Value) -> Result<(), Unbound>
        where K: Borrow<Q>,
              Q: Eq + Hash + ?Sized
    {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let scope = &mut self.scopes[id.0];
            if let Some(slot) = scope.bindings.get_mut(key) {
                *slot = value;
                return Ok(());
            }
            cursor = scope.parent;
        }
        Err(Unbound(value))
    }

    /// Resolves `key` by walking outward from the current scope.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&Value>
        where K: Borrow<Q>,
              Q: Eq + Hash + ?Sized
    {
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.bindings.get(key) {
                return Some(value);
            }
            cursor = scope.parent;
        }
        None
    }
}
