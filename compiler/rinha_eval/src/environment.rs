//! Environment for variable bindings.
//!
//! A single flat mapping from name to value. `Let` writes into the current
//! environment; each call evaluates its body in a [`fork`](Environment::fork)
//! of the caller's. The map is persistent, so forking is O(1) and later
//! writes to either side are invisible to the other.

use std::hash::BuildHasherDefault;

use rinha_ir::Name;
use rustc_hash::FxHasher;

use crate::Value;

type Bindings = im::HashMap<Name, Value, BuildHasherDefault<FxHasher>>;

/// Variable bindings visible to the term being evaluated.
#[derive(Clone, Default)]
pub struct Environment {
    bindings: Bindings,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            bindings: Bindings::default(),
        }
    }

    /// Look up a binding. Absence is not an error at this layer.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Bind `name`, replacing any previous binding.
    #[inline]
    pub fn set(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Independent copy with identical bindings.
    #[inline]
    #[must_use]
    pub fn fork(&self) -> Self {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("bindings", &self.bindings.len())
            .finish()
    }
}
