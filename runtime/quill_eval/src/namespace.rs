//! Module and interactive namespaces.

use rustc_hash::FxHashMap;

use quill_ir::Name;

use super::{Shared, Value};

/// A mutable symbol table: the read and write scope of executing source.
///
/// Top-level names defined by one code unit are visible to later units
/// executed against the same namespace, and end up as module attributes.
#[derive(Debug, Default)]
pub struct Namespace {
    bindings: FxHashMap<Name, Value>,
}

/// Shared handle to a [`Namespace`].
///
/// This is what the shell's ambient context points at and what a module
/// hands out as its attribute table.
pub type SharedNs = Shared<Namespace>;

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Namespace {
            bindings: FxHashMap::default(),
        }
    }

    /// Fresh shared handle to an empty namespace.
    pub fn shared() -> SharedNs {
        Shared::new(Namespace::new())
    }

    /// Define or rebind a name.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name.
    #[inline]
    pub fn get(&self, name: Name) -> Option<Value> {
        self.bindings.get(&name).cloned()
    }

    /// Whether a name is bound.
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Iterate over all bindings (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.bindings.iter().map(|(name, value)| (*name, value))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the namespace has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_ir::StringInterner;

    #[test]
    fn test_define_and_get() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut ns = Namespace::new();
        ns.define(x, Value::Int(42));
        assert_eq!(ns.get(x), Some(Value::Int(42)));
        assert!(ns.contains(x));
    }

    #[test]
    fn test_rebind_replaces() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut ns = Namespace::new();
        ns.define(x, Value::Int(1));
        ns.define(x, Value::Int(2));
        assert_eq!(ns.get(x), Some(Value::Int(2)));
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_shared_namespace_aliases() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let ns = Namespace::shared();
        let alias = ns.clone();
        ns.borrow_mut().define(x, Value::Int(5));
        assert_eq!(alias.borrow().get(x), Some(Value::Int(5)));
    }
}
