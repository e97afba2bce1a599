//! Runtime values for the Quill interpreter.

use std::fmt;
use std::rc::Rc;

use super::SharedNs;

/// Runtime value in the Quill interpreter.
#[derive(Clone, Debug)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value.
    Str(Rc<String>),
    /// Unit value (statements without a result).
    Unit,
    /// A live module handle: a name plus its shared namespace.
    Module(ModuleValue),
}

/// A module as seen by executing code: attribute access reads the
/// module's namespace through this handle.
#[derive(Clone, Debug)]
pub struct ModuleValue {
    /// Dotted name the module was imported as.
    pub name: Rc<str>,
    /// The module's attribute namespace.
    pub ns: SharedNs,
}

impl ModuleValue {
    /// Create a module handle.
    pub fn new(name: impl Into<Rc<str>>, ns: SharedNs) -> Self {
        ModuleValue {
            name: name.into(),
            ns,
        }
    }
}

impl Value {
    /// Convenience constructor for string values.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Rc::new(s.into()))
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Unit => "unit",
            Value::Module(_) => "module",
        }
    }

    /// Integer view, if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            // Module identity, not structural equality
            (Value::Module(a), Value::Module(b)) => a.ns.ptr_eq(&b.ns),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Unit => write!(f, "()"),
            Value::Module(m) => write!(f, "<module '{}'>", m.name),
        }
    }
}
