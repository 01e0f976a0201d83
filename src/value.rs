use std::{
    cell::RefCell,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

use itertools::Itertools;

use crate::object::ObjectRef;

/// A value stored in an object field, a map entry, an array slot or a list element.
///
/// Note that `==` compares values structurally, while change detection uses
/// [`Value::is_same_as`], which compares references by identity.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// No value: an unset field, a missing map entry, or a property without a readable source
    #[default]
    Absent,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(Rc<str>),
    Object(ObjectRef),
    Array(ArrayRef),
}

pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

impl Value {
    pub fn str(value: &str) -> Self {
        Value::Str(Rc::from(value))
    }

    pub fn new_array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Identity comparison. Immediates (booleans, numbers) are the same when they
    /// have the same variant and bit pattern; strings, objects and arrays are the
    /// same only when they share the allocation.
    pub fn is_same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Displays the value without looking inside arrays, which are shown by
    /// address. Safe to use while an array is mutably borrowed or contains itself.
    pub fn shallow(&self) -> ShallowValue<'_> {
        ShallowValue(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::str(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "absent"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Long(l) => write!(f, "{l}L"),
            Value::Float(x) => write!(f, "{x}f"),
            Value::Double(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Object(object) => write!(f, "{object}"),
            Value::Array(array) => write!(f, "[{}]", array.borrow().iter().join(", ")),
        }
    }
}

pub struct ShallowValue<'a>(&'a Value);

impl<'a> Display for ShallowValue<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Array(array) => write!(f, "array@{:p}", Rc::as_ptr(array)),
            value => Display::fmt(value, f),
        }
    }
}
