use std::{
    cell::RefCell,
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
};

use crate::value::Value;

/// An object whose fields are addressed by index. The field values live behind a
/// `RefCell`, so that fields can be written through a shared reference, the same
/// way accessor methods receive the object they are invoked on.
#[derive(PartialEq)]
pub struct Object {
    class_name: String,
    fields: RefCell<Vec<Value>>,
}

pub type ObjectRef = Rc<Object>;

impl Object {
    /// Creates an object with all its fields absent
    pub fn new(class_name: &str, num_fields: usize) -> Self {
        Self {
            class_name: class_name.to_string(),
            fields: RefCell::new(vec![Value::Absent; num_fields]),
        }
    }

    pub fn new_ref(class_name: &str, num_fields: usize) -> ObjectRef {
        Rc::new(Self::new(class_name, num_fields))
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn num_fields(&self) -> usize {
        self.fields.borrow().len()
    }

    pub fn get_field(&self, index: usize) -> Option<Value> {
        self.fields.borrow().get(index).cloned()
    }

    /// Returns false, leaving the object untouched, if there is no field at the given index
    pub fn set_field(&self, index: usize, value: Value) -> bool {
        match self.fields.borrow_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// A hash of the object address, stable for the lifetime of the object
    pub fn identity_hash_code(&self) -> u32 {
        let addr = self as *const Object as u64;
        ((addr >> 32) ^ addr) as u32
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "class: {} fields {:?}", self.class_name, self.fields)
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:x}", self.class_name, self.identity_hash_code())
    }
}
