use std::fmt::{self, Display, Formatter};

use log::debug;
use result::prelude::*;

use crate::{
    access_error::AccessError,
    object::Object,
    property_descriptor::{PropertyAccess, PropertyDescriptor},
    value::Value,
    value_accessor::ValueAccessor,
};

/// A property of an object, reached through a [`PropertyDescriptor`].
///
/// A property described by neither a field nor a read accessor reads as
/// [`Value::Absent`], and a property without a field or a write accessor ignores
/// writes: neither case is an error.
#[derive(Debug, Clone, Copy)]
pub struct PropertyLocation<'a> {
    object: &'a Object,
    descriptor: &'a PropertyDescriptor,
}

impl<'a> PropertyLocation<'a> {
    pub fn new(object: &'a Object, descriptor: &'a PropertyDescriptor) -> Self {
        Self { object, descriptor }
    }
}

impl<'a> ValueAccessor for PropertyLocation<'a> {
    fn read(&self) -> Result<Value, AccessError> {
        match &self.descriptor.access {
            PropertyAccess::Field(field) => field.read(self.object),
            PropertyAccess::Accessors { read, .. } => read
                .as_ref()
                .map(|getter| getter.invoke(self.object))
                .invert()
                .map(Option::unwrap_or_default),
            PropertyAccess::Absent => Ok(Value::Absent),
        }
    }

    fn write(&mut self, value: Value) -> Result<(), AccessError> {
        match &self.descriptor.access {
            PropertyAccess::Field(field) => field.write(self.object, value),
            PropertyAccess::Accessors {
                write: Some(setter),
                ..
            } => setter.invoke(self.object, value),
            PropertyAccess::Accessors { write: None, .. } | PropertyAccess::Absent => {
                debug!("property {} is not writable, ignoring write", self);
                Ok(())
            }
        }
    }
}

impl<'a> Display for PropertyLocation<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {}",
            self.descriptor.name,
            self.object.class_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        access_flags::AccessFlags,
        object::Object,
        property_accessor::PropertyLocation,
        property_descriptor::{FieldHandle, PropertyDescriptor},
        value::Value,
        value_accessor::ValueAccessor,
    };

    #[test]
    fn can_describe_location() {
        let object = Object::new("Employee", 1);
        let descriptor = PropertyDescriptor::field(
            "name",
            FieldHandle::new("Employee", "name", 0, AccessFlags::PUBLIC),
        );
        assert_eq!(
            "name on Employee",
            PropertyLocation::new(&object, &descriptor).to_string()
        );
    }

    #[test]
    fn field_write_is_read_back() {
        let object = Object::new("Employee", 1);
        let descriptor = PropertyDescriptor::field(
            "name",
            FieldHandle::new("Employee", "name", 0, AccessFlags::PUBLIC),
        );
        let mut location = PropertyLocation::new(&object, &descriptor);

        let name = Value::str("Dwight");
        let update = location.update(name.clone()).expect("should update");
        assert!(update.previous.is_absent());
        assert!(update.current.is_same_as(&name));
        assert_eq!(Some(name), object.get_field(0));
    }
}
