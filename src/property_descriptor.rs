use std::{
    cell::Cell,
    fmt::{self, Debug, Formatter},
};

use crate::{
    access_error::{AccessError, InvocationError},
    access_flags::AccessFlags,
    object::Object,
    value::Value,
};

/// A read accessor method, invoked with no arguments besides the object
pub type Getter = fn(&Object) -> Result<Value, InvocationError>;

/// A write accessor method, invoked with the new value
pub type Setter = fn(&Object, Value) -> Result<(), InvocationError>;

/// A direct handle to a field of a class. The field is stored at `index` in
/// every object of that class.
#[derive(Debug, Clone)]
pub struct FieldHandle {
    pub class_name: String,
    pub name: String,
    pub index: usize,
    pub flags: AccessFlags,
    accessible: Cell<bool>,
}

impl FieldHandle {
    pub fn new(class_name: &str, name: &str, index: usize, flags: AccessFlags) -> Self {
        Self {
            class_name: class_name.to_string(),
            name: name.to_string(),
            index,
            flags,
            accessible: Cell::new(false),
        }
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible.get()
    }

    /// Grants or revokes access to private and final fields
    pub fn set_accessible(&self, accessible: bool) {
        self.accessible.set(accessible)
    }

    pub(crate) fn read(&self, object: &Object) -> Result<Value, AccessError> {
        check_access(
            self.flags.requires_access_for_read(),
            self.is_accessible(),
            &self.class_name,
            &self.name,
        )?;
        self.check_member_of(object)?;
        object
            .get_field(self.index)
            .ok_or_else(|| self.no_such_field())
    }

    pub(crate) fn write(&self, object: &Object, value: Value) -> Result<(), AccessError> {
        check_access(
            self.flags.requires_access_for_write(),
            self.is_accessible(),
            &self.class_name,
            &self.name,
        )?;
        self.check_member_of(object)?;
        if object.set_field(self.index, value) {
            Ok(())
        } else {
            Err(self.no_such_field())
        }
    }

    fn check_member_of(&self, object: &Object) -> Result<(), AccessError> {
        if object.class_name() == self.class_name {
            Ok(())
        } else {
            Err(AccessError::NoSuchMember {
                class: object.class_name().to_string(),
                member: self.name.clone(),
            })
        }
    }

    fn no_such_field(&self) -> AccessError {
        AccessError::NoSuchMember {
            class: self.class_name.clone(),
            member: self.name.clone(),
        }
    }
}

/// A handle to an accessor method of a class
#[derive(Clone)]
pub struct MethodHandle<F> {
    pub class_name: String,
    pub name: String,
    pub flags: AccessFlags,
    callback: F,
    accessible: Cell<bool>,
}

impl<F> MethodHandle<F> {
    pub fn new(class_name: &str, name: &str, flags: AccessFlags, callback: F) -> Self {
        Self {
            class_name: class_name.to_string(),
            name: name.to_string(),
            flags,
            callback,
            accessible: Cell::new(false),
        }
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible.get()
    }

    /// Grants or revokes access to a private method
    pub fn set_accessible(&self, accessible: bool) {
        self.accessible.set(accessible)
    }

    /// Class and method name, as used in error messages
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.class_name, self.name)
    }

    fn check_invocable_on(&self, object: &Object) -> Result<(), AccessError> {
        check_access(
            self.flags.contains(AccessFlags::PRIVATE),
            self.is_accessible(),
            &self.class_name,
            &self.name,
        )?;
        if object.class_name() == self.class_name {
            Ok(())
        } else {
            Err(AccessError::NoSuchMember {
                class: object.class_name().to_string(),
                member: self.name.clone(),
            })
        }
    }

    fn invocation_failed(&self, source: InvocationError) -> AccessError {
        AccessError::InvocationFailed {
            method: self.qualified_name(),
            source,
        }
    }
}

impl MethodHandle<Getter> {
    pub(crate) fn invoke(&self, object: &Object) -> Result<Value, AccessError> {
        self.check_invocable_on(object)?;
        (self.callback)(object).map_err(|err| self.invocation_failed(err))
    }
}

impl MethodHandle<Setter> {
    pub(crate) fn invoke(&self, object: &Object, value: Value) -> Result<(), AccessError> {
        self.check_invocable_on(object)?;
        (self.callback)(object, value).map_err(|err| self.invocation_failed(err))
    }
}

impl<F> Debug for MethodHandle<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "method {} flags {:?} accessible {}",
            self.qualified_name(),
            self.flags,
            self.is_accessible()
        )
    }
}

fn check_access(
    required: bool,
    accessible: bool,
    class_name: &str,
    member: &str,
) -> Result<(), AccessError> {
    if required && !accessible {
        Err(AccessError::AccessDenied {
            class: class_name.to_string(),
            member: member.to_string(),
        })
    } else {
        Ok(())
    }
}

/// How a property can be reached. Resolved once, when the descriptor is built.
#[derive(Debug, Clone)]
pub enum PropertyAccess {
    Field(FieldHandle),
    Accessors {
        read: Option<MethodHandle<Getter>>,
        write: Option<MethodHandle<Setter>>,
    },
    Absent,
}

/// Describes how to read and write a named property of an object
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub name: String,
    pub access: PropertyAccess,
}

impl PropertyDescriptor {
    pub fn field(name: &str, handle: FieldHandle) -> Self {
        Self {
            name: name.to_string(),
            access: PropertyAccess::Field(handle),
        }
    }

    pub fn accessors(
        name: &str,
        read: Option<MethodHandle<Getter>>,
        write: Option<MethodHandle<Setter>>,
    ) -> Self {
        Self {
            name: name.to_string(),
            access: PropertyAccess::Accessors { read, write },
        }
    }

    pub fn absent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            access: PropertyAccess::Absent,
        }
    }

    pub fn has_field(&self) -> bool {
        matches!(self.access, PropertyAccess::Field(_))
    }

    pub fn has_read_accessor(&self) -> bool {
        matches!(self.access, PropertyAccess::Accessors { read: Some(_), .. })
    }

    pub fn has_write_accessor(&self) -> bool {
        matches!(self.access, PropertyAccess::Accessors { write: Some(_), .. })
    }

    pub fn is_writable(&self) -> bool {
        self.has_field() || self.has_write_accessor()
    }
}
