#![allow(dead_code)]

use log::info;

use modak_access::{
    access_error::InvocationError,
    access_flags::AccessFlags,
    object::{Object, ObjectRef},
    property_descriptor::{FieldHandle, Getter, MethodHandle, PropertyDescriptor, Setter},
    value::Value,
};

pub const EMPLOYEE: &str = "Employee";

pub const NAME: usize = 0;
pub const SALARY: usize = 1;
pub const ID: usize = 2;

pub const MIN_SALARY: i32 = 0;
pub const MAX_SALARY: i32 = 250_000;

pub fn new_employee(id: i32, name: &str, salary: i32) -> ObjectRef {
    let employee = Object::new_ref(EMPLOYEE, 3);
    employee.set_field(NAME, Value::str(name));
    employee.set_field(SALARY, Value::Int(salary));
    employee.set_field(ID, Value::Int(id));
    info!("created employee: {:?}", employee);
    employee
}

pub fn name_field() -> PropertyDescriptor {
    PropertyDescriptor::field(
        "name",
        FieldHandle::new(EMPLOYEE, "name", NAME, AccessFlags::PUBLIC),
    )
}

pub fn salary_field() -> PropertyDescriptor {
    PropertyDescriptor::field(
        "salary",
        FieldHandle::new(EMPLOYEE, "salary", SALARY, AccessFlags::PRIVATE),
    )
}

pub fn id_field() -> PropertyDescriptor {
    PropertyDescriptor::field(
        "id",
        FieldHandle::new(
            EMPLOYEE,
            "id",
            ID,
            AccessFlags::PUBLIC | AccessFlags::FINAL,
        ),
    )
}

fn get_name(employee: &Object) -> Result<Value, InvocationError> {
    Ok(employee.get_field(NAME).unwrap_or_default())
}

// Always stores a new string, even if the trimmed content did not change
fn set_name(employee: &Object, value: Value) -> Result<(), InvocationError> {
    match value {
        Value::Str(name) => {
            employee.set_field(NAME, Value::str(name.trim()));
            Ok(())
        }
        other => Err(InvocationError::new(format!("not a name: {other}"))),
    }
}

fn get_salary(employee: &Object) -> Result<Value, InvocationError> {
    Ok(employee.get_field(SALARY).unwrap_or_default())
}

fn set_salary(employee: &Object, value: Value) -> Result<(), InvocationError> {
    match value {
        Value::Int(salary) => {
            employee.set_field(SALARY, Value::Int(salary.clamp(MIN_SALARY, MAX_SALARY)));
            Ok(())
        }
        other => Err(InvocationError::new(format!("not a salary: {other}"))),
    }
}

fn get_bonus(_: &Object) -> Result<Value, InvocationError> {
    Err(InvocationError::new("bonus has not been computed yet"))
}

fn getter(name: &str, flags: AccessFlags, callback: Getter) -> MethodHandle<Getter> {
    MethodHandle::new(EMPLOYEE, name, flags, callback)
}

fn setter(name: &str, flags: AccessFlags, callback: Setter) -> MethodHandle<Setter> {
    MethodHandle::new(EMPLOYEE, name, flags, callback)
}

pub fn name_accessors() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "name",
        Some(getter("getName", AccessFlags::PUBLIC, get_name)),
        Some(setter("setName", AccessFlags::PUBLIC, set_name)),
    )
}

pub fn salary_accessors() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "salary",
        Some(getter("getSalary", AccessFlags::PUBLIC, get_salary)),
        Some(setter("setSalary", AccessFlags::PUBLIC, set_salary)),
    )
}

pub fn read_only_salary() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "salary",
        Some(getter("getSalary", AccessFlags::PUBLIC, get_salary)),
        None,
    )
}

pub fn write_only_salary() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "salary",
        None,
        Some(setter("setSalary", AccessFlags::PUBLIC, set_salary)),
    )
}

pub fn private_salary_accessors() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "salary",
        Some(getter("getSalary", AccessFlags::PRIVATE, get_salary)),
        Some(setter("setSalary", AccessFlags::PRIVATE, set_salary)),
    )
}

pub fn bonus_accessors() -> PropertyDescriptor {
    PropertyDescriptor::accessors(
        "bonus",
        Some(getter("getBonus", AccessFlags::PUBLIC, get_bonus)),
        None,
    )
}
