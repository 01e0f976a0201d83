use std::fmt::{self, Display, Formatter};

use crate::{
    access_error::AccessError,
    value::Value,
    value_accessor::{checked_index, ValueAccessor},
};

/// The element of a fixed-size array at a given index
#[derive(Debug)]
pub struct ArrayElement<'a> {
    array: &'a mut [Value],
    index: i32,
}

impl<'a> ArrayElement<'a> {
    pub fn new(array: &'a mut [Value], index: i32) -> Self {
        Self { array, index }
    }
}

impl<'a> ValueAccessor for ArrayElement<'a> {
    /// Errors will be returned if the index is invalid
    fn read(&self) -> Result<Value, AccessError> {
        let position = checked_index(self.index, self.array.len())?;
        Ok(self.array[position].clone())
    }

    /// Errors will be returned if the index is invalid
    fn write(&mut self, value: Value) -> Result<(), AccessError> {
        let position = checked_index(self.index, self.array.len())?;
        self.array[position] = value;
        Ok(())
    }
}

impl<'a> Display for ArrayElement<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.index)
    }
}
