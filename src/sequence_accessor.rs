use std::fmt::{self, Display, Formatter};

use crate::{
    access_error::AccessError,
    value::Value,
    value_accessor::{checked_index, ValueAccessor},
};

/// The element of a list at a given index. Writes replace the element, they
/// never insert, so the length of the list does not change.
#[derive(Debug)]
pub struct SequenceElement<'a> {
    sequence: &'a mut Vec<Value>,
    index: i32,
}

impl<'a> SequenceElement<'a> {
    pub fn new(sequence: &'a mut Vec<Value>, index: i32) -> Self {
        Self { sequence, index }
    }
}

impl<'a> ValueAccessor for SequenceElement<'a> {
    fn read(&self) -> Result<Value, AccessError> {
        let position = checked_index(self.index, self.sequence.len())?;
        Ok(self.sequence[position].clone())
    }

    fn write(&mut self, value: Value) -> Result<(), AccessError> {
        let position = checked_index(self.index, self.sequence.len())?;
        self.sequence[position] = value;
        Ok(())
    }
}

impl<'a> Display for SequenceElement<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.index)
    }
}
