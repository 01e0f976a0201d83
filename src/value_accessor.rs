use std::fmt::{self, Display, Formatter};

use log::trace;

use crate::{access_error::AccessError, value::Value};

/// Uniform read and write access to a location holding a [`Value`]: a property of an
/// object, an entry of a map, or an element of an array or a list.
///
/// Implementors only provide [`read`](ValueAccessor::read) and
/// [`write`](ValueAccessor::write); change detection is shared by all of them and
/// always reads the location back after writing it, so that write accessors that
/// transform their argument report the value they actually stored.
///
/// Writes are not atomic: the location is read, written and read again, and
/// nothing prevents a write accessor (or anything it calls) from modifying the
/// location in between. Callers that share the underlying storage must
/// serialize their accesses themselves.
pub trait ValueAccessor: Display {
    fn read(&self) -> Result<Value, AccessError>;

    fn write(&mut self, value: Value) -> Result<(), AccessError>;

    fn get(&self) -> Result<Value, AccessError> {
        self.read()
    }

    /// Writes the value and returns what was observed before and after the write
    fn update(&mut self, value: Value) -> Result<Update, AccessError> {
        let previous = self.read()?;
        self.write(value)?;
        let current = self.read()?;
        let update = Update { previous, current };
        trace!("updated {}: {}", self, update);
        Ok(update)
    }

    /// Writes the value and returns whether the observed value has changed, by identity
    fn set(&mut self, value: Value) -> Result<bool, AccessError> {
        self.update(value).map(|update| update.changed())
    }
}

/// The values observed at a location before and after a write
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub previous: Value,
    pub current: Value,
}

impl Update {
    pub fn changed(&self) -> bool {
        !self.previous.is_same_as(&self.current)
    }
}

impl Display for Update {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.changed() {
            write!(f, "{} -> {}", self.previous.shallow(), self.current.shallow())
        } else {
            write!(f, "unchanged {}", self.current.shallow())
        }
    }
}

/// Converts an index into a position within `[0, length)`
pub(crate) fn checked_index(index: i32, length: usize) -> Result<usize, AccessError> {
    usize::try_from(index)
        .ok()
        .filter(|position| *position < length)
        .ok_or(AccessError::IndexOutOfRange { index, length })
}
