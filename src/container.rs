use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::Hash,
};

use crate::{
    access_error::AccessError, array_accessor::ArrayElement, map_accessor::MapEntry,
    sequence_accessor::SequenceElement, value::Value, value_accessor::ValueAccessor,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum ContainerKind {
    Map,
    #[strum(to_string = "List")]
    Sequence,
    Array,
}

/// Addresses an element of a container: maps are addressed by key, lists and
/// arrays by index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerKey<K = String> {
    Key(K),
    Index(i32),
}

impl<K: Debug> Display for ContainerKey<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKey::Key(key) => write!(f, "key {key:?}"),
            ContainerKey::Index(index) => write!(f, "index {index}"),
        }
    }
}

/// A container whose kind is known only at runtime
#[derive(Debug)]
pub enum Container<'a, K = String> {
    Map(&'a mut HashMap<K, Value>),
    Sequence(&'a mut Vec<Value>),
    Array(&'a mut [Value]),
}

impl<'a, K> Container<'a, K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Map(_) => ContainerKind::Map,
            Container::Sequence(_) => ContainerKind::Sequence,
            Container::Array(_) => ContainerKind::Array,
        }
    }

    /// Resolves the element addressed by the given key. The index of a list or an
    /// array is not checked here, but when the element is read or written.
    pub fn element(self, key: ContainerKey<K>) -> Result<ContainerElement<'a, K>, AccessError> {
        match (self, key) {
            (Container::Map(map), ContainerKey::Key(key)) => {
                Ok(ContainerElement::Map(MapEntry::new(map, key)))
            }
            (Container::Sequence(sequence), ContainerKey::Index(index)) => Ok(
                ContainerElement::Sequence(SequenceElement::new(sequence, index)),
            ),
            (Container::Array(array), ContainerKey::Index(index)) => {
                Ok(ContainerElement::Array(ArrayElement::new(array, index)))
            }
            (container, key) => Err(AccessError::KeyMismatch {
                kind: container.kind(),
                key: key.to_string(),
            }),
        }
    }
}

/// An element of a [`Container`]
#[derive(Debug)]
pub enum ContainerElement<'a, K = String> {
    Map(MapEntry<'a, K>),
    Sequence(SequenceElement<'a>),
    Array(ArrayElement<'a>),
}

impl<'a, K> ContainerElement<'a, K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn as_accessor(&self) -> &dyn ValueAccessor {
        match self {
            ContainerElement::Map(entry) => entry,
            ContainerElement::Sequence(element) => element,
            ContainerElement::Array(element) => element,
        }
    }

    fn as_accessor_mut(&mut self) -> &mut dyn ValueAccessor {
        match self {
            ContainerElement::Map(entry) => entry,
            ContainerElement::Sequence(element) => element,
            ContainerElement::Array(element) => element,
        }
    }
}

impl<'a, K> ValueAccessor for ContainerElement<'a, K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn read(&self) -> Result<Value, AccessError> {
        self.as_accessor().read()
    }

    fn write(&mut self, value: Value) -> Result<(), AccessError> {
        self.as_accessor_mut().write(value)
    }
}

impl<'a, K> Display for ContainerElement<'a, K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_accessor(), f)
    }
}
