use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
    hash::{BuildHasher, Hash},
};

use crate::{access_error::AccessError, value::Value, value_accessor::ValueAccessor};

/// The entry of a map for a given key. A missing key reads as [`Value::Absent`].
#[derive(Debug)]
pub struct MapEntry<'a, K, S = std::collections::hash_map::RandomState> {
    map: &'a mut HashMap<K, Value, S>,
    key: K,
}

impl<'a, K, S> MapEntry<'a, K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn new(map: &'a mut HashMap<K, Value, S>, key: K) -> Self {
        Self { map, key }
    }

    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<'a, K, S> ValueAccessor for MapEntry<'a, K, S>
where
    K: Eq + Hash + Clone + Debug,
    S: BuildHasher,
{
    fn read(&self) -> Result<Value, AccessError> {
        Ok(self.map.get(&self.key).cloned().unwrap_or_default())
    }

    fn write(&mut self, value: Value) -> Result<(), AccessError> {
        self.map.insert(self.key.clone(), value);
        Ok(())
    }
}

impl<'a, K: Debug, S> Display for MapEntry<'a, K, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}]", self.key)
    }
}
