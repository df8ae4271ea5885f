//! Insertion-ordered parameter mapping.

use std::ops::Index;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut};

use crate::path::{Path, PathSegment};
use crate::value::Value;

/// One level of a parameter tree.
///
/// Keys keep the order in which they were inserted; replacing the value of
/// an existing key keeps its position. A key is *present* when it exists
/// and its value is not [`Value::Null`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: IndexMap<String, Value>,
}

impl Params {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty mapping with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Number of keys, including null-valued ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Looks up a key for mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns `true` if the key exists, even with a null value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if the key exists with a non-null value.
    #[must_use]
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_null())
    }

    /// Walks a path through nested hashes and arrays.
    ///
    /// ```
    /// use paramguard_value::{Path, Value, params};
    ///
    /// let params = params! { "book" => { "tags" => ["a", "b"] } };
    /// let path = Path::parse("book.tags[1]").unwrap();
    /// assert_eq!(params.get_path(&path), Some(&Value::from("b")));
    /// ```
    #[must_use]
    pub fn get_path(&self, path: &Path) -> Option<&Value> {
        let mut segments = path.iter();
        let mut current = match segments.next()? {
            PathSegment::Key(key) => self.get(key)?,
            PathSegment::Index(_) => return None,
        };
        for segment in segments {
            current = match (segment, current) {
                (PathSegment::Key(key), Value::Hash(params)) => params.get(key)?,
                (PathSegment::Index(index), Value::Array(items)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Walks a chain of keys through nested hashes.
    #[must_use]
    pub fn dig<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Option<&Value> {
        let mut keys = keys.into_iter();
        let mut current = self.get(keys.next()?)?;
        for key in keys {
            current = current.as_hash()?.get(key)?;
        }
        Some(current)
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates values in key order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates entries in order with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }
}

impl Index<&str> for Params {
    type Output = Value;

    /// # Panics
    ///
    /// Panics if the key is missing.
    fn index(&self, key: &str) -> &Value {
        &self.entries[key]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for Params {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
