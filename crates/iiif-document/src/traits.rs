use serde_json::map::{Iter, Keys, Values};
use serde_json::{Map, Value};

use crate::document::OrderedDocument;
use crate::error::{DocumentError, DocumentResult};

/// Map behaviours shared by every ordered JSON document.
///
/// Implementors only expose their backing map; all other operations are
/// provided. The backing map must be a `serde_json::Map` built with the
/// `preserve_order` feature, which every crate in this workspace enables.
///
/// All implementations must satisfy these invariants:
/// - Iteration yields entries in insertion order.
/// - `set` on an existing key replaces the value in place.
/// - `delete` keeps the relative order of the remaining keys.
/// - Keys are unique.
pub trait DocumentStore {
    /// Shared access to the backing map.
    fn as_map(&self) -> &Map<String, Value>;

    /// Mutable access to the backing map.
    fn as_map_mut(&mut self) -> &mut Map<String, Value>;

    /// Look up a value. Returns `None` for a missing key.
    fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().get(key)
    }

    /// Mutable lookup.
    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_map_mut().get_mut(key)
    }

    /// Look up a value, treating a missing key as an error.
    fn fetch(&self, key: &str) -> DocumentResult<&Value> {
        self.get(key)
            .ok_or_else(|| DocumentError::KeyNotFound(key.to_string()))
    }

    /// Set a value and return the previous one.
    ///
    /// An existing key keeps its position; a new key is appended.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.as_map_mut().insert(key.into(), value.into())
    }

    /// Remove a key, returning its value. Missing keys are a no-op.
    fn delete(&mut self, key: &str) -> Option<Value> {
        self.as_map_mut().shift_remove(key)
    }

    /// Returns the value at `key`, inserting the result of `default` first if
    /// the key is absent.
    fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut Value
    where
        F: FnOnce() -> Value,
    {
        self.as_map_mut()
            .entry(key.to_string())
            .or_insert_with(default)
    }

    fn has_key(&self, key: &str) -> bool {
        self.as_map().contains_key(key)
    }

    fn has_value(&self, value: &Value) -> bool {
        self.as_map().values().any(|v| v == value)
    }

    /// The first key whose value equals `value`.
    fn key_of(&self, value: &Value) -> Option<&str> {
        self.as_map()
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(k, _)| k.as_str())
    }

    /// Zero-based position of `key`.
    fn position(&self, key: &str) -> Option<usize> {
        self.as_map().keys().position(|k| k == key)
    }

    fn len(&self) -> usize {
        self.as_map().len()
    }

    fn is_empty(&self) -> bool {
        self.as_map().is_empty()
    }

    fn keys(&self) -> Keys<'_> {
        self.as_map().keys()
    }

    fn values(&self) -> Values<'_> {
        self.as_map().values()
    }

    /// Iterate `(key, value)` pairs in insertion order.
    fn iter(&self) -> Iter<'_> {
        self.as_map().iter()
    }

    fn clear(&mut self) {
        self.as_map_mut().clear();
    }

    /// Bulk-set every entry of `other`.
    ///
    /// Keys already present are overwritten in place; new keys are appended
    /// in the order `other` yields them.
    fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let map = self.as_map_mut();
        for (key, value) in other {
            map.insert(key, value);
        }
    }

    /// Insert a new key so that it ends up at position `index`.
    fn insert_at(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> DocumentResult<()> {
        let key = key.into();
        let map = self.as_map_mut();
        if map.contains_key(&key) {
            return Err(DocumentError::DuplicateKey(key));
        }
        let len = map.len();
        if index > len {
            return Err(DocumentError::IndexOutOfBounds { index, len });
        }

        let mut pending = Some((key, value.into()));
        let mut rebuilt = Map::new();
        for (i, (k, v)) in std::mem::take(map).into_iter().enumerate() {
            if i == index {
                if let Some((new_key, new_value)) = pending.take() {
                    rebuilt.insert(new_key, new_value);
                }
            }
            rebuilt.insert(k, v);
        }
        if let Some((new_key, new_value)) = pending {
            rebuilt.insert(new_key, new_value);
        }
        *map = rebuilt;
        Ok(())
    }

    /// Insert a new key immediately before `existing`.
    fn insert_before(
        &mut self,
        existing: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> DocumentResult<()> {
        let index = self
            .position(existing)
            .ok_or_else(|| DocumentError::KeyNotFound(existing.to_string()))?;
        self.insert_at(index, key, value)
    }

    /// Insert a new key immediately after `existing`.
    fn insert_after(
        &mut self,
        existing: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> DocumentResult<()> {
        let index = self
            .position(existing)
            .ok_or_else(|| DocumentError::KeyNotFound(existing.to_string()))?;
        self.insert_at(index + 1, key, value)
    }

    /// Keep only the entries for which `keep` returns `true`.
    fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String, &mut Value) -> bool,
    {
        self.as_map_mut().retain(keep);
    }

    /// Remove every entry for which `remove` returns `true`.
    fn delete_if<F>(&mut self, mut remove: F)
    where
        F: FnMut(&String, &mut Value) -> bool,
    {
        self.as_map_mut().retain(|k, v| !remove(k, v));
    }

    /// Copy the matching entries into a new document, order preserved.
    fn select<F>(&self, mut pick: F) -> OrderedDocument
    where
        F: FnMut(&str, &Value) -> bool,
    {
        self.iter()
            .filter(|(k, v)| pick(k.as_str(), v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Remove and return the first entry.
    fn shift(&mut self) -> Option<(String, Value)> {
        let first = self.as_map().keys().next()?.clone();
        let value = self.as_map_mut().shift_remove(&first)?;
        Some((first, value))
    }
}
