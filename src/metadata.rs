//! Arbitrary client data attached to graphs, vertices and edges.
//!
//! Each [`Metadata`] holds a key/value store plus a single "tag" slot.  Values
//! are reference counted, so copying metadata from one object to another is
//! shallow: both end up sharing the same value objects.

use std::{
    any::{Any, type_name},
    collections::HashMap,
    fmt::{self, Debug},
    sync::Arc,
};

use crate::error::{GraphError, Result};

type Value = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Default)]
pub struct Metadata {
    values: HashMap<String, Value>,
    tag: Option<Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set_value<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Arc::new(value));
    }

    /// Gets the value stored under `key`, if there is one and it is a `T`.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref()
    }

    /// Gets the value stored under `key`, failing if it is absent or not a
    /// `T`.
    pub fn required_value<T: Any>(&self, key: &str) -> Result<&T> {
        let value = self
            .values
            .get(key)
            .ok_or_else(|| GraphError::MissingMetadataKey {
                key: key.to_string(),
            })?;
        value
            .downcast_ref()
            .ok_or_else(|| GraphError::MetadataTypeMismatch {
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Removes the value stored under `key`.  Returns false if there was none.
    pub fn remove_value(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// The keys of all stored values, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The number of key/value pairs.  The tag is not counted.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear_values(&mut self) {
        self.values.clear();
    }

    pub fn tag<T: Any>(&self) -> Option<&T> {
        self.tag.as_ref()?.downcast_ref()
    }

    pub fn set_tag<T: Any + Send + Sync>(&mut self, tag: T) {
        self.tag = Some(Arc::new(tag));
    }

    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    pub fn has_tag(&self) -> bool {
        self.tag.is_some()
    }

    /// Copies this object's values and/or tag into `target`.  Copied values
    /// replace values with the same key in `target`; other values in `target`
    /// are left alone.
    pub fn copy_to(&self, target: &mut Metadata, copy_values: bool, copy_tag: bool) {
        if copy_values {
            for (key, value) in &self.values {
                target.values.insert(key.clone(), Arc::clone(value));
            }
        }
        if copy_tag {
            target.tag = self.tag.clone();
        }
    }
}

impl Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("Metadata")
            .field("keys", &keys)
            .field("has_tag", &self.has_tag())
            .finish()
    }
}
