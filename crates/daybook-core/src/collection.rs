//! Insertion-ordered, id-keyed record collections.
//!
//! Every tracker stores its records in a [`Collection`]. Records are appended
//! with a freshly generated id, looked up and replaced by id, and (for habits)
//! removed by id. Iteration always follows insertion order, which is the tie
//! breaker the calendar classifier relies on.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use uuid::Uuid;

use crate::error::{CoreError, Result};

/// A record that can live in a [`Collection`].
pub trait Record {
    /// Human-readable record kind used in `NotFound` errors.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Generate a new record id. Ids are v4 UUIDs and are never reused.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Ordered mapping from unique id to record.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: IndexMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record built from a freshly generated id and return that id.
    pub fn insert_with(&mut self, build: impl FnOnce(String) -> T) -> String {
        let id = new_id();
        let record = build(id.clone());
        debug_assert_eq!(record.id(), id);
        self.records.insert(id.clone(), record);
        id
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.get(id)
    }

    /// Like [`get`](Self::get) but reports unknown ids as `NotFound`.
    pub fn require(&self, id: &str) -> Result<&T> {
        self.records
            .get(id)
            .ok_or_else(|| CoreError::not_found(T::KIND, id))
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.get_mut(id)
    }

    /// Replace the record under `id` with the result of `f`.
    ///
    /// The record keeps its position in the collection.
    pub fn update<R>(&mut self, id: &str, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found(T::KIND, id))?;
        Ok(f(record))
    }

    /// Remove the record under `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.records.shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.records.values().filter(|r| pred(r)).count()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records.values() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

/// Returns the trimmed text, or `None` when nothing but whitespace remains.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
