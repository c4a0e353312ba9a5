// 🗃️ Record Store - generic in-memory storage keyed by identifier
//
// One Vec per store, insertion order preserved, lookups are a linear scan.
// Identifiers are not unique: duplicates stay in the Vec and point lookup
// returns the first match.

use crate::error::{RecordError, Result};
use tracing::debug;

// ============================================================================
// IDENTIFIABLE RECORD
// ============================================================================

/// Anything with a stable integer identifier
pub trait Identifiable {
    /// Human readable kind, used in logs and errors
    const KIND: &'static str;

    fn id(&self) -> i32;
}

// ============================================================================
// STORE CONTRACT
// ============================================================================

pub trait RecordStore<T: Identifiable + PartialEq> {
    /// Append a record to the end of the store
    fn insert(&mut self, record: T);

    /// Remove the first record equal to `record`, handing it back
    ///
    /// Removing something that isn't stored is a no-op.
    fn remove(&mut self, record: &T) -> Option<T>;

    /// First record whose identifier equals `id`
    fn find_by_id(&self, id: i32) -> Option<&T>;

    fn find_by_id_mut(&mut self, id: i32) -> Option<&mut T>;

    /// Every stored record, in insertion order
    fn all(&self) -> &[T];

    /// Insert a record the caller may not have
    ///
    /// `None` fails with [`RecordError::MissingRecord`] and leaves the
    /// store untouched.
    fn try_insert(&mut self, record: Option<T>) -> Result<()> {
        let record = record.ok_or(RecordError::MissingRecord { kind: T::KIND })?;
        self.insert(record);
        Ok(())
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

// ============================================================================
// VEC STORE
// ============================================================================

/// Unindexed store backed by a Vec
#[derive(Debug, Clone)]
pub struct VecStore<T> {
    records: Vec<T>,
}

impl<T> VecStore<T> {
    pub fn new() -> Self {
        VecStore {
            records: Vec::new(),
        }
    }
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable + PartialEq> RecordStore<T> for VecStore<T> {
    fn insert(&mut self, record: T) {
        debug!(kind = T::KIND, id = record.id(), "inserting record");
        self.records.push(record);
    }

    fn remove(&mut self, record: &T) -> Option<T> {
        let position = self.records.iter().position(|r| r == record)?;
        debug!(kind = T::KIND, id = record.id(), "removing record");
        Some(self.records.remove(position))
    }

    fn find_by_id(&self, id: i32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn find_by_id_mut(&mut self, id: i32) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    fn all(&self) -> &[T] {
        &self.records
    }
}

impl<T: Identifiable + PartialEq> FromIterator<T> for VecStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = VecStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

// ============================================================================
// TESTS
// ============================================================================
