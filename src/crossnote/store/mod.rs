//! # Storage Layer
//!
//! Persistence sits behind the [`DataStore`] trait so the record logic can be
//! exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production flat-file storage (see [`crate::codec`])
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## The Record Store
//!
//! [`RecordStore`] owns the in-memory ordered collection. It is loaded once
//! when opened and written back in full after every mutation; listing never
//! writes. Stored order is insertion order and is never changed by sorting.
//!
//! There is no locking: one invocation owns the file, and concurrent
//! invocations race with last-writer-wins semantics.

use crate::error::{CrossnoteError, Result};
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait DataStore {
    /// Load every record. A missing or unreadable source yields an empty list.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the persisted collection with `records`, in order.
    fn save(&mut self, records: &[Record]) -> Result<()>;
}

/// The in-memory record collection plus the backend it came from.
pub struct RecordStore<S: DataStore> {
    backend: S,
    records: Vec<Record>,
}

impl<S: DataStore> RecordStore<S> {
    pub fn open(backend: S) -> Result<Self> {
        let records = backend.load()?;
        Ok(Self { backend, records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.records)
    }

    /// Position of the record with `id` in stored order.
    pub fn find_by_id(&self, id: u64) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// One past the highest id present; 1 for an empty store. `None` once
    /// the highest id is `u64::MAX`.
    pub fn generate_new_id(&self) -> Option<u64> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Appends a new open record and persists.
    ///
    /// The record is kept in memory even when the save fails; the error is
    /// returned so the caller can report it.
    pub fn create(&mut self, priority: u64, text: &str) -> Result<Record> {
        if text.trim().is_empty() {
            return Err(CrossnoteError::InvalidInput(
                "Record text cannot be empty".to_string(),
            ));
        }

        let id = self
            .generate_new_id()
            .ok_or_else(|| CrossnoteError::InvalidInput("No free record id left".to_string()))?;
        let record = Record::new(id, priority, text.to_string());
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Flips the closed state of `id` and persists.
    pub fn toggle_closed(&mut self, id: u64) -> Result<Record> {
        let index = self.find_by_id(id).ok_or(CrossnoteError::NotFound(id))?;
        self.records[index].toggle_closed();
        let record = self.records[index].clone();
        self.save()?;
        Ok(record)
    }

    /// Removes `id` and persists.
    pub fn delete(&mut self, id: u64) -> Result<Record> {
        let index = self.find_by_id(id).ok_or(CrossnoteError::NotFound(id))?;
        let record = self.records.remove(index);
        self.save()?;
        Ok(record)
    }
}
