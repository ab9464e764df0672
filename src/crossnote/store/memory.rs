use super::DataStore;
use crate::error::{CrossnoteError, Result};
use crate::model::Record;
use std::io;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// A store whose every save fails, for exercising the reporting path.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// What the last successful save wrote.
    pub fn saved(&self) -> &[Record] {
        &self.records
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        if self.fail_saves {
            return Err(CrossnoteError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::OPEN_SENTINEL;

    pub struct StoreFixture {
        records: Vec<Record>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                records: Vec::new(),
            }
        }

        fn next_id(&self) -> u64 {
            match self.records.iter().map(|r| r.id).max() {
                Some(max) => max.checked_add(1).expect("fixture ids exhausted"),
                None => 1,
            }
        }

        pub fn with_open(mut self, text: &str, priority: u64, created_at: &str) -> Self {
            self.records.push(Record {
                id: self.next_id(),
                text: text.to_string(),
                created_at: created_at.to_string(),
                closed_at: OPEN_SENTINEL.to_string(),
                closed: false,
                priority,
            });
            self
        }

        pub fn with_closed(
            mut self,
            text: &str,
            priority: u64,
            created_at: &str,
            closed_at: &str,
        ) -> Self {
            self.records.push(Record {
                id: self.next_id(),
                text: text.to_string(),
                created_at: created_at.to_string(),
                closed_at: closed_at.to_string(),
                closed: true,
                priority,
            });
            self
        }

        pub fn with_record(mut self, record: Record) -> Self {
            self.records.push(record);
            self
        }

        pub fn records(&self) -> &[Record] {
            &self.records
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_records(self.records)
        }
    }
}
