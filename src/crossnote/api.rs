//! # API Facade
//!
//! The single entry point for every crossnote operation, whatever the UI.
//! It dispatches to `commands/*.rs`, turns raw user input (such as the sort
//! argument) into typed values, and returns [`CmdResult`]s. It never prints.
//!
//! `CrossnoteApi<S: DataStore>` is generic over the backend:
//! - Production: `CrossnoteApi<FileStore>`
//! - Testing: `CrossnoteApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::sort::parse_sort_arg;
use crate::store::{DataStore, RecordStore};

pub struct CrossnoteApi<S: DataStore> {
    store: RecordStore<S>,
}

impl<S: DataStore> CrossnoteApi<S> {
    /// Opens the backend and loads every record.
    pub fn new(backend: S) -> Result<Self> {
        Ok(Self {
            store: RecordStore::open(backend)?,
        })
    }

    pub fn create_record(&mut self, priority: u64, text: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, priority, text)
    }

    pub fn cross_record(&mut self, id: u64) -> Result<CmdResult> {
        commands::cross::run(&mut self.store, id)
    }

    pub fn delete_record(&mut self, id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// Lists records. A malformed `sort` argument or an unparsable date met
    /// while sorting is returned as an error.
    pub fn list_records(&self, filter: RecordFilter, sort: Option<&str>) -> Result<CmdResult> {
        let spec = parse_sort_arg(sort)?;
        commands::list::run(&self.store, filter, spec.as_ref())
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }
}

pub use commands::list::RecordFilter;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
