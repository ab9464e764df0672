use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Record;
use crate::sort::{sort_records, SortSpec};
use crate::store::{DataStore, RecordStore};

/// Which records a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl RecordFilter {
    pub fn shows(&self, record: &Record) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::Open => !record.closed,
            RecordFilter::Closed => record.closed,
        }
    }
}

/// Filters, then sorts. Stored order is untouched; a sort that meets an
/// unparsable date fails the whole listing.
pub fn run<S: DataStore>(
    store: &RecordStore<S>,
    filter: RecordFilter,
    sort: Option<&SortSpec>,
) -> Result<CmdResult> {
    let mut visible: Vec<Record> = store
        .records()
        .iter()
        .filter(|r| filter.shows(r))
        .cloned()
        .collect();

    sort_records(&mut visible, sort)?;

    Ok(CmdResult::default().with_listed_records(visible, store.records().len()))
}
