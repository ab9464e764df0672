use crate::error::{CrossnoteError, Result};
use chrono::{Local, NaiveDate};

/// Stored in `closed_at` while a record is open. A single control character,
/// so it can never parse as a date.
pub const OPEN_SENTINEL: &str = "\u{1}";

/// On-disk and on-screen date layout (`dd:MM:yyyy`).
pub const DATE_FORMAT: &str = "%d:%m:%Y";

/// One task/note entry.
///
/// Dates are kept as the strings found in the backing file: a corrupted date
/// must survive load and save untouched and only fail when something needs
/// its value (see [`Record::created_date`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub text: String,
    pub created_at: String,
    pub closed_at: String,
    pub closed: bool,
    pub priority: u64,
}

impl Record {
    /// A fresh, open record created today.
    pub fn new(id: u64, priority: u64, text: String) -> Self {
        Self {
            id,
            text,
            created_at: today(),
            closed_at: OPEN_SENTINEL.to_string(),
            closed: false,
            priority,
        }
    }

    /// Flips the closed flag, stamping `closed_at` with today's date when
    /// closing and restoring the open sentinel when reopening.
    pub fn toggle_closed(&mut self) {
        self.closed = !self.closed;
        self.closed_at = if self.closed {
            today()
        } else {
            OPEN_SENTINEL.to_string()
        };
    }

    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub fn created_date(&self) -> Result<NaiveDate> {
        parse_date(self.id, &self.created_at)
    }

    pub fn closed_date(&self) -> Result<NaiveDate> {
        parse_date(self.id, &self.closed_at)
    }
}

/// Today's local date as `dd:MM:yyyy`.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn parse_date(id: u64, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| CrossnoteError::InvalidDate {
        id,
        value: value.to_string(),
    })
}
