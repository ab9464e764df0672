//! # Sort Selector
//!
//! A sort specification reads `<direction>@<key>`:
//!
//! | direction | meaning    |   | key        | compares                 |
//! |-----------|------------|---|------------|--------------------------|
//! | `ask`     | ascending  |   | `ID`       | numeric id               |
//! | `desk`    | descending |   | `Beg.Time` | creation date            |
//! |           |            |   | `End.Time` | close date               |
//! |           |            |   | `Crossed`  | closed flag (open first) |
//! |           |            |   | `Priority` | numeric priority         |
//! |           |            |   | `Text`     | text length in chars     |
//!
//! `Text` orders by length, not by content.
//!
//! Keys are extracted for every record before anything moves, so a record
//! whose date does not parse fails the whole sort with
//! [`CrossnoteError::InvalidDate`]. An open record has no close date, so
//! `End.Time` only works on closed records.
//!
//! Sorting is stable: records with equal keys keep their stored order in both
//! directions.

use crate::error::{CrossnoteError, Result};
use crate::model::Record;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    CreatedAt,
    ClosedAt,
    Crossed,
    Priority,
    Text,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::CreatedAt,
        SortKey::ClosedAt,
        SortKey::Crossed,
        SortKey::Priority,
        SortKey::Text,
    ];

    /// The token used on the command line, which is also the column label.
    pub fn token(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::CreatedAt => "Beg.Time",
            SortKey::ClosedAt => "End.Time",
            SortKey::Crossed => "Crossed",
            SortKey::Priority => "Priority",
            SortKey::Text => "Text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub direction: Direction,
    pub key: SortKey,
}

impl FromStr for SortSpec {
    type Err = CrossnoteError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CrossnoteError::InvalidSortSpec(s.to_string());
        let (direction, key) = s.split_once('@').ok_or_else(invalid)?;

        let direction = match direction {
            "ask" => Direction::Ascending,
            "desk" => Direction::Descending,
            _ => return Err(invalid()),
        };
        let key = SortKey::ALL
            .into_iter()
            .find(|k| k.token() == key)
            .ok_or_else(invalid)?;

        Ok(SortSpec { direction, key })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Ascending => "ask",
            Direction::Descending => "desk",
        };
        write!(f, "{}@{}", direction, self.key.token())
    }
}

/// Parses the optional sort argument. No argument means store order.
pub fn parse_sort_arg(arg: Option<&str>) -> Result<Option<SortSpec>> {
    arg.map(SortSpec::from_str).transpose()
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Number(u64),
    Date(NaiveDate),
    Flag(bool),
}

fn sort_value(record: &Record, key: SortKey) -> Result<SortValue> {
    Ok(match key {
        SortKey::Id => SortValue::Number(record.id),
        SortKey::CreatedAt => SortValue::Date(record.created_date()?),
        SortKey::ClosedAt => SortValue::Date(record.closed_date()?),
        SortKey::Crossed => SortValue::Flag(record.closed),
        SortKey::Priority => SortValue::Number(record.priority),
        SortKey::Text => SortValue::Number(record.text.chars().count() as u64),
    })
}

/// Orders `records` in place for display. `None` leaves them untouched.
pub fn sort_records(records: &mut Vec<Record>, spec: Option<&SortSpec>) -> Result<()> {
    let Some(spec) = spec else {
        return Ok(());
    };

    let keys = records
        .iter()
        .map(|r| sort_value(r, spec.key))
        .collect::<Result<Vec<_>>>()?;
    let mut keyed: Vec<(SortValue, Record)> = keys.into_iter().zip(records.drain(..)).collect();

    keyed.sort_by(|(a, _), (b, _)| match spec.direction {
        Direction::Ascending => a.cmp(b),
        Direction::Descending => b.cmp(a),
    });

    records.extend(keyed.into_iter().map(|(_, r)| r));
    Ok(())
}
