//! # Record Codec
//!
//! The backing file is a flat, delimiter-separated text file:
//!
//! ```text
//! <id>FS<text>FS<created_at>FS<closed_at>FS<0|1>FS<priority>RS<id>FS...RS
//! ```
//!
//! where `FS` is the field separator and `RS` the record separator (by default
//! two and four ESC characters). Every record, the last one included, is
//! followed by `RS`.
//!
//! Fields are always addressed through [`Field`]; its declaration order is the
//! on-disk order. The layout carries no version tag: a new field must come
//! with one (and a new `FIELD_COUNT`) rather than shifting positions.

use crate::model::Record;

pub const DEFAULT_RECORD_SEPARATOR: &str = "\u{1b}\u{1b}\u{1b}\u{1b}";
pub const DEFAULT_FIELD_SEPARATOR: &str = "\u{1b}\u{1b}";

/// Positional fields of the v1 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Text,
    CreatedAt,
    ClosedAt,
    Closed,
    Priority,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Id,
        Field::Text,
        Field::CreatedAt,
        Field::ClosedAt,
        Field::Closed,
        Field::Priority,
    ];

    pub fn position(self) -> usize {
        self as usize
    }
}

pub const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub record: String,
    pub field: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            record: DEFAULT_RECORD_SEPARATOR.to_string(),
            field: DEFAULT_FIELD_SEPARATOR.to_string(),
        }
    }
}

impl Separators {
    /// Builds separators, replacing an empty string with the default so
    /// splitting always makes progress.
    pub fn new(record: &str, field: &str) -> Self {
        let defaults = Self::default();
        Self {
            record: if record.is_empty() {
                defaults.record
            } else {
                record.to_string()
            },
            field: if field.is_empty() {
                defaults.field
            } else {
                field.to_string()
            },
        }
    }
}

/// Result of decoding a whole file body.
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<Record>,
    pub skipped: usize,
}

fn encode_field(record: &Record, field: Field) -> String {
    match field {
        Field::Id => record.id.to_string(),
        Field::Text => record.text.clone(),
        Field::CreatedAt => record.created_at.clone(),
        Field::ClosedAt => record.closed_at.clone(),
        Field::Closed => (if record.closed { "1" } else { "0" }).to_string(),
        Field::Priority => record.priority.to_string(),
    }
}

pub fn encode_record(record: &Record, separators: &Separators) -> String {
    Field::ALL
        .iter()
        .map(|field| encode_field(record, *field))
        .collect::<Vec<_>>()
        .join(&separators.field)
}

pub fn encode_records(records: &[Record], separators: &Separators) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&encode_record(record, separators));
        out.push_str(&separators.record);
    }
    out
}

/// Decodes one fragment; `None` when it does not hold exactly
/// [`FIELD_COUNT`] well-formed fields.
pub fn decode_record(fragment: &str, separators: &Separators) -> Option<Record> {
    let fields: Vec<&str> = fragment.split(separators.field.as_str()).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }
    let get = |field: Field| fields[field.position()];

    let closed = match get(Field::Closed) {
        "0" => false,
        "1" => true,
        _ => return None,
    };

    Some(Record {
        id: get(Field::Id).parse().ok()?,
        text: get(Field::Text).to_string(),
        created_at: get(Field::CreatedAt).to_string(),
        closed_at: get(Field::ClosedAt).to_string(),
        closed,
        priority: get(Field::Priority).parse().ok()?,
    })
}

/// Splits a file body into records. Empty fragments are dropped; malformed
/// ones are counted and skipped.
pub fn decode_records(content: &str, separators: &Separators) -> Decoded {
    let mut decoded = Decoded::default();
    for fragment in content
        .split(separators.record.as_str())
        .filter(|f| !f.is_empty())
    {
        match decode_record(fragment, separators) {
            Some(record) => decoded.records.push(record),
            None => decoded.skipped += 1,
        }
    }
    decoded
}
