use crate::model::Record;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ID_LABEL: &str = "ID";
pub const CREATED_LABEL: &str = "Beg.Time";
pub const CLOSED_LABEL: &str = "End.Time";
pub const PRIORITY_LABEL: &str = "Priority";
pub const TEXT_LABEL: &str = "Text";

const MIN_ID: usize = 3;
const MIN_CREATED: usize = 8;
const MIN_CLOSED: usize = 8;
const MIN_PRIORITY: usize = 9;
const MIN_TEXT: usize = 5;

const PADDING: usize = 2;
pub const MIN_TEXT_COLUMN: usize = 10;
pub const ELLIPSIS: &str = "...";

/// Widths of the five listing columns, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnWidths {
    pub id: usize,
    pub created: usize,
    pub closed: usize,
    pub priority: usize,
    pub text: usize,
}

impl ColumnWidths {
    /// Sizes columns for the visible `records` on a terminal `columns` wide.
    ///
    /// Fixed columns take their widest value plus padding and are never
    /// shrunk. The text column takes whatever is left, but never less than
    /// [`MIN_TEXT_COLUMN`].
    pub fn compute(records: &[Record], columns: usize) -> Self {
        let mut id = MIN_ID;
        let mut created = MIN_CREATED;
        let mut closed = MIN_CLOSED;
        let mut priority = MIN_PRIORITY;
        let mut natural_text = MIN_TEXT;

        for record in records {
            id = id.max(record.id.to_string().len());
            created = created.max(record.created_at.chars().count());
            closed = closed.max(record.closed_at.chars().count());
            priority = priority.max(record.priority.to_string().len());
            natural_text = natural_text.max(record.text.width());
        }

        let id = id + PADDING;
        let created = created + PADDING;
        let closed = closed + PADDING;
        let priority = priority + PADDING;
        let fixed = (id + created + closed + priority) as i64;

        let natural_sum = fixed + natural_text as i64;
        let mut text = natural_text as i64 + PADDING as i64 + (columns as i64 - natural_sum);

        let total = fixed + text;
        if total > columns as i64 {
            let overflow = total - columns as i64;
            text = (text - overflow).max(MIN_TEXT_COLUMN as i64);
        }

        Self {
            id,
            created,
            closed,
            priority,
            text: text as usize,
        }
    }

    pub fn total(&self) -> usize {
        self.id + self.created + self.closed + self.priority + self.text
    }

    /// Width used for the close-date cell. An open row holds the
    /// zero-width sentinel, so it gets one extra column to line up with the
    /// closed rows.
    pub fn closed_cell(&self, record_closed: bool) -> usize {
        if record_closed {
            self.closed
        } else {
            self.closed + 1
        }
    }
}

/// Cuts `text` to `width - 3` display columns and appends [`ELLIPSIS`] when it
/// does not fit in `width - 3`.
pub fn truncate(text: &str, width: usize) -> String {
    let limit = width.saturating_sub(ELLIPSIS.len());
    if text.width() <= limit {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push_str(ELLIPSIS);
    result
}

/// Left-justifies by character count.
pub fn pad_chars(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Left-justifies by display width.
pub fn pad_display(value: &str, width: usize) -> String {
    let padding = width.saturating_sub(value.width());
    format!("{}{}", value, " ".repeat(padding))
}
