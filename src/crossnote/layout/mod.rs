//! # Layout Engine
//!
//! Turns an already filtered and sorted record list into the column table
//! printed by the `list*` commands:
//!
//! ```text
//! ID   Beg.Time  End.Time    Priority   Text
//! --------------------------------------------------------------
//! 1    05:11:2024           3          buy milk
//! 2    05:11:2024  06:11:2024 1          call the bank
//! ```
//!
//! Layout math lives in [`columns`]; escape sequences in [`style`]. The
//! terminal size is passed in as a [`TerminalInfo`], so rendering is a pure
//! function of its inputs.
//!
//! Two empty cases render differently: an empty store prints
//! [`EMPTY_MESSAGE`], while a store whose records are all hidden by the
//! filter prints the header and rule with no rows.

pub mod columns;
pub mod style;
pub mod terminal;

use crate::model::Record;
use columns::{
    pad_chars, pad_display, truncate, ColumnWidths, CLOSED_LABEL, CREATED_LABEL, ID_LABEL,
    PRIORITY_LABEL, TEXT_LABEL,
};
use style::{Palette, RESET};

pub use terminal::TerminalInfo;

pub const EMPTY_MESSAGE: &str = "No records to display.";

/// Renders listings for one terminal and palette.
#[derive(Debug, Clone)]
pub struct Layout {
    terminal: TerminalInfo,
    palette: Palette,
    use_color: bool,
}

impl Layout {
    pub fn new(terminal: TerminalInfo, palette: Palette) -> Self {
        Self {
            terminal,
            palette,
            use_color: true,
        }
    }

    /// Without color, rows keep their padding but carry no escape sequences.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Renders `visible` as a table. `total_records` is the size of the whole
    /// store before filtering.
    pub fn render(&self, total_records: usize, visible: &[Record]) -> String {
        if total_records == 0 {
            return format!("{}\n", EMPTY_MESSAGE);
        }

        let widths = ColumnWidths::compute(visible, self.terminal.columns);
        let header = render_header(&widths);

        let mut out = String::new();
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"-".repeat(header.chars().count()));
        out.push('\n');

        for record in visible {
            out.push_str(&self.render_row(record, &widths));
            out.push('\n');
        }
        out
    }

    fn render_row(&self, record: &Record, widths: &ColumnWidths) -> String {
        let lead = format!(
            "{}{}{}{}",
            pad_chars(&record.id.to_string(), widths.id),
            pad_chars(&record.created_at, widths.created),
            pad_chars(&record.closed_at, widths.closed_cell(record.closed)),
            pad_chars(&record.priority.to_string(), widths.priority),
        );
        let text = pad_display(&truncate(&record.text, widths.text), widths.text);

        if !self.use_color {
            return format!("{}{}", lead, text);
        }

        let style = self.palette.for_record(record);
        format!(
            "{}{}{}{}{}",
            style.open_row(),
            lead,
            style.open_text(),
            text,
            RESET
        )
    }
}

fn render_header(widths: &ColumnWidths) -> String {
    format!(
        "{}{}{}{}{}",
        pad_chars(ID_LABEL, widths.id),
        pad_chars(CREATED_LABEL, widths.created),
        pad_chars(CLOSED_LABEL, widths.closed),
        pad_chars(PRIORITY_LABEL, widths.priority),
        pad_chars(TEXT_LABEL, widths.text),
    )
}
