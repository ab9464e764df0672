use crate::config::StoreConfig;
use crate::model::Record;

const STRIKETHROUGH: &str = "\u{1b}[9m";
pub const RESET: &str = "\u{1b}[0m";

/// How one row is painted: `lead` colors the id/date/priority cells, `text`
/// colors the text cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowStyle {
    pub struck: bool,
    pub lead: String,
    pub text: String,
}

impl RowStyle {
    /// Escape sequence opening the row.
    pub fn open_row(&self) -> String {
        let strike = if self.struck { STRIKETHROUGH } else { "" };
        format!("{}{}", strike, sgr(&self.lead))
    }

    /// Escape sequence switching to the text cell color.
    pub fn open_text(&self) -> String {
        sgr(&self.text)
    }
}

/// Row styles for closed and open records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub closed: RowStyle,
    pub open: RowStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

impl Palette {
    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            closed: RowStyle {
                struck: true,
                lead: config.color_cross1.clone(),
                text: config.color_cross2.clone(),
            },
            open: RowStyle {
                struck: false,
                lead: config.color_no_cross1.clone(),
                text: config.color_no_cross2.clone(),
            },
        }
    }

    pub fn for_record(&self, record: &Record) -> &RowStyle {
        if record.closed {
            &self.closed
        } else {
            &self.open
        }
    }
}

fn sgr(params: &str) -> String {
    format!("\u{1b}[{}m", params)
}
