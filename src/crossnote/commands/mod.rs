use crate::error::{CrossnoteError, Result};
use crate::model::Record;

pub mod create;
pub mod cross;
pub mod delete;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    /// Size of the whole store, before any listing filter.
    pub total_records: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>, total: usize) -> Self {
        self.listed_records = records;
        self.total_records = total;
        self
    }
}

/// Turns the non-fatal failures of a mutation into messages. Anything else is
/// handed back to the caller.
pub(crate) fn report_failure(result: &mut CmdResult, err: CrossnoteError) -> Result<()> {
    match err {
        CrossnoteError::InvalidInput(msg) => {
            result.add_message(CmdMessage::warning(msg));
            Ok(())
        }
        CrossnoteError::NotFound(_) => {
            result.add_message(CmdMessage::warning(err.to_string()));
            Ok(())
        }
        CrossnoteError::Io(e) => {
            result.add_message(CmdMessage::error(format!(
                "Could not write the record file: {}",
                e
            )));
            Ok(())
        }
        other => Err(other),
    }
}
