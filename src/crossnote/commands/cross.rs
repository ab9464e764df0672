use crate::commands::{report_failure, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordStore};

/// Toggles the closed state of one record.
pub fn run<S: DataStore>(store: &mut RecordStore<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.toggle_closed(id) {
        Ok(record) => {
            let message = if record.closed {
                CmdMessage::success(format!("Record {} crossed out: {}", record.id, record.text))
            } else {
                CmdMessage::info(format!("Record {} reopened: {}", record.id, record.text))
            };
            result.add_message(message);
            result.affected_records.push(record);
        }
        Err(e) => report_failure(&mut result, e)?,
    }

    Ok(result)
}
