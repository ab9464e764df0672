use crate::commands::{report_failure, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &mut RecordStore<S>, priority: u64, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.create(priority, text) {
        Ok(record) => {
            result.add_message(CmdMessage::success(format!(
                "Record {} created: {}",
                record.id, record.text
            )));
            result.affected_records.push(record);
        }
        Err(e) => report_failure(&mut result, e)?,
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Record;
    use crate::store::memory::InMemoryStore;

    fn empty_store() -> RecordStore<InMemoryStore> {
        RecordStore::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn creates_record_with_next_id() {
        let mut store = empty_store();
        run(&mut store, 1, "first").unwrap();
        let result = run(&mut store, 3, "second").unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].id, 2);
        assert_eq!(result.affected_records[0].priority, 3);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(store.backend().saved().len(), 2);
    }

    #[test]
    fn blank_text_is_a_reported_no_op() {
        let mut store = empty_store();
        for text in ["", "   "] {
            let result = run(&mut store, 0, text).unwrap();
            assert!(result.affected_records.is_empty());
            assert_eq!(result.messages[0].level, MessageLevel::Warning);
        }
        assert!(store.is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn exhausted_ids_are_a_reported_no_op() {
        let backend = InMemoryStore::with_records(vec![Record::new(u64::MAX, 0, "last".into())]);
        let mut store = RecordStore::open(backend).unwrap();

        let result = run(&mut store, 0, "one more").unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.backend().save_count(), 0);
    }

    #[test]
    fn write_failure_is_reported_not_fatal() {
        let mut store = RecordStore::open(InMemoryStore::failing()).unwrap();
        let result = run(&mut store, 0, "note").unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
