use crate::commands::{report_failure, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DataStore, RecordStore};

pub fn run<S: DataStore>(store: &mut RecordStore<S>, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match store.delete(id) {
        Ok(record) => {
            result.add_message(CmdMessage::success(format!(
                "Record {} deleted: {}",
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
    use crate::commands::{create, MessageLevel};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_record_and_keeps_order() {
        let backend = StoreFixture::new()
            .with_open("a", 1, "01:01:2024")
            .with_open("b", 1, "01:01:2024")
            .with_open("c", 1, "01:01:2024")
            .build();
        let mut store = RecordStore::open(backend).unwrap();

        let result = run(&mut store, 2).unwrap();
        assert_eq!(result.affected_records[0].text, "b");

        let ids: Vec<u64> = store.backend().saved().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn deleted_ids_below_the_maximum_are_not_reused() {
        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        for text in ["a", "b", "c"] {
            create::run(&mut store, 0, text).unwrap();
        }
        run(&mut store, 2).unwrap();

        let result = create::run(&mut store, 0, "d").unwrap();
        assert_eq!(result.affected_records[0].id, 4);
    }

    #[test]
    fn unknown_id_is_a_reported_no_op() {
        let mut store = RecordStore::open(InMemoryStore::new()).unwrap();
        let result = run(&mut store, 1).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.backend().save_count(), 0);
    }
}
