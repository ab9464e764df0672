use super::DataStore;
use crate::codec::{decode_records, encode_records, Separators};
use crate::error::{CrossnoteError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file storage: one file, whole-file rewrite on every save.
pub struct FileStore {
    path: PathBuf,
    separators: Separators,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            separators: Separators::default(),
        }
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Record>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "no readable record file, starting empty");
                return Ok(Vec::new());
            }
        };

        let decoded = decode_records(&content, &self.separators);
        if decoded.skipped > 0 {
            tracing::debug!(skipped = decoded.skipped, "skipped malformed record fragments");
        }
        tracing::debug!(count = decoded.records.len(), path = %self.path.display(), "loaded records");
        Ok(decoded.records)
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        let content = encode_records(records, &self.separators);
        fs::write(&self.path, &content).map_err(CrossnoteError::Io)?;
        tracing::debug!(count = records.len(), bytes = content.len(), path = %self.path.display(), "saved records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.records"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn directory_in_place_of_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn records_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".records.records");

        let mut store = RecordStore::open(FileStore::new(&path)).unwrap();
        store.create(2, "first").unwrap();
        store.create(1, "second").unwrap();
        store.toggle_closed(1).unwrap();
        let written = store.records().to_vec();

        let reopened = RecordStore::open(FileStore::new(&path)).unwrap();
        assert_eq!(reopened.records(), written.as_slice());
    }

    #[test]
    fn uses_configured_separators_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        let separators = Separators::new("\n", "|");

        let mut store =
            RecordStore::open(FileStore::new(&path).with_separators(separators)).unwrap();
        store.create(4, "plain text").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("1|plain text|"));
        assert!(content.ends_with("|\u{1}|0|4\n"));
    }

    #[test]
    fn malformed_fragments_do_not_stop_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(
            &path,
            "1|a|01:01:2024|\u{1}|0|1\nbroken|line\n2|b|01:01:2024|02:01:2024|1|3\n",
        )
        .unwrap();

        let store = FileStore::new(&path).with_separators(Separators::new("\n", "|"));
        let ids: Vec<u64> = store.load().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nope").join("file"));
        assert!(matches!(store.save(&[]), Err(CrossnoteError::Io(_))));
    }
}
