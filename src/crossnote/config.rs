use crate::codec::{Separators, DEFAULT_FIELD_SEPARATOR, DEFAULT_RECORD_SEPARATOR};
use crate::error::{CrossnoteError, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_FILE_NAME: &str = ".records.records";
const DEFAULT_COLOR_CROSS_1: &str = "1;31";
const DEFAULT_COLOR_CROSS_2: &str = "31";
const DEFAULT_COLOR_NO_CROSS_1: &str = "1;37";
const DEFAULT_COLOR_NO_CROSS_2: &str = "37";

/// Store configuration, read from an optional JSON document.
///
/// Every key is optional. A key that is absent or not a string keeps its own
/// default without affecting the others. Color values are SGR parameter
/// strings such as `1;31`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(from = "RawConfig")]
pub struct StoreConfig {
    pub separator_record: String,
    pub separator_line: String,
    pub file_name: String,
    pub color_cross1: String,
    pub color_cross2: String,
    pub color_no_cross1: String,
    pub color_no_cross2: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            separator_record: DEFAULT_RECORD_SEPARATOR.to_string(),
            separator_line: DEFAULT_FIELD_SEPARATOR.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            color_cross1: DEFAULT_COLOR_CROSS_1.to_string(),
            color_cross2: DEFAULT_COLOR_CROSS_2.to_string(),
            color_no_cross1: DEFAULT_COLOR_NO_CROSS_1.to_string(),
            color_no_cross2: DEFAULT_COLOR_NO_CROSS_2.to_string(),
        }
    }
}

/// The document as written, one optional string per key.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    #[serde(deserialize_with = "string_or_none")]
    separator_record: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    separator_line: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    file_name: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    color_cross1: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    color_cross2: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    color_no_cross1: Option<String>,
    #[serde(deserialize_with = "string_or_none")]
    color_no_cross2: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

impl From<RawConfig> for StoreConfig {
    fn from(raw: RawConfig) -> Self {
        let defaults = StoreConfig::default();
        Self {
            separator_record: raw.separator_record.unwrap_or(defaults.separator_record),
            separator_line: raw.separator_line.unwrap_or(defaults.separator_line),
            file_name: raw.file_name.unwrap_or(defaults.file_name),
            color_cross1: raw.color_cross1.unwrap_or(defaults.color_cross1),
            color_cross2: raw.color_cross2.unwrap_or(defaults.color_cross2),
            color_no_cross1: raw.color_no_cross1.unwrap_or(defaults.color_no_cross1),
            color_no_cross2: raw.color_no_cross2.unwrap_or(defaults.color_no_cross2),
        }
    }
}

impl StoreConfig {
    /// Load config from a JSON file. Callers usually fall back to
    /// `StoreConfig::default()` on error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(CrossnoteError::Io)?;
        let config: StoreConfig =
            serde_json::from_str(&content).map_err(CrossnoteError::Serialization)?;
        Ok(config)
    }

    pub fn separators(&self) -> Separators {
        Separators::new(&self.separator_record, &self.separator_line)
    }

    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.file_name, ".records.records");
        assert_eq!(config.separators(), Separators::default());
        assert_eq!(config.color_cross1, "1;31");
        assert_eq!(config.color_no_cross2, "37");
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"fileName": "todo.db", "colorCross2": "32"}"#).unwrap();
        assert_eq!(config.file_name, "todo.db");
        assert_eq!(config.color_cross2, "32");
        assert_eq!(config.color_cross1, "1;31");
        assert_eq!(config.separator_line, DEFAULT_FIELD_SEPARATOR);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"theme": "dark", "separatorLine": "::"}"#).unwrap();
        assert_eq!(config.separator_line, "::");
    }

    #[test]
    fn test_wrong_typed_key_falls_back_alone() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"fileName": "mine.db", "colorCross1": 31}"#).unwrap();
        assert_eq!(config.file_name, "mine.db");
        assert_eq!(config.color_cross1, "1;31");
    }

    #[test]
    fn test_null_and_nested_values_keep_defaults() {
        let config: StoreConfig = serde_json::from_str(
            r#"{"separatorLine": null, "colorNoCross2": {"sgr": "32"}, "separatorRecord": "\n"}"#,
        )
        .unwrap();
        assert_eq!(config.separator_line, DEFAULT_FIELD_SEPARATOR);
        assert_eq!(config.color_no_cross2, "37");
        assert_eq!(config.separator_record, "\n");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crossnote.json");
        fs::write(&path, r#"{"separatorRecord": "\n", "separatorLine": "\t"}"#).unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.separators(), Separators::new("\n", "\t"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StoreConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(CrossnoteError::Io(_))));
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            StoreConfig::load(&path),
            Err(CrossnoteError::Serialization(_))
        ));
    }
}
