//! Configuration for ymarchive
//!
//! The config file sits next to the executable's working directory and
//! records the three paths everything else hangs off: the manifest file, the
//! live game data tree, and the archives root. The field names mirror the
//! legacy on-disk format.

pub mod discovery;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArchiveError, ArchiveResult};
use crate::storage::{read_json_opt, write_json_atomic};

/// Default config file name, resolved against the working directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default manifest file name
pub const MANIFEST_FILE_NAME: &str = "ArchiveList.json";

/// Default directory under which archive subdirectories are created
pub const ARCHIVES_DIR_NAME: &str = "Archives";

const CONFIG_DESC_TEXT: &str = "This file must be placed in the same directory as ymarchive. \
     YMListPath points to the save path of the 'ArchiveList.json' file. \
     YMDataPath points to the 'Data' directory of YgoMaster. \
     ArchivesPath points to the directory where backups are stored. \
     If any of these files or folders move, update the paths below so the \
     program can find them.";

/// Resolved session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Human-readable explanation of the fields, written on creation
    #[serde(rename = "Desc", default = "default_desc")]
    pub desc: String,

    /// Location of the manifest document
    #[serde(rename = "YMListPath")]
    pub list_path: PathBuf,

    /// Source tree to back up (the game's Data directory)
    #[serde(rename = "YMDataPath")]
    pub data_path: PathBuf,

    /// Parent directory for each archive's timestamped subdirectory
    #[serde(rename = "ArchivesPath")]
    pub archives_path: PathBuf,
}

fn default_desc() -> String {
    CONFIG_DESC_TEXT.to_string()
}

impl Config {
    /// Build the default config for a freshly discovered data directory.
    ///
    /// Manifest and archives root land in `base_dir` (normally the current
    /// working directory).
    pub fn with_defaults(base_dir: &Path, data_path: PathBuf) -> Self {
        Self {
            desc: default_desc(),
            list_path: base_dir.join(MANIFEST_FILE_NAME),
            data_path,
            archives_path: base_dir.join(ARCHIVES_DIR_NAME),
        }
    }

    /// Load the config file, returning `None` if it doesn't exist.
    ///
    /// All three path fields must be present and be strings; anything else is
    /// a configuration error.
    pub fn load(path: &Path) -> ArchiveResult<Option<Self>> {
        read_json_opt(path).map_err(|e| match e {
            ArchiveError::Json(msg) => ArchiveError::Config(msg),
            other => other,
        })
    }

    /// Persist the config file
    pub fn save(&self, path: &Path) -> ArchiveResult<()> {
        write_json_atomic(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let base = PathBuf::from("/opt/ym");
        let config = Config::with_defaults(&base, PathBuf::from("/opt/ym/Data"));

        assert_eq!(config.list_path, base.join("ArchiveList.json"));
        assert_eq!(config.archives_path, base.join("Archives"));
        assert!(config.desc.contains("YMDataPath"));
    }

    #[test]
    fn test_save_and_load_legacy_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = Config::with_defaults(temp_dir.path(), temp_dir.path().join("Data"));
        config.save(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("YMListPath"));
        assert!(raw.contains("YMDataPath"));
        assert!(raw.contains("ArchivesPath"));

        let loaded = Config::load(&path).unwrap().unwrap();
        assert_eq!(loaded.data_path, config.data_path);
        assert_eq!(loaded.list_path, config.list_path);
    }

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::load(&temp_dir.path().join("config.json"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_path_field_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"YMListPath": "a", "YMDataPath": "b"}"#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ArchiveError::Config(_)));
    }
}
