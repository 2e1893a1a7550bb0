//! Manifest store
//!
//! Owns the read-modify-write protocol for the archive catalog file. Every
//! save rewrites the whole document atomically.

use std::path::{Path, PathBuf};

use crate::error::ArchiveResult;
use crate::models::ManifestDocument;

use super::file_io::{read_json_opt, write_json_atomic};

/// Loads and saves the archive catalog document
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    /// Create a store for the manifest at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the manifest file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the manifest document.
    ///
    /// A missing file is not an error at this layer and yields `None`; the
    /// bootstrap decides whether to materialize a default document. Invalid
    /// JSON or a malformed `Archives` field is fatal.
    pub fn load(&self) -> ArchiveResult<Option<ManifestDocument>> {
        read_json_opt(&self.path)
    }

    /// Persist the full document, replacing the previous content
    pub fn save(&self, doc: &ManifestDocument) -> ArchiveResult<()> {
        write_json_atomic(&self.path, doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArchiveError;
    use crate::models::ArchiveEntry;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = ManifestStore::new(temp_dir.path().join("ArchiveList.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = ManifestStore::new(temp_dir.path().join("ArchiveList.json"));

        let doc = ManifestDocument {
            current_archive_id: 3,
            archives_count: 1,
            archives: vec![ArchiveEntry::new(
                3,
                "Tester".into(),
                "Archives/2025_01_01_000000".into(),
                "2025_01_01_000000".into(),
                "first".into(),
            )],
        };

        store.save(&doc).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(doc, loaded);

        // A second cycle must not drop or alter any field
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap().unwrap(), doc);
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ArchiveList.json");
        std::fs::write(&path, "{{{").unwrap();

        let store = ManifestStore::new(path);
        assert!(matches!(store.load(), Err(ArchiveError::Json(_))));
    }

    #[test]
    fn test_load_bad_archives_shape_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ArchiveList.json");
        std::fs::write(&path, r#"{"Archives": 42}"#).unwrap();

        let store = ManifestStore::new(path);
        assert!(matches!(store.load(), Err(ArchiveError::Json(_))));
    }
}
