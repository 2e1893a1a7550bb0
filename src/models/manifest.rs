//! Archive manifest document
//!
//! The manifest is a single JSON file cataloguing all archives and which one
//! is currently active. The field names mirror the legacy on-disk format
//! (`ArchiveList.json`), so renames are pinned with serde attributes.

use serde::{Deserialize, Deserializer, Serialize};

/// One backup snapshot as stored in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Unique, monotonically assigned id.
    ///
    /// Legacy manifests may carry entries with a missing or non-numeric id;
    /// such entries are kept in the document but skipped when the registry
    /// index is built.
    #[serde(
        rename = "id",
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,

    /// Player name read from the save at backup time; may be empty
    #[serde(rename = "Name", default)]
    pub name: String,

    /// Directory holding this archive's copied files
    #[serde(rename = "Path", default)]
    pub path: String,

    /// Local-time stamp `YYYY_MM_DD_HHMMSS` of the last payload write
    #[serde(rename = "LastBackupTime", default)]
    pub last_backup_time: String,

    /// Free-text, user-supplied description
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl ArchiveEntry {
    /// Create a new entry with a known id
    pub fn new(id: i64, name: String, path: String, time: String, description: String) -> Self {
        Self {
            id: Some(id),
            name,
            path,
            last_backup_time: time,
            description,
        }
    }
}

/// The persisted archive catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestDocument {
    /// Id of the archive most recently created or restored
    #[serde(rename = "Currently in use ArchiveID", default)]
    pub current_archive_id: i64,

    /// Cached entry count; kept equal to `archives.len()` on every write
    #[serde(rename = "ArchivesCount", default)]
    pub archives_count: usize,

    /// Ordered sequence of archive entries, unique by id
    #[serde(rename = "Archives", default)]
    pub archives: Vec<ArchiveEntry>,
}

impl ManifestDocument {
    /// Find an entry by id
    pub fn find(&self, id: i64) -> Option<&ArchiveEntry> {
        self.archives.iter().find(|e| e.id == Some(id))
    }

    /// Find an entry by id, mutable
    pub fn find_mut(&mut self, id: i64) -> Option<&mut ArchiveEntry> {
        self.archives.iter_mut().find(|e| e.id == Some(id))
    }

    /// Highest id present, ignoring entries without a valid id
    pub fn max_id(&self) -> Option<i64> {
        self.archives.iter().filter_map(|e| e.id).max()
    }

    /// The id a newly created archive would receive
    pub fn next_id(&self) -> i64 {
        self.max_id().map_or(0, |max| max + 1)
    }

    /// Recompute the cached count from the entry list
    pub fn refresh_count(&mut self) {
        self.archives_count = self.archives.len();
    }
}

/// Accept any JSON value for the id field, mapping non-integers to `None`
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_field_names() {
        let json = r#"{
            "Currently in use ArchiveID": 2,
            "ArchivesCount": 1,
            "Archives": [
                {
                    "id": 2,
                    "Name": "Player1",
                    "Path": "Archives/2025_01_02_030405",
                    "LastBackupTime": "2025_01_02_030405",
                    "Description": "before event"
                }
            ]
        }"#;

        let doc: ManifestDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.current_archive_id, 2);
        assert_eq!(doc.archives_count, 1);
        assert_eq!(doc.archives[0].id, Some(2));
        assert_eq!(doc.archives[0].name, "Player1");
        assert_eq!(doc.archives[0].description, "before event");
    }

    #[test]
    fn test_missing_optional_fields_default_empty() {
        let json = r#"{"Archives": [{"id": 0}]}"#;
        let doc: ManifestDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.archives[0].name, "");
        assert_eq!(doc.archives[0].path, "");
        assert_eq!(doc.archives[0].description, "");
    }

    #[test]
    fn test_non_numeric_id_tolerated() {
        let json = r#"{"Archives": [{"id": "zero"}, {"id": 1}, {}]}"#;
        let doc: ManifestDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.archives.len(), 3);
        assert_eq!(doc.archives[0].id, None);
        assert_eq!(doc.archives[1].id, Some(1));
        assert_eq!(doc.archives[2].id, None);
    }

    #[test]
    fn test_archives_not_an_array_is_an_error() {
        let json = r#"{"Archives": {"id": 0}}"#;
        assert!(serde_json::from_str::<ManifestDocument>(json).is_err());
    }

    #[test]
    fn test_round_trip() {
        let doc = ManifestDocument {
            current_archive_id: 1,
            archives_count: 2,
            archives: vec![
                ArchiveEntry::new(0, "A".into(), "Archives/a".into(), "t0".into(), "".into()),
                ArchiveEntry::new(1, "B".into(), "Archives/b".into(), "t1".into(), "desc".into()),
            ],
        };

        let json = serde_json::to_string_pretty(&doc).unwrap();
        let loaded: ManifestDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, loaded);

        // Legacy key names must survive serialization
        assert!(json.contains("Currently in use ArchiveID"));
        assert!(json.contains("ArchivesCount"));
        assert!(json.contains("LastBackupTime"));
    }

    #[test]
    fn test_id_allocation() {
        let mut doc = ManifestDocument::default();
        assert_eq!(doc.next_id(), 0);

        doc.archives.push(ArchiveEntry::new(
            0,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ));
        doc.archives.push(ArchiveEntry::new(
            4,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ));
        assert_eq!(doc.max_id(), Some(4));
        assert_eq!(doc.next_id(), 5);
    }

    #[test]
    fn test_find_by_id_not_position() {
        let doc = ManifestDocument {
            current_archive_id: 5,
            archives_count: 2,
            archives: vec![
                ArchiveEntry::new(5, "five".into(), "".into(), "".into(), "".into()),
                ArchiveEntry::new(0, "zero".into(), "".into(), "".into(), "".into()),
            ],
        };

        assert_eq!(doc.find(5).unwrap().name, "five");
        assert_eq!(doc.find(0).unwrap().name, "zero");
        assert!(doc.find(1).is_none());
    }
}
