//! Archive registry
//!
//! In-memory index of archive records derived from the manifest document.
//! The registry is rebuilt wholesale from the document after every mutating
//! operation; it is never patched incrementally, so it cannot drift from
//! what is on disk.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

use crate::models::{ArchiveEntry, ManifestDocument};

/// Default maximum number of archives shown by a listing
pub const DEFAULT_LIST_LIMIT: usize = 5;

/// One archive as indexed by the registry, with a guaranteed id
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRecord {
    pub id: i64,
    pub name: String,
    pub path: PathBuf,
    pub last_backup_time: String,
    pub description: String,
}

impl ArchiveRecord {
    fn from_entry(id: i64, entry: &ArchiveEntry) -> Self {
        Self {
            id,
            name: entry.name.clone(),
            path: PathBuf::from(&entry.path),
            last_backup_time: entry.last_backup_time.clone(),
            description: entry.description.clone(),
        }
    }
}

/// A page of records for display
#[derive(Debug, Clone)]
pub struct ListPage {
    /// Total number of indexed archives
    pub total: usize,
    /// The first `min(limit, total)` records in creation order
    pub records: Vec<ArchiveRecord>,
    /// True when more archives exist than were included
    pub truncated: bool,
}

/// Index of archive records, keyed by id, ordered by creation
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<ArchiveRecord>,
    index: HashMap<i64, usize>,
    current_id: i64,
}

impl Registry {
    /// Build a registry from a manifest document
    pub fn from_document(doc: &ManifestDocument) -> Self {
        let mut registry = Self::default();
        registry.rebuild(doc);
        registry
    }

    /// Replace the entire index with the document's contents.
    ///
    /// Entries without a usable id are skipped; a duplicate id keeps the
    /// first occurrence. Neither aborts the rebuild.
    pub fn rebuild(&mut self, doc: &ManifestDocument) {
        self.records.clear();
        self.index.clear();
        self.current_id = doc.current_archive_id;

        for entry in &doc.archives {
            let Some(id) = entry.id else {
                warn!("manifest entry without a numeric id, skipping");
                continue;
            };
            if self.index.contains_key(&id) {
                warn!(id, "duplicate archive id in manifest, keeping first");
                continue;
            }
            self.index.insert(id, self.records.len());
            self.records.push(ArchiveRecord::from_entry(id, entry));
        }
    }

    /// Look up a record by id
    pub fn get(&self, id: i64) -> Option<&ArchiveRecord> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// Whether an archive with this id exists
    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    /// Id of the currently active archive
    pub fn current_id(&self) -> i64 {
        self.current_id
    }

    /// The currently active record, resolved by id (never by array position)
    pub fn current(&self) -> Option<&ArchiveRecord> {
        self.get(self.current_id)
    }

    /// Number of indexed archives
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no archives
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in creation order
    pub fn iter(&self) -> impl Iterator<Item = &ArchiveRecord> {
        self.records.iter()
    }

    /// First `min(limit, len)` records for display, flagging truncation
    pub fn page(&self, limit: usize) -> ListPage {
        let shown = limit.min(self.records.len());
        ListPage {
            total: self.records.len(),
            records: self.records[..shown].to_vec(),
            truncated: self.records.len() > shown,
        }
    }
}
