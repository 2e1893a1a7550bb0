//! Backup/restore/delete engine
//!
//! `ArchiveService` is the session object threaded through every operation:
//! it owns the resolved config, the manifest store, and the registry, and it
//! implements the composite state transitions. After every mutating
//! operation the manifest is persisted in full and the registry rebuilt from
//! it.
//!
//! The manifest file is the only resource shared outside the process and no
//! cross-process locking is provided; two concurrent instances, or the game
//! itself writing saves mid-backup, can race. That is a documented
//! limitation, not something this engine defends against.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::copier::{copy_tree, BACKUP_TARGETS};
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{ArchiveEntry, ManifestDocument, PlayerSummary};
use crate::registry::{ArchiveRecord, ListPage, Registry};
use crate::storage::{savefile, ManifestStore};

/// Everything the detail view shows for one archive
#[derive(Debug)]
pub struct ArchiveDetail {
    pub record: ArchiveRecord,
    /// Best-effort read of the archived player save
    pub player: Option<PlayerSummary>,
    /// Expected save files absent from the archive directory; warnings only
    pub missing_files: Vec<&'static str>,
}

/// The backup/restore/delete engine
pub struct ArchiveService {
    config: Config,
    store: ManifestStore,
    registry: Registry,
}

impl ArchiveService {
    /// Open the catalog, materializing it on first run.
    ///
    /// When the manifest file does not exist yet, an empty document is
    /// persisted and archive id 0 is created immediately from the current
    /// data tree.
    pub fn open(config: Config) -> ArchiveResult<Self> {
        let store = ManifestStore::new(config.list_path.clone());

        let (doc, first_run) = match store.load()? {
            Some(doc) => (doc, false),
            None => {
                info!(path = %store.path().display(), "manifest not found, creating");
                let doc = ManifestDocument::default();
                store.save(&doc)?;
                (doc, true)
            }
        };

        let mut service = Self {
            registry: Registry::from_document(&doc),
            config,
            store,
        };

        if first_run {
            info!("taking the first backup");
            service.create_or_replace(0, false, None)?;
        }

        Ok(service)
    }

    /// The resolved session configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current registry index
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Id of the currently active archive
    pub fn current_id(&self) -> i64 {
        self.registry.current_id()
    }

    /// First `min(limit, total)` records for display
    pub fn page(&self, limit: usize) -> ListPage {
        self.registry.page(limit)
    }

    /// Whether a `create_or_replace` call with these arguments would create a
    /// brand-new entry that wants a user-supplied description.
    ///
    /// The very first archive ever created is never prompted for one.
    pub fn needs_description(&self, target_id: i64, force_new: bool) -> bool {
        !self.registry.is_empty() && (force_new || !self.registry.contains(target_id))
    }

    /// Back up the data tree into an archive.
    ///
    /// With `force_new` false and an existing `target_id`, the record's
    /// directory is reused and its payload replaced; otherwise a new entry is
    /// appended under `max(ids) + 1` (0 for an empty catalog). Returns the id
    /// the backup landed on.
    pub fn create_or_replace(
        &mut self,
        target_id: i64,
        force_new: bool,
        description: Option<String>,
    ) -> ArchiveResult<i64> {
        let mut doc = self.load_manifest()?;
        let stamp = timestamp();

        let existing_path = if force_new {
            None
        } else {
            doc.find(target_id).map(|e| PathBuf::from(&e.path))
        };

        let assigned_id = if let Some(path) = existing_path {
            // Replace: reuse the record's directory, refresh its payload
            fs::create_dir_all(&path).map_err(|e| {
                ArchiveError::Io(format!("Failed to create {}: {}", path.display(), e))
            })?;

            copy_tree(&self.config.data_path, &path, BACKUP_TARGETS)?;

            let name = savefile::read_player_summary(&path).map(|s| s.name);
            if name.is_none() {
                warn!(id = target_id, "player save unreadable, keeping stored name");
            }

            if let Some(entry) = doc.find_mut(target_id) {
                if let Some(name) = name {
                    entry.name = name;
                }
                entry.last_backup_time = stamp;
            }
            doc.current_archive_id = target_id;
            target_id
        } else {
            // New entry: fresh id, fresh timestamped directory
            let was_empty = doc.archives.is_empty();
            let new_id = doc.next_id();
            let dir = unique_archive_dir(&self.config.archives_path, &stamp);

            fs::create_dir_all(&dir).map_err(|e| {
                ArchiveError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;

            copy_tree(&self.config.data_path, &dir, BACKUP_TARGETS)?;

            let name = savefile::read_player_summary(&dir)
                .map(|s| s.name)
                .unwrap_or_default();
            let description = if was_empty {
                // No description requested for the very first archive
                String::new()
            } else {
                description.unwrap_or_default()
            };

            doc.archives.push(ArchiveEntry::new(
                new_id,
                name,
                dir.to_string_lossy().into_owned(),
                stamp,
                description,
            ));
            doc.current_archive_id = new_id;
            new_id
        };

        self.commit(doc)?;
        info!(id = assigned_id, "backup complete");
        Ok(assigned_id)
    }

    /// Delete an archive: its directory (if still present) and its manifest
    /// entry.
    ///
    /// An already-removed directory counts as success, so the call is
    /// idempotent with respect to the filesystem.
    pub fn delete(&mut self, id: i64) -> ArchiveResult<()> {
        let record = self
            .registry
            .get(id)
            .ok_or_else(|| ArchiveError::archive_not_found(id))?;
        let path = record.path.clone();

        if path.exists() {
            fs::remove_dir_all(&path).map_err(|e| {
                ArchiveError::Io(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            info!(id, path = %path.display(), "archive directory removed");
        } else {
            info!(id, path = %path.display(), "archive directory already gone");
        }

        let mut doc = self.load_manifest()?;
        doc.archives.retain(|e| e.id != Some(id));
        self.commit(doc)?;
        Ok(())
    }

    /// Restore an archive's contents into the data tree.
    ///
    /// With `with_safety_backup`, the current archive is re-backed-up first;
    /// any failure there aborts the restore before the data tree is touched.
    /// A failure during the archive-to-data copy itself leaves the data tree
    /// mixed between old and restored content; it is reported, not rolled
    /// back.
    pub fn restore(&mut self, id: i64, with_safety_backup: bool) -> ArchiveResult<()> {
        if !self.registry.contains(id) {
            return Err(ArchiveError::archive_not_found(id));
        }

        if with_safety_backup {
            let current = self.registry.current_id();
            info!(current, "backing up current archive before restore");
            self.create_or_replace(current, false, None)?;
        }

        let source = self
            .registry
            .get(id)
            .ok_or_else(|| ArchiveError::archive_not_found(id))?
            .path
            .clone();

        copy_tree(&source, &self.config.data_path, BACKUP_TARGETS)?;

        let mut doc = self.load_manifest()?;
        doc.current_archive_id = id;
        self.commit(doc)?;
        info!(id, "restore complete");
        Ok(())
    }

    /// Replace an archive's description in the manifest
    pub fn reset_description(&mut self, id: i64, new_text: &str) -> ArchiveResult<()> {
        let mut doc = self.load_manifest()?;
        let entry = doc
            .find_mut(id)
            .ok_or_else(|| ArchiveError::archive_not_found(id))?;
        entry.description = new_text.to_string();
        self.commit(doc)
    }

    /// Overwrite the gem counter inside an archive's copied player save.
    ///
    /// Negative values are rejected before anything is touched.
    pub fn reset_gems(&mut self, id: i64, new_value: i64) -> ArchiveResult<()> {
        if new_value < 0 {
            return Err(ArchiveError::InvalidArgument(format!(
                "gems must be non-negative, got {}",
                new_value
            )));
        }

        let record = self
            .registry
            .get(id)
            .ok_or_else(|| ArchiveError::archive_not_found(id))?;
        savefile::set_gems(&record.path, new_value)
    }

    /// Inspect one archive; `id` of -1 means the current archive.
    ///
    /// Missing expected files and an unreadable player save are reported, not
    /// treated as failures.
    pub fn detail(&self, id: i64) -> ArchiveResult<ArchiveDetail> {
        let resolved = if id == -1 {
            self.registry.current_id()
        } else {
            id
        };

        let record = self
            .registry
            .get(resolved)
            .ok_or_else(|| ArchiveError::archive_not_found(resolved))?
            .clone();

        let missing_files = savefile::missing_save_files(&record.path);
        let player = savefile::read_player_summary(&record.path);

        Ok(ArchiveDetail {
            record,
            player,
            missing_files,
        })
    }

    fn load_manifest(&self) -> ArchiveResult<ManifestDocument> {
        self.store.load()?.ok_or_else(|| {
            ArchiveError::Io(format!(
                "Manifest not found: {}",
                self.store.path().display()
            ))
        })
    }

    /// Recompute the cached count, persist the whole document, rebuild the
    /// index from it.
    fn commit(&mut self, mut doc: ManifestDocument) -> ArchiveResult<()> {
        doc.refresh_count();
        self.store.save(&doc)?;
        self.registry.rebuild(&doc);
        Ok(())
    }
}

/// Local-time stamp in the legacy `YYYY_MM_DD_HHMMSS` format
fn timestamp() -> String {
    Local::now().format("%Y_%m_%d_%H%M%S").to_string()
}

/// Directory for a new archive; a numeric suffix keeps two archives created
/// within the same second from sharing a directory.
fn unique_archive_dir(root: &std::path::Path, stamp: &str) -> PathBuf {
    let mut candidate = root.join(stamp);
    let mut n = 1;
    while candidate.exists() {
        candidate = root.join(format!("{}_{}", stamp, n));
        n += 1;
    }
    candidate
}
