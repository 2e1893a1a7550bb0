//! File copier
//!
//! Copies a fixed, declarative set of backup targets between a source tree
//! and a destination tree. The same routine runs in both directions: data
//! tree to archive directory for backups, archive directory to data tree for
//! restores.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{ArchiveError, ArchiveResult};

/// Whether a backup target is a single file or a whole directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
}

/// One declared file or directory, relative to the data root, copied in both
/// backup and restore directions
#[derive(Debug, Clone, Copy)]
pub struct BackupTarget {
    pub kind: TargetKind,
    pub relative_path: &'static str,
}

/// The fixed set of save data copied into and out of every archive
pub const BACKUP_TARGETS: &[BackupTarget] = &[
    BackupTarget {
        kind: TargetKind::File,
        relative_path: "Settings.json",
    },
    BackupTarget {
        kind: TargetKind::Directory,
        relative_path: "Players",
    },
];

/// What a `copy_tree` call actually did
#[derive(Debug, Default)]
pub struct CopyReport {
    /// Targets copied to the destination
    pub copied: Vec<&'static str>,
    /// Targets skipped because the source was absent
    pub skipped: Vec<&'static str>,
}

/// Copy each target from `source_root` to `dest_root`.
///
/// A missing source is skipped and logged; a partially populated source tree
/// is expected (fresh installs). The first I/O failure aborts the whole call
/// with no rollback of targets already copied, so on error the destination
/// may hold an inconsistent mix and the caller should retry or
/// delete-and-recreate.
pub fn copy_tree(
    source_root: &Path,
    dest_root: &Path,
    targets: &[BackupTarget],
) -> ArchiveResult<CopyReport> {
    let mut report = CopyReport::default();

    for target in targets {
        let source = source_root.join(target.relative_path);
        let dest = dest_root.join(target.relative_path);

        if !source.exists() {
            warn!(
                source = %source.display(),
                "source path does not exist, skipping target"
            );
            report.skipped.push(target.relative_path);
            continue;
        }

        let copied = match target.kind {
            TargetKind::File => copy_file(&source, &dest),
            TargetKind::Directory => copy_dir_recursive(&source, &dest),
        };

        copied.map_err(|e| ArchiveError::Copy {
            target: target.relative_path.to_string(),
            detail: e.to_string(),
        })?;

        report.copied.push(target.relative_path);
    }

    Ok(report)
}

fn copy_file(source: &Path, dest: &Path) -> std::io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    Ok(())
}

/// Recursive full copy, overwriting existing destination files.
///
/// Always copies everything currently under `source`, including files added
/// after the destination was first created.
fn copy_dir_recursive(source: &Path, dest: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let entry_dest = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &entry_dest)?;
        } else {
            fs::copy(entry.path(), &entry_dest)?;
        }
    }
    Ok(())
}
