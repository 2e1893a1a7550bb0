//! Archived save file access
//!
//! Reads and edits the copied YgoMaster save files inside an archive
//! directory. The save files are treated as generic JSON documents; only the
//! handful of fields we display or edit are interpreted.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::PlayerSummary;

use super::file_io::{read_json_opt, read_json_required, write_json_atomic};

/// Relative path of the player save inside the data tree and each archive
pub const PLAYER_SAVE_RELATIVE: &str = "Players/Local/Player.json";

/// Relative path of the settings file inside the data tree and each archive
pub const SETTINGS_RELATIVE: &str = "Settings.json";

/// Absolute path of the player save under `root`
pub fn player_save_path(root: &Path) -> PathBuf {
    root.join("Players").join("Local").join("Player.json")
}

/// Absolute path of the settings file under `root`
pub fn settings_path(root: &Path) -> PathBuf {
    root.join("Settings.json")
}

/// Expected save files missing under `root`, as relative paths
pub fn missing_save_files(root: &Path) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !player_save_path(root).exists() {
        missing.push(PLAYER_SAVE_RELATIVE);
    }
    if !settings_path(root).exists() {
        missing.push(SETTINGS_RELATIVE);
    }
    missing
}

/// Read a best-effort player summary from the save under `root`.
///
/// Returns `None` when the save is missing or unreadable; the caller shows
/// the record's stored values instead.
pub fn read_player_summary(root: &Path) -> Option<PlayerSummary> {
    let path = player_save_path(root);
    match read_json_opt::<Value, _>(&path) {
        Ok(Some(value)) => PlayerSummary::from_value(&value),
        Ok(None) => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read player save");
            None
        }
    }
}

/// Overwrite the `Gems` field inside the player save under `root`.
///
/// The rest of the document is preserved byte-for-byte in structure; only the
/// one scalar is patched, then the file is rewritten atomically.
pub fn set_gems(root: &Path, gems: i64) -> ArchiveResult<()> {
    let path = player_save_path(root);
    let mut value: Value = read_json_required(&path)?;

    match value.get_mut("Gems") {
        Some(slot) if slot.is_number() => {
            *slot = Value::from(gems);
        }
        _ => {
            return Err(ArchiveError::Json(format!(
                "Gems field missing or not a number in {}",
                path.display()
            )));
        }
    }

    write_json_atomic(&path, &value)
}
