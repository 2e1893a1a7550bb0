//! Data directory discovery
//!
//! On first run the game's Data directory is located by probing a fixed list
//! of candidate paths relative to the working directory; the first existing
//! directory wins. The interactive prompt fallback lives in the CLI layer.

use std::path::{Path, PathBuf};

use tracing::info;

/// Candidate relative locations of the YgoMaster Data directory, tried in order
pub const DATA_DIR_SEARCH_PATHS: &[&str] = &["../Data", "Data", "YgoMaster/Data"];

/// Probe the candidate paths under `base` and return the first existing
/// directory
pub fn discover_data_dir(base: &Path) -> Option<PathBuf> {
    for candidate in DATA_DIR_SEARCH_PATHS {
        let path = base.join(candidate);
        if path.is_dir() {
            info!(path = %path.display(), "data directory found");
            return Some(path);
        }
    }
    None
}

/// Whether a user-supplied path is acceptable as the data directory
pub fn validate_data_dir(path: &Path) -> bool {
    path.is_dir()
}
