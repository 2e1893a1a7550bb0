//! CLI command handlers
//!
//! This module bridges clap argument parsing with the service layer, and
//! owns the interactive pieces: the first-run data directory prompt and the
//! description prompt for new archives.

pub mod archive;
pub mod bootstrap;

pub use archive::{
    handle_backup, handle_config, handle_delete, handle_list, handle_new, handle_restore,
    handle_set_description, handle_set_gems, handle_show,
};
pub use bootstrap::resolve_config;
