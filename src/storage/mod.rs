//! Storage layer for ymarchive
//!
//! Provides JSON file storage with atomic writes plus access to the archived
//! save files themselves.

pub mod file_io;
pub mod manifest;
pub mod savefile;

pub use file_io::{read_json_opt, read_json_required, write_json_atomic};
pub use manifest::ManifestStore;
