//! Core data models for ymarchive
//!
//! This module contains the data structures persisted on disk: the archive
//! manifest (catalog) and the subset of the player save file we inspect.

pub mod manifest;
pub mod player;

pub use manifest::{ArchiveEntry, ManifestDocument};
pub use player::PlayerSummary;
