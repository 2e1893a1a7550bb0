//! ymarchive - local backup/restore archive manager for YgoMaster save data
//!
//! This library maintains an on-disk JSON manifest describing a set of
//! point-in-time snapshots ("archives") of the game's save data tree, and
//! keeps the manifest consistent with the archive directories on disk.
//!
//! # Architecture
//!
//! - `config`: config document and data directory discovery
//! - `error`: custom error types
//! - `models`: manifest and player save data structures
//! - `storage`: atomic JSON file I/O, the manifest store, save file access
//! - `copier`: declarative backup targets and the tree copier
//! - `registry`: in-memory archive index, rebuilt from the manifest
//! - `services`: the backup/restore/delete engine
//! - `cli`: command handlers and interactive prompts
//!
//! # Concurrency
//!
//! Everything is single-threaded and synchronous. The manifest file carries
//! no cross-process lock; concurrent instances can race on it and on the
//! archive directories.

pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod models;
pub mod registry;
pub mod services;
pub mod storage;

pub use error::{ArchiveError, ArchiveResult};
