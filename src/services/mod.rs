//! Service layer for ymarchive
//!
//! The service layer provides the backup/restore/delete engine on top of the
//! storage layer, keeping the manifest and the archive directories in
//! agreement.

pub mod archive;

pub use archive::{ArchiveDetail, ArchiveService};
