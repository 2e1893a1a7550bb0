//! Archive CLI commands
//!
//! Thin handlers over `ArchiveService`; every operation prints a clear
//! success or failure outcome.

use crate::error::ArchiveResult;
use crate::registry::ArchiveRecord;
use crate::services::ArchiveService;

use super::bootstrap::prompt_line;

/// `backup`: re-back-up into the current archive (replace)
pub fn handle_backup(service: &mut ArchiveService) -> ArchiveResult<()> {
    let current = service.current_id();
    let description = maybe_prompt_description(service, current, false)?;

    let id = service.create_or_replace(current, false, description)?;
    println!("Archive {} updated successfully.", id);
    Ok(())
}

/// `new`: back up into a brand-new archive
pub fn handle_new(service: &mut ArchiveService, description: Option<String>) -> ArchiveResult<()> {
    let current = service.current_id();
    let description = match description {
        Some(text) => Some(text),
        None => maybe_prompt_description(service, current, true)?,
    };

    let id = service.create_or_replace(current, true, description)?;
    println!("New archive {} created successfully.", id);
    Ok(())
}

/// `list`: show the first `limit` archives
pub fn handle_list(service: &ArchiveService, limit: usize) -> ArchiveResult<()> {
    let page = service.page(limit);

    println!("*------------------ Archive List ------------------*");
    println!(
        "There are {} archives in total, displaying {}:",
        page.total,
        page.records.len()
    );
    for record in &page.records {
        let marker = if record.id == service.current_id() {
            " (current)"
        } else {
            ""
        };
        print_record(record, marker);
        println!("--------------------------------------------------");
    }
    if page.truncated {
        println!("...");
    }
    println!("*--------------------------------------------------*");
    Ok(())
}

/// `show`: detailed info for one archive (`None` = current)
pub fn handle_show(service: &ArchiveService, id: Option<i64>) -> ArchiveResult<()> {
    let detail = service.detail(id.unwrap_or(-1))?;

    if !detail.missing_files.is_empty() {
        println!("Warning: some expected files are missing from this archive:");
        for file in &detail.missing_files {
            println!("\t{}", file);
        }
        println!("This archive was not backed up properly or is damaged!");
    }

    println!("*------------------ Archive Detail ------------------*");
    println!("\tArchiveID: {}", detail.record.id);
    match &detail.player {
        Some(player) => {
            println!("\tPlayer Code: {}", player.code);
            println!("\tPlayer Gems: {}", player.gems);
        }
        None => {
            println!("\tPlayer Code: N/A (failed to read Player.json)");
            println!("\tPlayer Gems: N/A (failed to read Player.json)");
        }
    }
    println!("\tPlayer Name: {}", detail.record.name);
    println!("\tArchive Path: {}", detail.record.path.display());
    println!("\tLast update time: {}", detail.record.last_backup_time);
    println!("\tDescription: {}", detail.record.description);
    println!("*----------------------------------------------------*");
    Ok(())
}

/// `delete`: remove an archive and its directory
pub fn handle_delete(service: &mut ArchiveService, id: i64) -> ArchiveResult<()> {
    service.delete(id)?;
    println!("Archive {} deleted successfully.", id);
    println!("Now there are {} archives in total.", service.registry().len());
    Ok(())
}

/// `restore`: copy an archive back into the data tree
pub fn handle_restore(
    service: &mut ArchiveService,
    id: i64,
    with_backup: bool,
) -> ArchiveResult<()> {
    if with_backup {
        println!("Backing up current data before restoring...");
    }
    service.restore(id, with_backup)?;
    println!("Archive {} restored successfully.", id);
    Ok(())
}

/// `set-description`: replace an archive's description text
pub fn handle_set_description(
    service: &mut ArchiveService,
    id: i64,
    text: &str,
) -> ArchiveResult<()> {
    service.reset_description(id, text)?;
    println!("Description for archive {} updated.", id);
    Ok(())
}

/// `set-gems`: patch the gem counter inside an archived save
pub fn handle_set_gems(service: &mut ArchiveService, id: i64, value: i64) -> ArchiveResult<()> {
    service.reset_gems(id, value)?;
    println!("Player gems for archive {} set to {}.", id, value);
    Ok(())
}

/// `config`: print the resolved paths
pub fn handle_config(service: &ArchiveService) {
    let config = service.config();
    println!("ymarchive configuration");
    println!("=======================");
    println!("Manifest file:  {}", config.list_path.display());
    println!("Data directory: {}", config.data_path.display());
    println!("Archives root:  {}", config.archives_path.display());
    println!();
    println!("Current archive: {}", service.current_id());
    println!("Archives total:  {}", service.registry().len());
}

fn print_record(record: &ArchiveRecord, marker: &str) {
    println!("\tArchiveID: {}{}", record.id, marker);
    println!("\tName: {}", record.name);
    println!("\tLast update time: {}", record.last_backup_time);
    println!("\tDescription: {}", record.description);
}

/// Prompt for a description only when the upcoming backup will create a new
/// entry that wants one
fn maybe_prompt_description(
    service: &ArchiveService,
    target_id: i64,
    force_new: bool,
) -> ArchiveResult<Option<String>> {
    if !service.needs_description(target_id, force_new) {
        return Ok(None);
    }
    let text = prompt_line("Enter a description for the archive (default is empty): ")?;
    Ok(Some(text))
}
