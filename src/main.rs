use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ymarchive::cli::{
    handle_backup, handle_config, handle_delete, handle_list, handle_new, handle_restore,
    handle_set_description, handle_set_gems, handle_show, resolve_config,
};
use ymarchive::config::CONFIG_FILE_NAME;
use ymarchive::registry::DEFAULT_LIST_LIMIT;
use ymarchive::services::ArchiveService;

#[derive(Parser)]
#[command(
    name = "ymarchive",
    version,
    about = "Local backup/restore archive manager for YgoMaster save data",
    long_about = "ymarchive keeps timestamped snapshots of the YgoMaster save \
                  data tree and a JSON manifest cataloguing them. Archives can \
                  be created, listed, inspected, restored, and deleted; the \
                  manifest and the archive directories are kept in agreement."
)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME, env = "YMARCHIVE_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up the data tree into the current archive (replace)
    Backup,

    /// Back up the data tree into a brand-new archive
    New {
        /// Description for the new archive
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List archives
    List {
        /// Maximum number of archives to display
        #[arg(short, long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// Show detailed info for an archive (defaults to the current one)
    Show {
        /// Archive id
        #[arg(allow_negative_numbers = true)]
        id: Option<i64>,
    },

    /// Delete an archive and its directory
    Delete {
        /// Archive id
        id: i64,
    },

    /// Restore an archive's contents into the data tree
    Restore {
        /// Archive id
        id: i64,

        /// Back up the current archive first
        #[arg(short, long)]
        backup: bool,
    },

    /// Replace an archive's description
    SetDescription {
        /// Archive id
        id: i64,
        /// New description text
        text: String,
    },

    /// Set the gem counter inside an archived save
    SetGems {
        /// Archive id
        id: i64,
        /// New gem amount (non-negative)
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Show the resolved configuration and catalog state
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = resolve_config(&cli.config)?;
    let mut service = ArchiveService::open(config)?;

    match cli.command {
        Some(Commands::Backup) => handle_backup(&mut service)?,
        Some(Commands::New { description }) => handle_new(&mut service, description)?,
        Some(Commands::List { limit }) => handle_list(&service, limit)?,
        Some(Commands::Show { id }) => handle_show(&service, id)?,
        Some(Commands::Delete { id }) => handle_delete(&mut service, id)?,
        Some(Commands::Restore { id, backup }) => handle_restore(&mut service, id, backup)?,
        Some(Commands::SetDescription { id, text }) => {
            handle_set_description(&mut service, id, &text)?
        }
        Some(Commands::SetGems { id, value }) => handle_set_gems(&mut service, id, value)?,
        Some(Commands::Config) => handle_config(&service),
        None => {
            println!("ymarchive - YgoMaster save archive manager");
            println!();
            println!("Run 'ymarchive --help' for usage information.");
            println!("Run 'ymarchive list' to see your archives.");
        }
    }

    Ok(())
}
