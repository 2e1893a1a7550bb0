//! First-run configuration bootstrap
//!
//! Loads the config file, or creates it: the data directory is discovered
//! from the fixed candidate paths, falling back to an interactive prompt.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::discovery::{discover_data_dir, validate_data_dir};
use crate::config::Config;
use crate::error::{ArchiveError, ArchiveResult};

/// Load the config at `config_path`, materializing a default one on first run
pub fn resolve_config(config_path: &Path) -> ArchiveResult<Config> {
    if let Some(config) = Config::load(config_path)? {
        return Ok(config);
    }

    println!("Config file not found, creating a default one.");

    let base_dir = std::env::current_dir()
        .map_err(|e| ArchiveError::Config(format!("Cannot determine working directory: {}", e)))?;

    let data_path = match discover_data_dir(&base_dir) {
        Some(path) => {
            println!("Data directory found at {}", path.display());
            path
        }
        None => {
            println!("Data directory not found in default search paths.");
            prompt_data_dir()?
        }
    };

    let config = Config::with_defaults(&base_dir, data_path);
    config.save(config_path)?;
    println!("Default config file created at {}", config_path.display());
    Ok(config)
}

/// Ask the user for the data directory until a valid one is given
fn prompt_data_dir() -> ArchiveResult<PathBuf> {
    loop {
        let input = prompt_line("Please input the game Data directory path: ")?;
        let path = PathBuf::from(input.trim());
        if validate_data_dir(&path) {
            println!("Data directory set to {}", path.display());
            return Ok(path);
        }
        println!("Path {} is not a valid directory.", path.display());
    }
}

/// Print a prompt and read one trimmed line from stdin
pub fn prompt_line(prompt: &str) -> ArchiveResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| ArchiveError::Io(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| ArchiveError::Io(format!("Failed to read input: {}", e)))?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
