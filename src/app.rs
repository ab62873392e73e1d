// Declare modules
pub mod cli;
pub mod config;
pub mod filter;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::filter::exclude_directories;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args)?;

    log::info!("Creating sidebar starting from {}", config.root.display());
    log::debug!(
        "max_depth={} hide_files={} (accepted, not applied)",
        config.max_depth,
        config.hide_files
    );

    // 3. Enumerate Directories
    let scanner = Scanner::new(config.root.clone());
    let entries = scanner
        .scan()
        .with_context(|| format!("Failed to enumerate {}", config.root.display()))?;
    log::debug!("Enumerated {} directories", entries.len());
    for entry in &entries {
        log::trace!(
            "{}: {} subdirectories, {} files",
            entry.path.display(),
            entry.subdirectories.len(),
            entry.files.len()
        );
    }

    // 4. Drop Excluded Directories
    let entries = exclude_directories(entries, &config.exclude);
    log::debug!("{} directories left after exclusion", entries.len());

    // 5. Print to Stdout
    let output = OutputGenerator::generate_paths(&entries);
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
