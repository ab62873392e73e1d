use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List the directories of a wiki that belong in its sidebar"
)]
pub struct Cli {
    /// Wiki root directory
    pub wiki_root: PathBuf,

    /// Directory names to exclude, including all their subdirectories.
    /// Defaults to the exclusions in the config file
    #[arg(long, num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Maximum depth to build the tree [default: 3]
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Only build the sidebar using directories, hiding files
    #[arg(long)]
    pub hide_files: bool,

    /// Read settings from this file instead of ~/.config/wiki_sidebar/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}
