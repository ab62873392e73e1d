use std::path::PathBuf;

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    /// Absolute wiki root.
    pub root: PathBuf,
    /// Directory names (not paths) to leave out, together with everything below them.
    pub exclude: Vec<String>,
    /// Accepted but not applied: traversal always covers the whole tree.
    pub max_depth: usize,
    /// Accepted but not applied: file names are never printed.
    pub hide_files: bool,
}

/// One directory found during the scan, with its immediate children.
///
/// Child names are converted lossily: bytes that are not valid UTF-8 become U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub subdirectories: Vec<String>,
    pub files: Vec<String>,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }
}
