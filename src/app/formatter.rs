use crate::app::models::DirectoryEntry;

pub struct OutputGenerator;

impl OutputGenerator {
    /// One directory path per line, in the order given.
    pub fn generate_paths(entries: &[DirectoryEntry]) -> String {
        entries
            .iter()
            .map(|entry| entry.path.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
