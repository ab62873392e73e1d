//! Exclusion of directories by name.

use crate::app::models::DirectoryEntry;
use std::path::{Component, Path};

/// True if any segment of `path` is exactly one of `excludes`.
///
/// Matching is case-sensitive and per whole segment: excluding `api` leaves
/// `myapi` and `api.md` alone. Every segment of the path counts, including
/// the ones above the wiki root.
pub fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    if excludes.is_empty() {
        return false;
    }

    path.components().any(|c| match c {
        Component::Normal(segment) => excludes.iter().any(|name| segment == name.as_str()),
        _ => false,
    })
}

/// Keeps the entries that are not inside an excluded directory, in their original order.
pub fn exclude_directories(entries: Vec<DirectoryEntry>, excludes: &[String]) -> Vec<DirectoryEntry> {
    entries
        .into_iter()
        .filter(|entry| {
            let excluded = is_excluded(&entry.path, excludes);
            if excluded {
                log::debug!("Excluding {}", entry.path.display());
            }
            !excluded
        })
        .collect()
}
