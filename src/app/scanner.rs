use crate::app::models::DirectoryEntry;
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to read {0}: {1}")]
    Io(PathBuf, #[source] io::Error),
    #[error("File system walk error: {0}")]
    Walk(#[from] ignore::Error),
}

pub struct Scanner {
    root: PathBuf,
}

impl Scanner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Lists every directory under the root, root included, parents before children.
    ///
    /// Symlinks are not followed. A link to a directory shows up in its parent's
    /// `subdirectories` but is never entered, so link cycles cannot loop.
    pub fn scan(&self) -> Result<Vec<DirectoryEntry>, ScanError> {
        self.check_root()?;

        let mut entries: Vec<DirectoryEntry> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();

        // Plain walk: no hidden-file or gitignore filtering
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for result in walker {
            let entry = result?;
            let path = entry.path();
            // check_root already resolved the root, which may itself be a symlink
            let is_dir = entry.depth() == 0 || entry.file_type().is_some_and(|t| t.is_dir());

            if entry.depth() > 0 {
                let name = entry.file_name().to_string_lossy().to_string();
                let parent = path
                    .parent()
                    .and_then(|p| index.get(p))
                    .and_then(|&i| entries.get_mut(i));

                if let Some(parent) = parent {
                    if is_dir || (entry.path_is_symlink() && path.is_dir()) {
                        parent.subdirectories.push(name);
                    } else {
                        parent.files.push(name);
                    }
                }
            }

            if is_dir {
                index.insert(path.to_path_buf(), entries.len());
                entries.push(DirectoryEntry::new(path.to_path_buf()));
            }
        }

        Ok(entries)
    }

    fn check_root(&self) -> Result<(), ScanError> {
        let metadata = fs::metadata(&self.root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(self.root.clone()),
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(self.root.clone()),
            _ => ScanError::Io(self.root.clone(), e),
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        // read_dir surfaces an unreadable root before the walk starts
        fs::read_dir(&self.root).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => ScanError::PermissionDenied(self.root.clone()),
            _ => ScanError::Io(self.root.clone(), e),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::Path;

    fn create_test_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("a").join("b")).unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        File::create(dir.path().join("Home.md")).unwrap();
        File::create(dir.path().join("a").join("page.md")).unwrap();
        dir
    }

    fn paths(entries: &[DirectoryEntry]) -> Vec<PathBuf> {
        entries.iter().map(|e| e.path.clone()).collect()
    }

    #[test]
    fn test_one_entry_per_directory() {
        let dir = create_test_dir();
        let root = dir.path().to_path_buf();
        let entries = Scanner::new(root.clone()).scan().unwrap();

        assert_eq!(
            paths(&entries),
            vec![
                root.clone(),
                root.join("a"),
                root.join("a").join("b"),
                root.join("c"),
            ]
        );
    }

    #[test]
    fn test_children_are_recorded() {
        let dir = create_test_dir();
        let entries = Scanner::new(dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(entries[0].subdirectories, vec!["a", "c"]);
        assert_eq!(entries[0].files, vec!["Home.md"]);
        assert_eq!(entries[1].subdirectories, vec!["b"]);
        assert_eq!(entries[1].files, vec!["page.md"]);
        assert!(entries[2].subdirectories.is_empty());
        assert!(entries[2].files.is_empty());
    }

    #[test]
    fn test_parents_precede_descendants() {
        let dir = create_test_dir();
        fs::create_dir_all(dir.path().join("c").join("d").join("e")).unwrap();
        let entries = Scanner::new(dir.path().to_path_buf()).scan().unwrap();

        for (i, entry) in entries.iter().enumerate() {
            for later in &entries[i + 1..] {
                assert!(!entry.path.starts_with(&later.path));
            }
        }
    }

    #[test]
    fn test_hidden_directories_are_listed() {
        let dir = create_test_dir();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join(".gitignore"), "c/\n").unwrap();
        let entries = Scanner::new(dir.path().to_path_buf()).scan().unwrap();

        let found = paths(&entries);
        assert!(found.contains(&dir.path().join(".git")));
        assert!(found.contains(&dir.path().join("c")));
    }

    #[test]
    fn test_empty_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let entries = Scanner::new(dir.path().to_path_buf()).scan().unwrap();
        assert_eq!(entries, vec![DirectoryEntry::new(dir.path().to_path_buf())]);
    }

    #[test]
    fn test_scan_nonexistent_path() {
        let err = Scanner::new(PathBuf::from("/nonexistent/path/12345"))
            .scan()
            .unwrap_err();
        assert!(matches!(err, ScanError::NotFound(_)));
    }

    #[test]
    fn test_scan_file_as_root() {
        let dir = create_test_dir();
        let err = Scanner::new(dir.path().join("Home.md")).scan().unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_keeps_its_entry() {
        let dir = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(dir.path().join("real").join("a").join("b")).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("real"), &link).unwrap();

        let entries = Scanner::new(link.clone()).scan().unwrap();

        assert_eq!(
            paths(&entries),
            vec![link.clone(), link.join("a"), link.join("a").join("b")]
        );
        assert_eq!(entries[0].subdirectories, vec!["a"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_fails_the_scan() {
        use std::os::unix::fs::PermissionsExt;

        let dir = create_test_dir();
        let locked = dir.path().join("a");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root can read anything, so there is nothing to observe
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let result = Scanner::new(dir.path().to_path_buf()).scan();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(ScanError::Walk(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_is_not_entered() {
        let dir = create_test_dir();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("c").join("loop")).unwrap();
        let entries = Scanner::new(dir.path().to_path_buf()).scan().unwrap();

        assert_eq!(entries.len(), 4);
        let c = entries
            .iter()
            .find(|e| e.path == dir.path().join("c"))
            .unwrap();
        assert_eq!(c.subdirectories, vec!["loop"]);
        assert!(!paths(&entries).iter().any(|p| p.ends_with(Path::new("loop"))));
    }
}
