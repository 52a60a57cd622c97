//! Recursive file enumeration under the configured root.
//!
//! One walk per invocation, no caching. Permission-denied errors on
//! individual entries are skipped so a single unreadable directory does not
//! abort the whole scan; any other walk error is fatal. Symlinks are not
//! followed, which also bounds traversal against link cycles.

use crate::error::{Result, SnagError};
use globset::GlobSet;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

/// A single file discovered during enumeration.
///
/// `path` is root-relative with no leading separator. Duplicate names across
/// directories are allowed and distinguished only by `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// The file's base name, searched by the picker.
    pub name: String,
    /// The file's path relative to the configured root.
    pub path: String,
}

/// Recursively enumerate every file under `root`.
///
/// Directories are never recorded. Entries whose root-relative path matches
/// `excludes` are dropped. Results are sorted lexicographically by relative
/// path so output is deterministic regardless of filesystem order.
pub fn enumerate(root: &Path, excludes: &GlobSet) -> Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            // Ignore permission denied when iterating over files and folders
            Err(err) if is_permission_denied(&err) => continue,
            Err(err) => {
                return Err(SnagError::Enumeration(format!(
                    "error while walking '{}': {}",
                    root.display(),
                    err
                )));
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let path = relative
            .to_string_lossy()
            .trim_start_matches(std::path::MAIN_SEPARATOR)
            .to_string();
        // Root pointing directly at a file leaves an empty relative path
        let path = if path.is_empty() { name.clone() } else { path };

        if excludes.is_match(&path) {
            continue;
        }

        files.push(FileEntry { name, path });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|io| io.kind() == ErrorKind::PermissionDenied)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globset::GlobSetBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn no_excludes() -> GlobSet {
        GlobSetBuilder::new().build().unwrap()
    }

    fn excludes(patterns: &[&str]) -> GlobSet {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(globset::Glob::new(pattern).unwrap());
        }
        builder.build().unwrap()
    }

    fn paths(files: &[FileEntry]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn enumerates_files_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a/b.txt"), "x").unwrap();
        fs::write(dir.path().join("c.txt"), "y").unwrap();

        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        assert_eq!(paths(&files), vec!["a/b.txt", "c.txt"]);
        assert_eq!(files[0].name, "b.txt");
        assert_eq!(files[1].name, "c.txt");
    }

    #[test]
    fn directories_are_never_recorded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();
        fs::write(dir.path().join("a/b/c/deep.txt"), "x").unwrap();

        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        assert_eq!(paths(&files), vec!["a/b/c/deep.txt"]);
    }

    #[test]
    fn paths_are_root_relative_without_leading_separator() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/file.bin"), "x").unwrap();

        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        let root = dir.path().to_string_lossy();
        for file in &files {
            assert!(!file.path.starts_with(std::path::MAIN_SEPARATOR));
            assert!(!file.path.contains(root.as_ref()));
        }
    }

    #[test]
    fn empty_root_yields_empty_list() {
        let dir = TempDir::new().unwrap();
        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let err = enumerate(Path::new("/nonexistent/root"), &no_excludes()).unwrap_err();
        assert!(matches!(err, SnagError::Enumeration(_)));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("a/same.txt"), "1").unwrap();
        fs::write(dir.path().join("b/same.txt"), "2").unwrap();

        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        assert_eq!(paths(&files), vec!["a/same.txt", "b/same.txt"]);
        assert_eq!(files[0].name, files[1].name);
    }

    #[test]
    fn excluded_paths_are_dropped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("logs")).unwrap();
        fs::write(dir.path().join("logs/debug.log"), "x").unwrap();
        fs::write(dir.path().join("keep.txt"), "y").unwrap();

        let files = enumerate(dir.path(), &excludes(&["*.log", "logs/**"])).unwrap();
        assert_eq!(paths(&files), vec!["keep.txt"]);
    }

    #[test]
    fn results_are_sorted_by_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("z.txt"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("m.txt"), "x").unwrap();

        let files = enumerate(dir.path(), &no_excludes()).unwrap();
        assert_eq!(paths(&files), vec!["a.txt", "m.txt", "z.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn permission_denied_entries_are_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("locked")).unwrap();
        fs::write(dir.path().join("locked/hidden.txt"), "x").unwrap();
        fs::write(dir.path().join("visible.txt"), "y").unwrap();

        fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o000))
            .unwrap();

        // Root bypasses permission bits; the denial cannot be simulated then.
        let denied = fs::read_dir(dir.path().join("locked")).is_err();

        let result = enumerate(dir.path(), &no_excludes());

        // Restore so TempDir cleanup can remove the tree
        fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o755))
            .unwrap();

        let files = result.unwrap();
        if denied {
            assert_eq!(paths(&files), vec!["visible.txt"]);
        } else {
            assert_eq!(paths(&files), vec!["locked/hidden.txt", "visible.txt"]);
        }
    }
}
