//! Local filesystem provider

use std::fs;
use std::path::Path;

use super::{Namespace, PaneProvider, ProviderError, ProviderResult};

/// Synthetic pseudo-path whose listing is the host's filesystem roots.
/// A leaf state with no parent; its children are the roots themselves.
pub const DRIVE_LIST: &str = "::DRIVES";

/// Provider for local filesystem operations
#[derive(Debug, Default)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }

    /// Starting directory for the local pane.
    pub fn home_path() -> String {
        #[cfg(unix)]
        {
            std::env::var("HOME").unwrap_or_else(|_| "/".to_string())
        }
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\".to_string())
        }
        #[cfg(not(any(unix, windows)))]
        {
            "/".to_string()
        }
    }

    /// Enumerate the host's filesystem roots.
    fn list_roots() -> Vec<String> {
        #[cfg(windows)]
        {
            let mut drives = Vec::new();
            for letter in b'A'..=b'Z' {
                let drive = format!("{}:\\", letter as char);
                if fs::read_dir(&drive).is_ok() {
                    drives.push(drive);
                }
            }
            drives
        }
        #[cfg(not(windows))]
        {
            vec!["/".to_string()]
        }
    }
}

impl PaneProvider for LocalProvider {
    fn namespace(&self) -> Namespace {
        Namespace::Local
    }

    fn read_entries(&mut self, path: &str) -> ProviderResult<Vec<String>> {
        if path == DRIVE_LIST {
            return Ok(Self::list_roots());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // Host iteration order, deliberately not re-sorted.
        Ok(names)
    }

    fn is_directory(&mut self, path: &str) -> bool {
        // is_dir already collapses I/O failures to false.
        path != DRIVE_LIST && Path::new(path).is_dir()
    }

    fn delete_file(&mut self, path: &str) -> ProviderResult<()> {
        if !Path::new(path).is_file() {
            return Err(ProviderError::NotAFile(path.to_string()));
        }
        fs::remove_file(path).map_err(ProviderError::from)
    }

    fn is_root(&self, path: &str) -> bool {
        path == DRIVE_LIST || Path::new(path).parent().is_none()
    }

    fn parent_path(&self, path: &str) -> Option<String> {
        if path == DRIVE_LIST {
            return None;
        }
        match Path::new(path).parent() {
            Some(parent) => Some(parent.to_string_lossy().into_owned()),
            // No parent but not the drive list yet: go to the root listing.
            None => Some(DRIVE_LIST.to_string()),
        }
    }

    fn join_path(&self, base: &str, name: &str) -> String {
        if base == DRIVE_LIST {
            // Root entries are already absolute paths.
            return name.to_string();
        }
        Path::new(base).join(name).to_string_lossy().into_owned()
    }

    fn skip_directory_probe(&self, target: &str) -> bool {
        // The drive list is not a real directory; entering it is trusted.
        target == DRIVE_LIST
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn lists_directory_children() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut p = LocalProvider::new();
        let mut entries = p.read_entries(&dir.path().to_string_lossy()).unwrap();
        entries.sort();
        assert_eq!(entries, vec!["a.txt", "sub"]);
    }

    #[test]
    fn decorated_listing_of_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = LocalProvider::new();
        let items = p.list(&dir.path().to_string_lossy());
        assert_eq!(items, vec!["..", "(empty)"]);
    }

    #[test]
    fn listing_failure_collapses_to_error_entry() {
        let mut p = LocalProvider::new();
        let items = p.list("/definitely/not/a/real/path");
        assert_eq!(items, vec!["(error)"]);
    }

    #[test]
    fn delete_removes_files_only() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("doomed.txt");
        File::create(&file).unwrap();
        let sub = dir.path().join("keep");
        fs::create_dir(&sub).unwrap();

        let mut p = LocalProvider::new();
        p.delete_file(&file.to_string_lossy()).unwrap();
        assert!(!file.exists());

        let err = p.delete_file(&sub.to_string_lossy()).unwrap_err();
        assert!(matches!(err, ProviderError::NotAFile(_)));
        assert!(sub.exists());
    }

    #[test]
    fn directory_probe() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = LocalProvider::new();
        assert!(p.is_directory(&dir.path().to_string_lossy()));
        assert!(!p.is_directory("/definitely/not/a/real/path"));
        assert!(!p.is_directory(DRIVE_LIST));
    }

    #[test]
    fn drive_list_is_a_parentless_root() {
        let p = LocalProvider::new();
        assert!(p.is_root(DRIVE_LIST));
        assert_eq!(p.parent_path(DRIVE_LIST), None);
        assert!(p.skip_directory_probe(DRIVE_LIST));
        assert!(!p.skip_directory_probe("/tmp"));
    }

    #[test]
    fn root_entries_join_as_themselves() {
        let p = LocalProvider::new();
        assert_eq!(p.join_path(DRIVE_LIST, "/"), "/");
    }

    #[cfg(unix)]
    #[test]
    fn parent_of_filesystem_root_is_the_drive_list() {
        let p = LocalProvider::new();
        assert!(p.is_root("/"));
        assert_eq!(p.parent_path("/"), Some(DRIVE_LIST.to_string()));
        assert_eq!(p.parent_path("/home/u"), Some("/home".to_string()));
    }
}
