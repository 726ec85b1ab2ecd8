//! Pane providers for the two filesystem namespaces.
//!
//! A pane is bound to exactly one [`Namespace`] for its lifetime: `Local`
//! (direct `std::fs` calls) or `Remote` (commands over the bridge shell
//! channel).  Providers expose path arithmetic and the raw operations; the
//! `".."` / `"(empty)"` / `"(error)"` decoration of listings is shared
//! post-processing, identical for both variants.

mod local;
mod remote;

pub use local::{DRIVE_LIST, LocalProvider};
pub use remote::RemoteProvider;

use thiserror::Error;

use crate::channel::ChannelError;

/// Synthetic entry meaning "navigate to parent".
pub const PARENT_ENTRY: &str = "..";
/// Synthetic entry meaning "listing succeeded with zero real entries".
pub const EMPTY_ENTRY: &str = "(empty)";
/// Synthetic entry meaning "listing failed".
pub const ERROR_ENTRY: &str = "(error)";

/// True for display entries that are never navigable, deletable or copyable.
pub fn is_synthetic(item: &str) -> bool {
    matches!(item, PARENT_ENTRY | EMPTY_ENTRY | ERROR_ENTRY)
}

/// Which filesystem a provider addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Remote,
    Local,
}

/// Error type for provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Remote command failed: {0}")]
    RemoteCommand(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Trait for pane filesystem providers.
///
/// All paths are provider-owned strings: POSIX absolute paths for the
/// remote namespace, platform-native paths (plus the `::DRIVES` pseudo-path)
/// for the local one.
pub trait PaneProvider {
    /// Which namespace this provider addresses.
    fn namespace(&self) -> Namespace;

    /// Raw directory listing, in the order the backend emits it.
    /// No synthetic entries, no re-sorting.
    fn read_entries(&mut self, path: &str) -> ProviderResult<Vec<String>>;

    /// Is the path a directory?  Unknown or unreachable paths are not
    /// navigable, so failures collapse to `false`.
    fn is_directory(&mut self, path: &str) -> bool;

    /// Delete a file.  Directories are refused; there is no recursive
    /// delete in either namespace.
    fn delete_file(&mut self, path: &str) -> ProviderResult<()>;

    /// Is the path a top-of-namespace root (no parent to navigate to)?
    fn is_root(&self, path: &str) -> bool;

    /// Resolve the parent for a `".."` navigation.  `None` means "stay".
    fn parent_path(&self, path: &str) -> Option<String>;

    /// Join a listing entry onto a base path.
    fn join_path(&self, base: &str, name: &str) -> String;

    /// May this navigation target be entered without an `is_directory`
    /// probe?  Only the local drive-list pseudo-path is trusted; it is not
    /// a real directory the backend could test.
    fn skip_directory_probe(&self, _target: &str) -> bool {
        false
    }

    /// Release any backend resources.  No-op for local.
    fn disconnect(&mut self) {}

    /// Decorated listing for display: a `".."` entry is prepended unless
    /// the path is a root, an empty listing is marked `"(empty)"`, and a
    /// failed listing is exactly `["(error)"]`.  Listing failure is
    /// non-fatal by design.
    fn list(&mut self, path: &str) -> Vec<String> {
        match self.read_entries(path) {
            Ok(mut entries) => {
                let no_real_entries = entries.is_empty();
                if !self.is_root(path) {
                    entries.insert(0, PARENT_ENTRY.to_string());
                }
                if no_real_entries {
                    entries.push(EMPTY_ENTRY.to_string());
                }
                entries
            }
            Err(_) => vec![ERROR_ENTRY.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub {
        entries: Option<Vec<String>>,
        root: bool,
    }

    impl PaneProvider for Stub {
        fn namespace(&self) -> Namespace {
            Namespace::Local
        }

        fn read_entries(&mut self, _path: &str) -> ProviderResult<Vec<String>> {
            match &self.entries {
                Some(v) => Ok(v.clone()),
                None => Err(ProviderError::NotAFile("stub".into())),
            }
        }

        fn is_directory(&mut self, _path: &str) -> bool {
            true
        }

        fn delete_file(&mut self, _path: &str) -> ProviderResult<()> {
            Ok(())
        }

        fn is_root(&self, _path: &str) -> bool {
            self.root
        }

        fn parent_path(&self, _path: &str) -> Option<String> {
            None
        }

        fn join_path(&self, base: &str, name: &str) -> String {
            format!("{}/{}", base, name)
        }
    }

    #[test]
    fn non_root_listing_gets_parent_entry_first() {
        let mut p = Stub { entries: Some(vec!["b".into(), "a".into()]), root: false };
        // Backend order is preserved, never re-sorted.
        assert_eq!(p.list("/x"), vec!["..", "b", "a"]);
    }

    #[test]
    fn root_listing_has_no_parent_entry() {
        let mut p = Stub { entries: Some(vec!["a".into()]), root: true };
        assert_eq!(p.list("/"), vec!["a"]);
    }

    #[test]
    fn empty_non_root_directory_lists_parent_then_empty() {
        let mut p = Stub { entries: Some(vec![]), root: false };
        assert_eq!(p.list("/x"), vec!["..", "(empty)"]);
    }

    #[test]
    fn empty_root_directory_lists_only_empty() {
        let mut p = Stub { entries: Some(vec![]), root: true };
        assert_eq!(p.list("/"), vec!["(empty)"]);
    }

    #[test]
    fn failed_listing_is_exactly_one_error_entry() {
        let mut p = Stub { entries: None, root: false };
        assert_eq!(p.list("/x"), vec!["(error)"]);
    }

    #[test]
    fn synthetic_entry_classification() {
        assert!(is_synthetic(".."));
        assert!(is_synthetic("(empty)"));
        assert!(is_synthetic("(error)"));
        assert!(!is_synthetic("photo.jpg"));
    }
}
