//! Recently visited directories.
//!
//! This module provides the bounded visit list stored in the configuration,
//! the entries produced when listing it, and retroactive ingestion of shell
//! history files.

pub mod list;
pub mod scan;

pub use list::{RecentDirectories, RecentEntry, CAPACITY};
pub use scan::{cd_target, parse_history, scan_history_file};

use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Check whether a recorded directory still exists on disk.
pub fn path_exists(path: &str) -> bool {
    !path.is_empty() && expand_home(path).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn expand_home_replaces_leading_tilde() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_home("~/projects"), home.join("projects"));
    }

    #[test]
    fn expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/usr/lib"), PathBuf::from("/usr/lib"));
    }

    #[test]
    fn path_exists_for_real_directory() {
        let temp = TempDir::new().unwrap();
        assert!(path_exists(temp.path().to_str().unwrap()));
    }

    #[test]
    fn path_exists_false_for_missing_or_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone");
        assert!(!path_exists(missing.to_str().unwrap()));
        assert!(!path_exists(""));
    }
}
