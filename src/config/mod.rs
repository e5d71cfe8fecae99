//! Persisted configuration and the operations on it.
//!
//! A [`Configuration`] is loaded from a [`ConfigStore`], changed through one
//! of its operations, and saved back in full. Operations never touch process
//! state; they return [`Result`] and leave reporting to the caller.

pub mod store;

pub use store::ConfigStore;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::error::{CdRecentError, Result};
use crate::recent::{expand_home, scan_history_file, RecentDirectories, RecentEntry};

/// Number of entries listed when no default has been set.
pub const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// How visits reach the recent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// A shell hook calls `--add` on every directory change.
    Dynamic,
    /// The history file is scanned for `cd` lines on every listing.
    Retroactive,
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamic => write!(f, "dynamic"),
            Self::Retroactive => write!(f, "retroactive"),
        }
    }
}

/// The persisted configuration record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Shell history file; empty means unset.
    #[serde(default)]
    pub history_file_path: String,

    /// Entries listed when no `--limit` is given.
    #[serde(default = "default_limit")]
    pub default_limit: NonZeroUsize,

    /// Dynamic tracking when true, retroactive otherwise.
    #[serde(default)]
    pub dynamic_tracking: bool,

    /// Visits recorded by the shell hook.
    #[serde(default)]
    pub recently_visited_directories: RecentDirectories,
}

fn default_limit() -> NonZeroUsize {
    DEFAULT_LIMIT
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            history_file_path: String::new(),
            default_limit: DEFAULT_LIMIT,
            dynamic_tracking: false,
            recently_visited_directories: RecentDirectories::new(),
        }
    }
}

/// Parse a positive count given on the command line.
///
/// `flag` names the value in the error message.
pub fn parse_limit(flag: &'static str, value: &str) -> Result<NonZeroUsize> {
    value
        .trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| CdRecentError::InvalidNumber {
            flag,
            value: value.to_string(),
        })
}

impl Configuration {
    /// Current tracking mode.
    pub fn tracking_mode(&self) -> TrackingMode {
        if self.dynamic_tracking {
            TrackingMode::Dynamic
        } else {
            TrackingMode::Retroactive
        }
    }

    /// Configured history file with `~` expanded, if set.
    pub fn history_file(&self) -> Option<PathBuf> {
        if self.history_file_path.is_empty() {
            None
        } else {
            Some(expand_home(&self.history_file_path))
        }
    }

    /// Set the history file after checking it exists.
    ///
    /// The configuration is unchanged on error.
    pub fn set_history_file(&mut self, path: &Path) -> Result<()> {
        let exists = match path.to_str() {
            Some(raw) if raw.starts_with('~') => expand_home(raw).exists(),
            _ => path.exists(),
        };
        if !exists {
            return Err(CdRecentError::HistoryFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let raw = path.to_str().ok_or_else(|| CdRecentError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        self.history_file_path = raw.to_string();
        Ok(())
    }

    /// Parse and set the default listing limit.
    ///
    /// The configuration is unchanged on error.
    pub fn set_default_limit(&mut self, value: &str) -> Result<NonZeroUsize> {
        let limit = parse_limit("Default limit", value)?;
        self.default_limit = limit;
        Ok(limit)
    }

    /// Flip between dynamic and retroactive tracking, returning the new mode.
    pub fn toggle_tracking(&mut self) -> TrackingMode {
        self.dynamic_tracking = !self.dynamic_tracking;
        self.tracking_mode()
    }

    /// Record a visit, returning the evicted oldest visit if the list was full.
    pub fn add_visit(&mut self, path: impl Into<String>) -> Option<String> {
        self.recently_visited_directories.push(path)
    }

    /// Forget every recorded visit.
    pub fn reset(&mut self) {
        self.recently_visited_directories.clear();
    }

    /// The list a listing is built from.
    ///
    /// Dynamic mode borrows the stored visits. Retroactive mode rebuilds the
    /// list from the history file; the result is not stored.
    pub fn working_list(&self) -> Result<Cow<'_, RecentDirectories>> {
        match self.tracking_mode() {
            TrackingMode::Dynamic => Ok(Cow::Borrowed(&self.recently_visited_directories)),
            TrackingMode::Retroactive => {
                let path = self.history_file().ok_or(CdRecentError::HistoryFileUnset)?;
                Ok(Cow::Owned(scan_history_file(&path)?))
            }
        }
    }

    /// Most recent directories first, up to `limit` or the default limit.
    pub fn recent(&self, limit: Option<NonZeroUsize>) -> Result<Vec<RecentEntry>> {
        let limit = limit.unwrap_or(self.default_limit);
        Ok(self.working_list()?.recent(limit.get()))
    }
}
