//! Bounded list of visited directories.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::path_exists;

/// Maximum number of directories kept in the list.
pub const CAPACITY: usize = 1000;

/// Visited directories in visit order, oldest at the head.
///
/// Pushing onto a full list evicts the oldest entry first, so a list built
/// by [`push`](Self::push) never exceeds [`CAPACITY`]. Snapshots built with
/// [`unbounded`](Self::unbounded) keep every entry. Duplicates are kept;
/// paths are opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VecDeque<String>", into = "VecDeque<String>")]
pub struct RecentDirectories {
    dirs: VecDeque<String>,
}

/// A directory selected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentEntry {
    /// Path as recorded.
    pub path: String,
    /// Whether the path exists right now.
    pub valid: bool,
}

impl RecentEntry {
    /// Build an entry, checking the path against the filesystem.
    pub fn check(path: &str) -> Self {
        Self {
            path: path.to_string(),
            valid: path_exists(path),
        }
    }
}

impl RecentDirectories {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list holding every visit in order, without the capacity cap.
    ///
    /// For snapshots that are listed but never stored.
    pub fn unbounded<S: Into<String>>(visits: impl IntoIterator<Item = S>) -> Self {
        Self {
            dirs: visits.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of recorded visits.
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether no visits are recorded.
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Append a visit, returning the evicted oldest entry if the list was full.
    pub fn push(&mut self, path: impl Into<String>) -> Option<String> {
        let evicted = if self.dirs.len() >= CAPACITY {
            self.dirs.pop_front()
        } else {
            None
        };
        self.dirs.push_back(path.into());
        evicted
    }

    /// Remove every visit.
    pub fn clear(&mut self) {
        self.dirs.clear();
    }

    /// Visits from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Up to `limit` visits, most recent first.
    pub fn most_recent(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.dirs.iter().rev().take(limit).map(String::as_str)
    }

    /// Up to `limit` entries, most recent first, each checked for existence.
    pub fn recent(&self, limit: usize) -> Vec<RecentEntry> {
        self.most_recent(limit).map(RecentEntry::check).collect()
    }
}

impl From<VecDeque<String>> for RecentDirectories {
    fn from(mut dirs: VecDeque<String>) -> Self {
        if dirs.len() > CAPACITY {
            let excess = dirs.len() - CAPACITY;
            tracing::warn!("Dropping {} oldest directories over capacity", excess);
            dirs.drain(..excess);
        }
        Self { dirs }
    }
}

impl From<RecentDirectories> for VecDeque<String> {
    fn from(list: RecentDirectories) -> Self {
        list.dirs
    }
}

impl<S: Into<String>> FromIterator<S> for RecentDirectories {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for path in iter {
            list.push(path);
        }
        list
    }
}
