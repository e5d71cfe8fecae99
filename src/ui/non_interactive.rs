//! Plain UI for pipes, redirects and scripts.

use crate::recent::RecentEntry;

use super::{EntryStatus, OutputMode, UserInterface};

/// UI implementation without colors or unicode icons on listed entries.
///
/// Listings go to stdout with bracketed markers; warnings, errors and
/// hints go to stderr so they never mix with listed paths.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn hint(&mut self, hint: &str) {
        eprintln!("  {}", hint);
    }

    fn directory(&mut self, entry: &RecentEntry) {
        println!("{}", EntryStatus::from(entry).format_plain(&entry.path));
    }

    fn data(&mut self, data: &str) {
        println!("{}", data.trim_end());
    }
}
