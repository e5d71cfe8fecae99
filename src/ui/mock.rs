//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use cd_recent::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("No recent directories");
//! ui.warning("Limit must be a positive number but was x");
//!
//! assert!(ui.has_message("No recent directories"));
//! assert!(ui.has_warning("positive number"));
//! ```

use crate::recent::RecentEntry;

use super::UserInterface;

/// Mock UI implementation for testing.
///
/// Captures every call, including status output a quiet UI would drop.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    directories: Vec<RecentEntry>,
    data: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all listed directories in display order.
    pub fn directories(&self) -> &[RecentEntry] {
        &self.directories
    }

    /// Get all captured machine-readable output.
    pub fn data_output(&self) -> &[String] {
        &self.data
    }

    /// Paths of listed directories in display order.
    pub fn listed_paths(&self) -> Vec<&str> {
        self.directories.iter().map(|e| e.path.as_str()).collect()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Whether nothing at all was shown.
    pub fn is_silent(&self) -> bool {
        self.messages.is_empty()
            && self.successes.is_empty()
            && self.warnings.is_empty()
            && self.errors.is_empty()
            && self.hints.is_empty()
            && self.directories.is_empty()
            && self.data.is_empty()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn directory(&mut self, entry: &RecentEntry) {
        self.directories.push(entry.clone());
    }

    fn data(&mut self, data: &str) {
        self.data.push(data.to_string());
    }
}
