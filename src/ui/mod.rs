//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for colored TTY output
//! - [`NonInteractiveUI`] for pipes and scripts
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use cd_recent::recent::RecentEntry;
//! use cd_recent::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.directory(&RecentEntry { path: "/srv".into(), valid: false });
//! ui.success("Recent directories reset");
//!
//! assert_eq!(ui.directories()[0].path, "/srv");
//! assert!(ui.has_success("reset"));
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::EntryStatus;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CdRecentTheme};

use crate::recent::RecentEntry;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display a hint suggesting the next action.
    fn hint(&mut self, hint: &str);

    /// Display one listed directory with its validity marker.
    fn directory(&mut self, entry: &RecentEntry);

    /// Write machine-readable output (JSON, scripts). Never suppressed.
    fn data(&mut self, data: &str);
}
