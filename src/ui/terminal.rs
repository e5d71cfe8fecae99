//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::recent::RecentEntry;

use super::{
    should_use_colors, CdRecentTheme, EntryStatus, NonInteractiveUI, OutputMode, UserInterface,
};

/// Terminal UI implementation with colors and icons.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: CdRecentTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CdRecentTheme::new()
        } else {
            CdRecentTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, hint: &str) {
        writeln!(self.err_term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn directory(&mut self, entry: &RecentEntry) {
        let line = EntryStatus::from(entry).format(&self.theme, &entry.path);
        writeln!(self.term, "{}", line).ok();
    }

    fn data(&mut self, data: &str) {
        writeln!(self.term, "{}", data.trim_end()).ok();
    }
}

/// Create the UI matching the output target.
///
/// A terminal gets [`TerminalUI`]; pipes and redirects get
/// [`NonInteractiveUI`].
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
