//! Validity markers for listed directories.
//!
//! `EntryStatus` gives one icon and one bracketed label per state so the
//! terminal and plain renderers agree.

use super::theme::CdRecentTheme;
use crate::recent::RecentEntry;

/// Whether a listed directory still exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    /// The path exists.
    Valid,
    /// The path is gone.
    Invalid,
}

impl EntryStatus {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Valid => "✓",
            Self::Invalid => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Valid => "[ok]",
            Self::Invalid => "[missing]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CdRecentTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Valid => theme.success.apply_to(icon).to_string(),
            Self::Invalid => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a directory line: styled icon + styled path.
    pub fn format(self, theme: &CdRecentTheme, path: &str) -> String {
        match self {
            Self::Valid => format!("{} {}", self.styled(theme), theme.path.apply_to(path)),
            Self::Invalid => format!(
                "{} {} {}",
                self.styled(theme),
                theme.dim.apply_to(path),
                theme.dim.apply_to("(missing)")
            ),
        }
    }

    /// Format a directory line for non-TTY: bracketed + path.
    pub fn format_plain(self, path: &str) -> String {
        format!("{} {}", self.bracketed(), path)
    }
}

impl From<&RecentEntry> for EntryStatus {
    fn from(entry: &RecentEntry) -> Self {
        if entry.valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}
