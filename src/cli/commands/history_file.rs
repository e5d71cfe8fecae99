//! Setting the history file.
//!
//! `cd-recent -H <path>` stores the shell history file scanned in
//! retroactive mode.

use std::path::{Path, PathBuf};

use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The history file command implementation.
pub struct HistoryFileCommand {
    store: ConfigStore,
    path: PathBuf,
}

impl HistoryFileCommand {
    /// Create a new history file command.
    pub fn new(store: &ConfigStore, path: &Path) -> Self {
        Self {
            store: store.clone(),
            path: path.to_path_buf(),
        }
    }
}

impl Command for HistoryFileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.store.load()?;
        config.set_history_file(&self.path)?;
        self.store.save(&config)?;

        tracing::info!("History file set to {:?}", self.path);
        ui.success(&format!("{} saved!", self.path.display()));
        Ok(CommandResult::success())
    }
}
