//! Switching the tracking mode.

use crate::config::{ConfigStore, TrackingMode};
use crate::error::Result;
use crate::shell::BIN_NAME;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The toggle command implementation.
pub struct ToggleCommand {
    store: ConfigStore,
}

impl ToggleCommand {
    /// Create a new toggle command.
    pub fn new(store: &ConfigStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

impl Command for ToggleCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.store.load()?;
        let mode = config.toggle_tracking();
        self.store.save(&config)?;

        match mode {
            TrackingMode::Dynamic => {
                ui.success("Dynamic tracking enabled");
                ui.hint(&format!(
                    "Directories are recorded by the shell hook: eval \"$({} --init)\"",
                    BIN_NAME
                ));
            }
            TrackingMode::Retroactive => {
                ui.success("Retroactive tracking enabled");
                if config.history_file().is_none() {
                    ui.hint(&format!(
                        "Set the history file to scan: {} -H <history-file-path>",
                        BIN_NAME
                    ));
                }
            }
        }
        Ok(CommandResult::success())
    }
}
