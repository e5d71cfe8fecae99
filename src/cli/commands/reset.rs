//! Clearing recorded visits.

use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The reset command implementation.
pub struct ResetCommand {
    store: ConfigStore,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(store: &ConfigStore) -> Self {
        Self {
            store: store.clone(),
        }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.store.load()?;
        let cleared = config.recently_visited_directories.len();
        config.reset();
        self.store.save(&config)?;

        tracing::debug!("Cleared {} visits", cleared);
        ui.success("Recent directories reset");
        Ok(CommandResult::success())
    }
}
