//! Recording a directory visit.
//!
//! Called by the shell hook on every directory change, so it prints nothing.

use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    store: ConfigStore,
    path: String,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(store: &ConfigStore, path: &str) -> Self {
        Self {
            store: store.clone(),
            path: path.to_string(),
        }
    }
}

impl Command for AddCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.store.load()?;
        if let Some(evicted) = config.add_visit(self.path.as_str()) {
            tracing::debug!("Evicted oldest visit {}", evicted);
        }
        self.store.save(&config)?;

        tracing::debug!("Recorded visit to {}", self.path);
        Ok(CommandResult::success())
    }
}
