//! Setting the default listing limit.

use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The default limit command implementation.
pub struct DefaultLimitCommand {
    store: ConfigStore,
    value: String,
}

impl DefaultLimitCommand {
    /// Create a new default limit command from the raw flag value.
    pub fn new(store: &ConfigStore, value: &str) -> Self {
        Self {
            store: store.clone(),
            value: value.to_string(),
        }
    }
}

impl Command for DefaultLimitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut config = self.store.load()?;
        let limit = config.set_default_limit(&self.value)?;
        self.store.save(&config)?;

        ui.success(&format!("Default limit set to {}", limit));
        Ok(CommandResult::success())
    }
}
