//! Listing recent directories.
//!
//! The default action: prints the most recently visited directories, newest
//! first, each marked by whether it still exists.

use std::num::NonZeroUsize;

use anyhow::Context;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Arguments for listing.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Override of the default limit for this invocation.
    pub limit: Option<NonZeroUsize>,

    /// Output as JSON.
    pub json: bool,
}

/// The list command implementation.
pub struct ListCommand {
    store: ConfigStore,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(store: &ConfigStore, args: ListArgs) -> Self {
        Self {
            store: store.clone(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.store.load()?;
        let entries = config.recent(self.args.limit)?;
        tracing::debug!(
            "Listing {} entries ({} tracking)",
            entries.len(),
            config.tracking_mode()
        );

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .context("Failed to serialize directory list")?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No recent directories");
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            ui.directory(entry);
        }
        Ok(CommandResult::success())
    }
}
