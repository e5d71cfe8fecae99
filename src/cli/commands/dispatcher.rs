//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for running flags in precedence order

use crate::cli::args::Cli;
use crate::config::{parse_limit, ConfigStore};
use crate::error::{CdRecentError, Result};
use crate::shell::ShellType;
use crate::ui::UserInterface;

use super::add::AddCommand;
use super::completions::CompletionsCommand;
use super::default_limit::DefaultLimitCommand;
use super::history_file::HistoryFileCommand;
use super::init::InitCommand;
use super::list::{ListArgs, ListCommand};
use super::reset::ResetCommand;
use super::toggle::ToggleCommand;

/// Trait for command implementations.
///
/// Each CLI action implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating whether later flags should still run.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// A soft failure: the problem was reported, remaining flags are
    /// skipped, and the process still exits cleanly.
    pub fn halted() -> Self {
        Self::failure(0)
    }
}

/// Runs the actions requested on the command line.
///
/// The configuration is loaded first, so a first run writes the defaults
/// and a corrupt file fails before any flag is looked at. Order after that:
/// history file, limit parsing, default limit, toggle, add, reset, then
/// listing when no configuration flag was given. The first halted result
/// stops the sequence.
pub struct CommandDispatcher {
    store: ConfigStore,
}

impl CommandDispatcher {
    /// Create a new dispatcher backed by the given config store.
    pub fn new(store: ConfigStore) -> Self {
        Self { store }
    }

    /// Get the config store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Dispatch and execute the requested actions.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(shell) = cli.completions {
            return CompletionsCommand::new(shell).execute(ui);
        }
        if let Some(shell) = cli.init {
            return InitCommand::new(shell.unwrap_or_else(ShellType::detect)).execute(ui);
        }

        let config = self.store.load()?;
        tracing::debug!(
            "{} tracking, {} stored visits",
            config.tracking_mode(),
            config.recently_visited_directories.len()
        );

        if let Some(path) = &cli.history_file {
            let result = self.run(&HistoryFileCommand::new(&self.store, path), ui)?;
            if !result.success {
                return Ok(result);
            }
        }

        let limit = match cli.limit.as_deref().map(|v| parse_limit("Limit", v)) {
            Some(Err(e)) => return Ok(Self::report(&e, ui)),
            Some(Ok(limit)) => Some(limit),
            None => None,
        };

        let mut commands: Vec<Box<dyn Command>> = Vec::new();
        if let Some(value) = &cli.default_limit {
            commands.push(Box::new(DefaultLimitCommand::new(&self.store, value)));
        }
        if cli.toggle {
            commands.push(Box::new(ToggleCommand::new(&self.store)));
        }
        if let Some(path) = &cli.add {
            commands.push(Box::new(AddCommand::new(&self.store, path)));
        }
        if cli.reset {
            commands.push(Box::new(ResetCommand::new(&self.store)));
        }
        if !cli.mutates() {
            let args = ListArgs {
                limit,
                json: cli.json,
            };
            commands.push(Box::new(ListCommand::new(&self.store, args)));
        }

        for command in &commands {
            let result = self.run(command.as_ref(), ui)?;
            if !result.success {
                return Ok(result);
            }
        }

        Ok(CommandResult::success())
    }

    /// Execute one command, turning user-facing errors into a halted result.
    fn run(&self, command: &dyn Command, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match command.execute(ui) {
            Err(e) if e.is_user_facing() => Ok(Self::report(&e, ui)),
            other => other,
        }
    }

    fn report(err: &CdRecentError, ui: &mut dyn UserInterface) -> CommandResult {
        tracing::debug!("Halting: {:?}", err);
        match err {
            CdRecentError::InvalidNumber { .. } => ui.warning(&err.to_string()),
            _ => ui.error(&err.to_string()),
        }
        if let Some(hint) = err.hint() {
            ui.hint(hint);
        }
        CommandResult::halted()
    }
}
