//! Shell hook output.
//!
//! `cd-recent --init [shell]` prints the hook that feeds dynamic tracking.
//! Typical use: `eval "$(cd-recent --init bash)"` in the shell's rc file.

use crate::error::Result;
use crate::shell::{hook_script, ShellType};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    shell: ShellType,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.data(&hook_script(self.shell));
        Ok(CommandResult::success())
    }
}
