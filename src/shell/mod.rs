//! Shell integration.
//!
//! Dynamic tracking relies on a hook that runs `cd-recent --add "$PWD"`
//! after every directory change. This module renders that hook per shell.

pub mod hook;

pub use hook::{hook_script, ShellType, BIN_NAME};
