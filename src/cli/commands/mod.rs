//! CLI command implementations.
//!
//! Each action implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Actions are flags rather than subcommands. [`CommandDispatcher`] turns
//! the parsed flags into commands and runs them in a fixed order, stopping
//! at the first one that halts.

pub mod add;
pub mod completions;
pub mod default_limit;
pub mod dispatcher;
pub mod history_file;
pub mod init;
pub mod list;
pub mod reset;
pub mod toggle;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use list::ListArgs;
