//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Every action is a flag;
//! [`CommandDispatcher`](super::CommandDispatcher) decides the order they
//! run in.

use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use crate::shell::ShellType;

/// List recently visited directories.
///
/// Without flags, prints the most recently visited directories, newest first.
#[derive(Debug, Parser)]
#[command(name = "cd-recent")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Full path to the shell history file (retroactive tracking)
    #[arg(short = 'H', long = "historyFile", value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Number of recent directories to list this time
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub limit: Option<String>,

    /// Set the default number of recent directories to list
    #[arg(
        short = 'd',
        long = "defaultLimit",
        value_name = "N",
        allow_hyphen_values = true
    )]
    pub default_limit: Option<String>,

    /// Switch between dynamic and retroactive tracking
    #[arg(short, long)]
    pub toggle: bool,

    /// Record a visit to a directory (called by the shell hook)
    #[arg(short, long, value_name = "PATH")]
    pub add: Option<String>,

    /// Forget all recorded directories
    #[arg(short, long)]
    pub reset: bool,

    /// Path to config file (overrides the default location)
    #[arg(short, long, env = "CD_RECENT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print listed directories, warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print the shell hook for dynamic tracking (detects the shell if omitted)
    #[arg(long, value_name = "SHELL", value_enum, num_args = 0..=1)]
    pub init: Option<Option<ShellType>>,

    /// Print shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Whether any flag that changes the configuration was given.
    ///
    /// When none was, the invocation lists directories.
    pub fn mutates(&self) -> bool {
        self.history_file.is_some()
            || self.default_limit.is_some()
            || self.toggle
            || self.add.is_some()
            || self.reset
    }
}
