//! cd-recent - List recently visited directories.
//!
//! cd-recent remembers where you have been in the shell. It works in one of
//! two tracking modes: retroactive, which scans the shell history file for
//! `cd` commands on every listing, and dynamic, which records each directory
//! change reported by a shell hook.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - The persisted configuration and its store
//! - [`error`] - Error types and result aliases
//! - [`recent`] - The bounded recent-directories list and history scanning
//! - [`shell`] - Shell hook generation
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cd_recent::recent::parse_history;
//!
//! let dirs = parse_history("ls\ncd /srv/app\ncd /tmp; cd /var/log\n");
//! let listed: Vec<&str> = dirs.most_recent(10).collect();
//! assert_eq!(listed, ["/var/log", "/srv/app"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod recent;
pub mod shell;
pub mod ui;

pub use error::{CdRecentError, Result};
