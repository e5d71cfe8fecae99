//! Retroactive ingestion of shell history files.
//!
//! Lines are matched on the literal substring `cd `; the text after its last
//! occurrence is taken as the directory. Quoting and escaping are not
//! interpreted.

use std::fs;
use std::path::Path;

use crate::error::{CdRecentError, Result};

use super::RecentDirectories;

const CD_MARKER: &str = "cd ";

/// Directory named by the last `cd ` on a history line, if any.
pub fn cd_target(line: &str) -> Option<&str> {
    line.rfind(CD_MARKER)
        .map(|index| &line[index + CD_MARKER.len()..])
}

/// Collect `cd` targets from history text in file order.
///
/// Every qualifying line is kept; the stored-visit capacity does not apply.
pub fn parse_history(content: &str) -> RecentDirectories {
    RecentDirectories::unbounded(content.lines().filter_map(cd_target))
}

/// Read a history file and collect its `cd` targets.
pub fn scan_history_file(path: &Path) -> Result<RecentDirectories> {
    if !path.exists() {
        return Err(CdRecentError::HistoryFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let visits = parse_history(&String::from_utf8_lossy(&bytes));
    tracing::debug!("Scanned {} cd lines from {:?}", visits.len(), path);
    Ok(visits)
}
