//! Roster file parsing

use crate::error::{MatbojError, Result};
use std::path::Path;
use tracing::info;

/// Split roster text into names, one per line, trimmed; blank lines are skipped
pub fn parse_roster(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a roster file
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| MatbojError::Persistence {
        message: format!("Failed to read roster {}: {}", path.display(), e),
    })?;

    let names = parse_roster(&contents);
    info!("Read {} names from roster {}", names.len(), path.display());
    Ok(names)
}
