//! Console output configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of columns the ranking table is split into
    pub columns: usize,
    /// Highlight errors and the prompt with ANSI colors
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            color: true,
        }
    }
}
