use crate::config::default_newest_first;

use serde::{Deserialize, Serialize};

/// Timeline rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render the newest message first.
    #[serde(default = "default_newest_first")]
    pub newest_first: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            newest_first: default_newest_first(),
        }
    }
}
