use crate::config::default_playback_category;

use serde::{Deserialize, Serialize};

/// Playback engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Category tag passed to the engine with every clip load.
    #[serde(default = "default_playback_category")]
    pub category: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            category: default_playback_category(),
        }
    }
}
