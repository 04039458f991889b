use crate::config::default_tick_period_ms;

use serde::{Deserialize, Serialize};

/// Recording timer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Milliseconds between elapsed-counter ticks.
    #[serde(default = "default_tick_period_ms")]
    pub tick_period_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: default_tick_period_ms(),
        }
    }
}
