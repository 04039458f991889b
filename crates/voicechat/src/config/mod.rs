mod capture_config;
#[allow(clippy::module_inception)]
mod config;
mod display_config;
mod playback_config;
mod timer_config;

pub(crate) use {
    capture_config::CaptureSection, config::Config, display_config::DisplayConfig,
    playback_config::PlaybackConfig, timer_config::TimerConfig,
};

pub(crate) const DEFAULT_PLAYBACK_CATEGORY: &str = "voice";
pub(crate) const DEFAULT_TICK_PERIOD_MS: u64 = 1000;
pub(crate) const DEFAULT_NEWEST_FIRST: bool = true;

pub(crate) fn default_playback_category() -> String {
    DEFAULT_PLAYBACK_CATEGORY.to_string()
}

pub(crate) fn default_tick_period_ms() -> u64 {
    DEFAULT_TICK_PERIOD_MS
}

pub(crate) fn default_newest_first() -> bool {
    DEFAULT_NEWEST_FIRST
}
