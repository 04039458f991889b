use serde::{Deserialize, Serialize};
use voicechat_core::CaptureConfig;

/// Capture device configuration, handed to the device at mount.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureSection {
    /// Selected input device name (None = default device).
    #[serde(default)]
    pub selected_device: Option<String>,

    /// Preferred sample rate in Hz (None = device default).
    #[serde(default)]
    pub sample_rate: Option<u32>,

    /// Preferred channel count (None = device default).
    #[serde(default)]
    pub channels: Option<u16>,
}

impl From<&CaptureSection> for CaptureConfig {
    fn from(section: &CaptureSection) -> Self {
        CaptureConfig {
            selected_device: section.selected_device.clone(),
            sample_rate: section.sample_rate,
            channels: section.channels,
        }
    }
}
