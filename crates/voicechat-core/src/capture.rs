use crate::{ClipRef, CoreResult};

use std::future::Future;

/// Settings handed to the capture device once, when the surface mounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Input device name (None = default device).
    pub selected_device: Option<String>,
    /// Preferred sample rate in Hz (None = device default).
    pub sample_rate: Option<u32>,
    /// Preferred channel count (None = device default).
    pub channels: Option<u16>,
}

/// Audio capture collaborator.
///
/// `start` and `stop` may suspend. Their failure modes are opaque to the
/// recording controller beyond success or failure.
pub trait CaptureDevice {
    /// Prepare the device. Called once at surface mount.
    fn init(&mut self, config: &CaptureConfig) -> CoreResult<()>;

    /// Begin capturing. Returns the reference the clip will be stored under.
    fn start(&mut self) -> impl Future<Output = CoreResult<ClipRef>>;

    /// Finish capturing. Returns the reference of the finished clip.
    fn stop(&mut self) -> impl Future<Output = CoreResult<ClipRef>>;
}
