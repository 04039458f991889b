use crate::{CaptureConfig, CaptureDevice, ChatError, ClipLibrary, ClipRef, CoreResult, RecordedClip};

use std::{
    collections::VecDeque,
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Maximum samples to buffer per clip (5 minutes at 48kHz mono).
///
/// Anything past this is dropped from the front so memory stays bounded
/// (~58MB at the cap).
pub(crate) const MAX_BUFFER_SAMPLES: usize = 48_000 * 60 * 5;

/// Capture device backed by the default (or configured) cpal input.
///
/// Finished clips are downmixed to mono and stored in the shared
/// [`ClipLibrary`] under a fresh `clip-<uuid>` reference.
///
/// A clip keeps at most five minutes of 48kHz mono samples. Past that only the
/// most recent audio survives, so the stored clip can be shorter than the
/// elapsed count of its voice message. A warning is logged once per
/// recording when trimming starts.
pub struct CpalCapture {
    library: ClipLibrary,
    device: Option<Device>,
    config: Option<StreamConfig>,
    stream: Option<Stream>,
    pending: Option<ClipRef>,
    samples: Arc<Mutex<VecDeque<f32>>>,
    /// Signals the audio callback to stop writing. Set before the stream is
    /// dropped so no in-flight callback writes after `stop()` takes the lock.
    shutdown: Arc<AtomicBool>,
    trimmed: Arc<AtomicBool>,
}

impl CpalCapture {
    /// Create an uninitialized capture device writing into `library`.
    pub fn new(library: ClipLibrary) -> Self {
        Self {
            library,
            device: None,
            config: None,
            stream: None,
            pending: None,
            samples: Arc::new(Mutex::new(VecDeque::new())),
            shutdown: Arc::new(AtomicBool::new(false)),
            trimmed: Arc::new(AtomicBool::new(false)),
        }
    }

    #[track_caller]
    fn select_device(selected: Option<&str>) -> CoreResult<Device> {
        let host = cpal::default_host();

        if let Some(name) = selected {
            let devices = host.input_devices().map_err(|e| ChatError::DeviceError {
                reason: format!("Failed to list input devices: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            #[allow(deprecated)]
            let found = devices
                .into_iter()
                .find(|d| d.name().map(|n| n == name).unwrap_or(false));

            return found.ok_or_else(|| ChatError::DeviceError {
                reason: format!("Input device not found: {}", name),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        host.default_input_device()
            .ok_or(ChatError::NoMicrophoneFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn lock_error(e: impl std::fmt::Display) -> ChatError {
        ChatError::DeviceError {
            reason: format!("Failed to lock samples: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl CaptureDevice for CpalCapture {
    #[track_caller]
    #[instrument(skip(self))]
    fn init(&mut self, config: &CaptureConfig) -> CoreResult<()> {
        let device = Self::select_device(config.selected_device.as_deref())?;

        let default_config = device
            .default_input_config()
            .map_err(|e| ChatError::DeviceError {
                reason: format!("Failed to get config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut stream_config: StreamConfig = default_config.into();
        if let Some(sample_rate) = config.sample_rate {
            stream_config.sample_rate = sample_rate;
        }
        if let Some(channels) = config.channels {
            stream_config.channels = channels.max(1);
        }

        info!(
            device_id = ?device.id(),
            sample_rate = stream_config.sample_rate,
            channels = stream_config.channels,
            "Capture device initialized"
        );

        self.device = Some(device);
        self.config = Some(stream_config);

        Ok(())
    }

    #[instrument(skip(self))]
    async fn start(&mut self) -> CoreResult<ClipRef> {
        let (Some(device), Some(config)) = (&self.device, &self.config) else {
            return Err(ChatError::DeviceError {
                reason: "Capture device not initialized".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        self.shutdown.store(false, Ordering::Release);
        self.trimmed.store(false, Ordering::Relaxed);
        self.samples.lock().map_err(Self::lock_error)?.clear();

        let samples = Arc::clone(&self.samples);
        let shutdown = Arc::clone(&self.shutdown);
        let trimmed = Arc::clone(&self.trimmed);
        let channels = usize::from(config.channels.max(1));

        let stream = device
            .build_input_stream(
                config,
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if shutdown.load(Ordering::Acquire) {
                        return;
                    }
                    let mut buf = samples.lock().unwrap_or_else(|e| {
                        error!("Sample buffer lock poisoned, recovering: {}", e);
                        e.into_inner()
                    });
                    let dropped = push_frames(&mut buf, data, channels);
                    if dropped && !trimmed.swap(true, Ordering::Relaxed) {
                        warn!(
                            max_samples = MAX_BUFFER_SAMPLES,
                            "Capture buffer full, dropping oldest audio"
                        );
                    }
                },
                |err| {
                    error!("Audio input stream error: {}", err);
                },
                None,
            )
            .map_err(|e| ChatError::DeviceError {
                reason: format!("Failed to build stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| ChatError::DeviceError {
            reason: format!("Failed to start stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let clip = ClipRef::new(format!("clip-{}", Uuid::new_v4()));
        self.stream = Some(stream);
        self.pending = Some(clip.clone());

        info!(clip = %clip, "Audio capture started");

        Ok(clip)
    }

    #[instrument(skip(self))]
    async fn stop(&mut self) -> CoreResult<ClipRef> {
        self.shutdown.store(true, Ordering::Release);

        if let Some(stream) = self.stream.take() {
            drop(stream);
            // Let a callback that already passed the flag check finish.
            tokio::time::sleep(Duration::from_millis(5)).await;
            info!("Audio capture stopped");
        }

        let clip = self.pending.take().ok_or_else(|| ChatError::DeviceError {
            reason: "Capture was not started".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let samples: Vec<f32> = self
            .samples
            .lock()
            .map_err(Self::lock_error)?
            .drain(..)
            .collect();

        if samples.is_empty() {
            return Err(ChatError::NoAudioCaptured {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let sample_rate = self.config.as_ref().map(|c| c.sample_rate).unwrap_or(48_000);
        debug!(sample_count = samples.len(), sample_rate, "Captured audio samples");

        self.library
            .insert(clip.clone(), RecordedClip::new(samples, sample_rate));

        Ok(clip)
    }
}

/// Downmix interleaved `data` to mono and append it to `buf`, keeping at most
/// [`MAX_BUFFER_SAMPLES`] samples.
///
/// Returns `true` if older samples had to be dropped.
pub(crate) fn push_frames(buf: &mut VecDeque<f32>, data: &[f32], channels: usize) -> bool {
    let channels = channels.max(1);
    buf.extend(
        data.chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32),
    );

    let excess = buf.len().saturating_sub(MAX_BUFFER_SAMPLES);
    buf.drain(..excess);
    excess > 0
}
