use crate::{
    ChatError, ClipLibrary, ClipRef, CoreResult, Playback, PlaybackEngine, PlaybackOutcome,
    audio::Resampler,
};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use cpal::{
    Device, Stream, StreamConfig,
    traits::{DeviceTrait, HostTrait, StreamTrait},
};
use error_location::ErrorLocation;
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};

type CompletionSlot = Arc<Mutex<Option<oneshot::Sender<PlaybackOutcome>>>>;

/// Playback engine backed by the default cpal output device.
///
/// Loads clips from the shared [`ClipLibrary`] and resamples them to the
/// output device's rate.
pub struct CpalPlayer {
    library: ClipLibrary,
}

impl CpalPlayer {
    /// Create a player reading clips from `library`.
    pub fn new(library: ClipLibrary) -> Self {
        Self { library }
    }
}

impl PlaybackEngine for CpalPlayer {
    type Playback = CpalPlayback;

    #[instrument(skip(self))]
    async fn load(&mut self, clip: &ClipRef, category: &str) -> CoreResult<CpalPlayback> {
        let recorded = self
            .library
            .get(clip)
            .ok_or_else(|| ChatError::ClipNotFound {
                clip: clip.clone(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let device = cpal::default_host()
            .default_output_device()
            .ok_or(ChatError::NoOutputDevice {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let config: StreamConfig = device
            .default_output_config()
            .map_err(|e| ChatError::DeviceError {
                reason: format!("Failed to get output config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .into();

        let mono = if recorded.sample_rate() == config.sample_rate {
            recorded.samples().to_vec()
        } else {
            Resampler::new(recorded.sample_rate(), config.sample_rate)?
                .resample(recorded.samples())?
        };

        // Duplicate each mono sample across the output channels.
        let channels = usize::from(config.channels.max(1));
        let frames: Vec<f32> = mono
            .iter()
            .flat_map(|&s| std::iter::repeat_n(s, channels))
            .collect();

        info!(
            clip = %clip,
            category,
            output_rate = config.sample_rate,
            channels,
            frame_count = mono.len(),
            "Clip loaded"
        );

        Ok(CpalPlayback {
            device,
            config,
            samples: frames.into(),
            stream: None,
            completion: Arc::new(Mutex::new(None)),
        })
    }
}

/// A clip loaded onto the output device.
pub struct CpalPlayback {
    device: Device,
    config: StreamConfig,
    samples: Arc<[f32]>,
    stream: Option<Stream>,
    completion: CompletionSlot,
}

impl CpalPlayback {
    fn start_stream(&self, position: Arc<AtomicUsize>) -> CoreResult<Stream> {
        let samples = Arc::clone(&self.samples);
        let data_completion = Arc::clone(&self.completion);
        let error_completion = Arc::clone(&self.completion);

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if fill_output(data, &samples, &position) {
                        signal(&data_completion, PlaybackOutcome::Finished);
                    }
                },
                move |err| {
                    error!("Audio output stream error: {}", err);
                    signal(
                        &error_completion,
                        PlaybackOutcome::Failed {
                            reason: err.to_string(),
                        },
                    );
                },
                None,
            )
            .map_err(|e| ChatError::DeviceError {
                reason: format!("Failed to build output stream: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        stream.play().map_err(|e| ChatError::DeviceError {
            reason: format!("Failed to start output stream: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(stream)
    }
}

impl Playback for CpalPlayback {
    fn play(&mut self) -> oneshot::Receiver<PlaybackOutcome> {
        self.stop();

        let (tx, rx) = oneshot::channel();
        *self.completion.lock().unwrap_or_else(|e| e.into_inner()) = Some(tx);

        match self.start_stream(Arc::new(AtomicUsize::new(0))) {
            Ok(stream) => {
                self.stream = Some(stream);
                debug!(sample_count = self.samples.len(), "Output stream playing");
            }
            Err(e) => {
                signal(
                    &self.completion,
                    PlaybackOutcome::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        }

        rx
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            drop(stream);
            debug!("Output stream stopped");
        }
        // Dropping a pending sender resolves the receiver as interrupted.
        self.completion
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
    }
}

/// Copy the next chunk of `samples` into `data`, padding with silence.
///
/// Returns `true` once a callback starts with nothing left to copy, i.e. the
/// buffer holding the tail has already been handed to the device.
pub(crate) fn fill_output(data: &mut [f32], samples: &[f32], position: &AtomicUsize) -> bool {
    let start = position.load(Ordering::Relaxed);
    if start >= samples.len() {
        data.fill(0.0);
        return true;
    }

    let end = (start + data.len()).min(samples.len());
    let written = end - start;

    data[..written].copy_from_slice(&samples[start..end]);
    data[written..].fill(0.0);
    position.store(end, Ordering::Relaxed);

    false
}

/// Send the outcome if nobody has yet. Later signals are dropped.
fn signal(slot: &CompletionSlot, outcome: PlaybackOutcome) {
    let sender = slot.lock().unwrap_or_else(|e| e.into_inner()).take();
    if let Some(tx) = sender {
        let _ = tx.send(outcome);
    }
}
