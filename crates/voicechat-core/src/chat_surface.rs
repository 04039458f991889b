use crate::{
    CaptureConfig, CaptureDevice, ClipRef, CoreResult, ErrorReporter, MessageBody, MessageRow,
    MessageTimeline, PlaybackController, PlaybackEngine, PlaybackState, RecordLabel,
    RecordingController, RecordingState, TICK_PERIOD, Timer, format_duration,
};

use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Settings applied when the surface mounts.
#[derive(Debug, Clone)]
pub struct SurfaceOptions {
    /// Passed to the capture device's `init`.
    pub capture: CaptureConfig,
    /// Playback category passed to the engine on every load.
    pub playback_category: String,
    /// Period of the recording timer.
    pub tick_period: Duration,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            playback_category: String::new(),
            tick_period: TICK_PERIOD,
        }
    }
}

/// The chat surface: recording, playback and the timeline wired together.
///
/// Dropping the surface disarms the recording timer and stops playback.
pub struct ChatSurface<C: CaptureDevice, E: PlaybackEngine> {
    recording: RecordingController<C>,
    playback: PlaybackController<E>,
    timeline: MessageTimeline,
}

impl<C: CaptureDevice, E: PlaybackEngine> ChatSurface<C, E> {
    /// Mount the surface and initialize the capture device.
    ///
    /// # Errors
    ///
    /// Returns error if the capture device fails to initialize.
    #[track_caller]
    #[instrument(skip(capture, engine, errors))]
    pub fn mount(
        capture: C,
        engine: E,
        options: SurfaceOptions,
        errors: ErrorReporter,
    ) -> CoreResult<Self> {
        let mut recording = RecordingController::new(
            capture,
            Timer::with_period(options.tick_period),
            errors.clone(),
        );
        recording.init(&options.capture)?;

        let playback = PlaybackController::new(engine, options.playback_category, errors);

        info!("Chat surface mounted");

        Ok(Self {
            recording,
            playback,
            timeline: MessageTimeline::new(),
        })
    }

    /// Start recording if idle, stop and attach the clip if recording.
    pub async fn toggle_recording(&mut self) {
        if self.recording.is_recording() {
            self.stop_recording().await;
        } else {
            self.start_recording().await;
        }
    }

    /// Start recording.
    pub async fn start_recording(&mut self) {
        self.recording.request_start().await;
    }

    /// Stop recording and append the voice message to the timeline.
    pub async fn stop_recording(&mut self) {
        if let Some(voice) = self.recording.request_stop().await {
            self.send(vec![MessageBody::from(voice)]);
        }
    }

    /// Send a text message. Blank text is ignored.
    pub fn send_text(&mut self, content: impl Into<String>) {
        let content = content.into();
        if content.trim().is_empty() {
            debug!("Ignoring blank text message");
            return;
        }
        self.send(vec![MessageBody::Text { content }]);
    }

    /// Append a batch of outgoing messages. An empty batch is ignored.
    pub fn send(&mut self, batch: Vec<MessageBody>) {
        if batch.is_empty() {
            return;
        }
        self.timeline.append(batch);
    }

    /// Toggle playback of a clip.
    pub async fn toggle_playback(&mut self, clip: &ClipRef) {
        self.playback.toggle(clip).await;
    }

    /// Toggle playback of the voice message at an insertion position.
    ///
    /// Returns `false` if there is no voice message there.
    pub async fn toggle_playback_at(&mut self, position: u64) -> bool {
        let Some(clip) = self.timeline.voice_clip_at(position).cloned() else {
            return false;
        };
        self.playback.toggle(&clip).await;
        true
    }

    /// The message timeline.
    pub fn timeline(&self) -> &MessageTimeline {
        &self.timeline
    }

    /// Recording phase and elapsed seconds.
    pub fn recording_state(&self) -> RecordingState {
        self.recording.state()
    }

    /// Whether a recording is in progress.
    pub fn is_recording(&self) -> bool {
        self.recording.is_recording()
    }

    /// Playback slot snapshot.
    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Follow the elapsed counter.
    pub fn subscribe_elapsed(&self) -> watch::Receiver<u64> {
        self.recording.subscribe_elapsed()
    }

    /// Follow the playback slot.
    pub fn subscribe_playback(&self) -> watch::Receiver<PlaybackState> {
        self.playback.subscribe()
    }

    /// Follow the timeline's entry count.
    pub fn subscribe_timeline(&self) -> watch::Receiver<usize> {
        self.timeline.subscribe()
    }

    /// Most recent clip reference from the capture device.
    pub fn last_clip(&self) -> Option<&ClipRef> {
        self.recording.last_clip()
    }

    /// Label for the record control.
    pub fn record_label(&self) -> RecordLabel {
        RecordLabel::for_recording(self.recording.is_recording())
    }

    /// `Recording: MM:SS` while recording, `None` while idle.
    pub fn recording_readout(&self) -> Option<String> {
        self.recording
            .is_recording()
            .then(|| format!("Recording: {}", format_duration(self.recording.elapsed_secs())))
    }

    /// Render data for every entry, oldest first.
    pub fn rows(&self) -> Vec<MessageRow> {
        let playback = self.playback.state();
        self.timeline
            .view()
            .iter()
            .map(|message| MessageRow::from_message(message, &playback))
            .collect()
    }
}

impl<C: CaptureDevice, E: PlaybackEngine> Drop for ChatSurface<C, E> {
    fn drop(&mut self) {
        debug!(messages = self.timeline.len(), "Chat surface unmounted");
    }
}
