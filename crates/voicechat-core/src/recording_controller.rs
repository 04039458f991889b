//! Recording state machine.
//!
//! Two phases, `Idle` and `Recording`. The timer is armed on the way into
//! `Recording` and disarmed on every way out, including collaborator
//! failures, so the elapsed counter is zero at both edges.

use crate::{
    CaptureConfig, CaptureDevice, ChatError, ClipRef, CoreResult, ErrorReporter, RecordingPhase,
    RecordingState, Timer, VoiceMessage,
};

use std::{panic::Location, time::Instant};

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Owns the recording lifecycle and the elapsed-seconds timer.
pub struct RecordingController<C> {
    capture: C,
    timer: Timer,
    phase: RecordingPhase,
    last_clip: Option<ClipRef>,
    errors: ErrorReporter,
}

impl<C: CaptureDevice> RecordingController<C> {
    /// Create an idle controller around a capture device.
    pub fn new(capture: C, timer: Timer, errors: ErrorReporter) -> Self {
        Self {
            capture,
            timer,
            phase: RecordingPhase::Idle,
            last_clip: None,
            errors,
        }
    }

    /// Initialize the capture device.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn init(&mut self, config: &CaptureConfig) -> CoreResult<()> {
        self.capture.init(config)?;
        info!("Capture device initialized");
        Ok(())
    }

    /// Start recording.
    ///
    /// No-op while already recording. If the capture device rejects the
    /// start, the controller returns to `Idle` and the failure is reported.
    #[instrument(skip(self))]
    pub async fn request_start(&mut self) {
        if self.phase.is_recording() {
            debug!("Start requested while recording, ignoring");
            return;
        }

        let session_id = Uuid::new_v4();

        // Phase flips before the await so a second start is rejected while
        // the device is still spinning up.
        self.phase = RecordingPhase::Recording {
            started_at: Instant::now(),
            session_id,
        };
        self.timer.arm();

        match self.capture.start().await {
            Ok(clip) => {
                info!(session_id = %session_id, clip = %clip, "Recording started");
                self.last_clip = Some(clip);
            }
            Err(e) => {
                self.timer.disarm();
                self.phase = RecordingPhase::Idle;
                self.errors.report(ChatError::CaptureStartFailed {
                    source: Box::new(e),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
    }

    /// Stop recording and produce the voice message.
    ///
    /// Returns `None` when not recording, or when the capture device rejects
    /// the stop. In the latter case the controller is still `Idle` afterwards
    /// and the failure is reported.
    #[instrument(skip(self))]
    pub async fn request_stop(&mut self) -> Option<VoiceMessage> {
        let RecordingPhase::Recording {
            started_at,
            session_id,
        } = self.phase
        else {
            debug!("Stop requested while idle, ignoring");
            return None;
        };

        // Snapshot before disarm resets the counter.
        let duration_secs = self.timer.elapsed_secs();
        self.timer.disarm();
        self.phase = RecordingPhase::Idle;

        match self.capture.stop().await {
            Ok(clip) => {
                info!(
                    session_id = %session_id,
                    clip = %clip,
                    duration_secs,
                    wall_ms = started_at.elapsed().as_millis(),
                    "Recording stopped"
                );
                self.last_clip = Some(clip.clone());
                Some(VoiceMessage::new(clip, duration_secs))
            }
            Err(e) => {
                self.errors.report(ChatError::CaptureStopFailed {
                    source: Box::new(e),
                    location: ErrorLocation::from(Location::caller()),
                });
                None
            }
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RecordingPhase {
        self.phase
    }

    /// Whether a recording is in progress.
    pub fn is_recording(&self) -> bool {
        self.phase.is_recording()
    }

    /// Phase and elapsed seconds together.
    pub fn state(&self) -> RecordingState {
        RecordingState {
            phase: self.phase,
            elapsed_secs: self.timer.elapsed_secs(),
        }
    }

    /// Seconds elapsed in the current recording; zero while idle.
    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    /// Follow the elapsed counter for a live readout.
    pub fn subscribe_elapsed(&self) -> watch::Receiver<u64> {
        self.timer.subscribe()
    }

    /// Most recent clip reference handed out by the capture device.
    pub fn last_clip(&self) -> Option<&ClipRef> {
        self.last_clip.as_ref()
    }
}
