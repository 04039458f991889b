use std::time::Instant;

use uuid::Uuid;

/// Phase of the recording state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingPhase {
    /// Not currently recording.
    Idle,
    /// Currently recording audio.
    Recording {
        /// When recording started.
        started_at: Instant,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecordingPhase {
    /// Whether this is the `Recording` phase.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecordingPhase::Recording { .. })
    }
}

/// Snapshot of the recording controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingState {
    /// Current phase.
    pub phase: RecordingPhase,
    /// Seconds ticked since recording started; zero while idle.
    pub elapsed_secs: u64,
}
