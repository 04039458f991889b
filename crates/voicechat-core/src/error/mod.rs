use crate::ClipRef;

use error_location::ErrorLocation;
use thiserror::Error;

/// Chat surface errors with source location tracking.
///
/// The first group comes from the audio collaborators. The second group is
/// what the controllers report on the error channel after recovering.
#[derive(Error, Debug)]
pub enum ChatError {
    /// No audio input device found.
    #[error("No microphone found {location}")]
    NoMicrophoneFound {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio output device found.
    #[error("No output device found {location}")]
    NoOutputDevice {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio resampling failed.
    #[error("Resampling error: {reason} {location}")]
    ResamplingError {
        /// Description of the resampling error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Recording stopped without any captured audio.
    #[error("No audio captured {location}")]
    NoAudioCaptured {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No recorded audio is stored under the clip reference.
    #[error("Clip not found: {clip} {location}")]
    ClipNotFound {
        /// The unknown clip reference.
        clip: ClipRef,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The capture device rejected `start`. The session was abandoned.
    #[error("Failed to start recording: {source} {location}")]
    CaptureStartFailed {
        /// Underlying collaborator error.
        #[source]
        source: Box<ChatError>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The capture device rejected `stop`. The recorded audio is lost.
    #[error("Failed to stop recording: {source} {location}")]
    CaptureStopFailed {
        /// Underlying collaborator error.
        #[source]
        source: Box<ChatError>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The playback engine could not load a clip.
    #[error("Failed to load clip {clip}: {source} {location}")]
    PlaybackLoadFailed {
        /// Clip that failed to load.
        clip: ClipRef,
        /// Underlying collaborator error.
        #[source]
        source: Box<ChatError>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The playback engine reported failure instead of completion.
    #[error("Playback of clip {clip} failed: {reason} {location}")]
    PlaybackRuntimeFailed {
        /// Clip whose playback failed.
        clip: ClipRef,
        /// Reason reported by the engine.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ChatError`].
pub type Result<T> = std::result::Result<T, ChatError>;
