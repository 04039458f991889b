//! Voicechat Core Library
//!
//! Recording, playback and timeline state machines for a chat surface that
//! exchanges short voice clips as messages. Audio hardware sits behind the
//! [`CaptureDevice`] and [`PlaybackEngine`] traits; [`CpalCapture`] and
//! [`CpalPlayer`] are the default-device implementations.
//!
//! # Example
//!
//! ```no_run
//! use voicechat_core::{
//!     ChatSurface, ClipLibrary, CoreResult, CpalCapture, CpalPlayer, ErrorReporter,
//!     SurfaceOptions,
//! };
//!
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let library = ClipLibrary::default();
//!     let (errors, _error_rx) = ErrorReporter::channel();
//!     let mut surface = ChatSurface::mount(
//!         CpalCapture::new(library.clone()),
//!         CpalPlayer::new(library),
//!         SurfaceOptions::default(),
//!         errors,
//!     )?;
//!
//!     surface.start_recording().await;
//!     tokio::time::sleep(Duration::from_secs(3)).await;
//!     surface.stop_recording().await;
//!
//!     println!("{} message(s)", surface.timeline().len());
//!     Ok(())
//! }
//! ```

mod audio;
mod capture;
mod chat_surface;
mod clip;
mod error;
mod error_reporter;
mod format;
mod message;
mod playback;
mod playback_controller;
mod playback_state;
mod recording_controller;
mod recording_state;
mod timeline;
mod timer;
mod view;

pub use {
    audio::{ClipLibrary, CpalCapture, CpalPlayback, CpalPlayer, RecordedClip},
    capture::{CaptureConfig, CaptureDevice},
    chat_surface::{ChatSurface, SurfaceOptions},
    clip::ClipRef,
    error::{ChatError, Result as CoreResult},
    error_reporter::ErrorReporter,
    format::format_duration,
    message::{Message, MessageBody, MessageId, VoiceMessage},
    playback::{Playback, PlaybackEngine, PlaybackOutcome},
    playback_controller::PlaybackController,
    playback_state::PlaybackState,
    recording_controller::RecordingController,
    recording_state::{RecordingPhase, RecordingState},
    timeline::MessageTimeline,
    timer::{TICK_PERIOD, Timer},
    view::{MessageRow, PlaybackLabel, RecordLabel},
};

#[cfg(test)]
mod tests;
