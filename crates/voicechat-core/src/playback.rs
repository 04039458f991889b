use crate::{ClipRef, CoreResult};

use std::future::Future;

use tokio::sync::oneshot;

/// How a playback ended, as signaled by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The clip played to the end.
    Finished,
    /// The engine failed while playing (e.g. a decoding error).
    Failed {
        /// Engine-provided description.
        reason: String,
    },
    /// Playback was stopped before the end, or the engine dropped the signal.
    Interrupted,
}

/// A loaded clip, ready to play.
pub trait Playback {
    /// Start playing. The receiver resolves once, when the engine reports
    /// completion or failure.
    fn play(&mut self) -> oneshot::Receiver<PlaybackOutcome>;

    /// Stop playing. Must be safe to call after completion.
    fn stop(&mut self);
}

/// Audio decode/playback collaborator.
pub trait PlaybackEngine {
    /// Handle produced by a successful load.
    type Playback: Playback;

    /// Load a clip for playback under the given playback category.
    fn load(
        &mut self,
        clip: &ClipRef,
        category: &str,
    ) -> impl Future<Output = CoreResult<Self::Playback>>;
}
