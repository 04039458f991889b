//! Single-slot playback toggle.
//!
//! Every play gets a `play_id`. The completion watcher for a play only
//! writes to the shared state while its id is still current, so a late
//! completion from a superseded clip never clears the flag of the clip that
//! replaced it.

use crate::{
    ChatError, ClipRef, ErrorReporter, Playback, PlaybackEngine, PlaybackOutcome, PlaybackState,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
};
use tracing::{debug, info, instrument};

/// Drives the playback engine for one active clip at a time.
pub struct PlaybackController<E: PlaybackEngine> {
    engine: E,
    category: String,
    state: Arc<watch::Sender<PlaybackState>>,
    current: Option<E::Playback>,
    watcher: Option<JoinHandle<()>>,
    next_play_id: u64,
    errors: ErrorReporter,
}

impl<E: PlaybackEngine> PlaybackController<E> {
    /// Create a controller with an empty slot.
    ///
    /// `category` is passed through to the engine on every load.
    pub fn new(engine: E, category: impl Into<String>, errors: ErrorReporter) -> Self {
        let (state, _) = watch::channel(PlaybackState::default());
        Self {
            engine,
            category: category.into(),
            state: Arc::new(state),
            current: None,
            watcher: None,
            next_play_id: 0,
            errors,
        }
    }

    /// Toggle playback of a clip.
    ///
    /// Toggling the clip that is playing stops it; the next toggle plays it
    /// from the start. Toggling any other clip stops the current one and
    /// plays the new one. Never fails: load and playback errors go to the
    /// error channel.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self))]
    pub async fn toggle(&mut self, clip: &ClipRef) {
        let play_id = self.bump_play_id();

        if self.state.borrow().is_playing_clip(clip) {
            self.stop_current();
            self.state.send_modify(|s| {
                s.is_playing = false;
                s.play_id = play_id;
            });
            info!(clip = %clip, "Playback stopped by toggle");
            return;
        }

        self.stop_current();
        self.state.send_modify(|s| {
            s.is_playing = false;
            s.play_id = play_id;
        });

        let mut playback = match self.engine.load(clip, &self.category).await {
            Ok(playback) => playback,
            Err(e) => {
                self.state.send_modify(|s| {
                    s.active_clip = None;
                    s.is_playing = false;
                });
                self.errors.report(ChatError::PlaybackLoadFailed {
                    clip: clip.clone(),
                    source: Box::new(e),
                    location: ErrorLocation::from(Location::caller()),
                });
                return;
            }
        };

        let done = playback.play();
        self.state.send_modify(|s| {
            s.active_clip = Some(clip.clone());
            s.is_playing = true;
            s.play_id = play_id;
        });
        self.current = Some(playback);
        self.watcher = Some(tokio::spawn(watch_completion(
            Arc::clone(&self.state),
            self.errors.clone(),
            clip.clone(),
            play_id,
            done,
        )));

        info!(clip = %clip, play_id, "Playback started");
    }

    /// Current state snapshot.
    pub fn state(&self) -> PlaybackState {
        self.state.borrow().clone()
    }

    /// Whether this clip is the one currently playing.
    pub fn is_playing(&self, clip: &ClipRef) -> bool {
        self.state.borrow().is_playing_clip(clip)
    }

    /// Follow state changes, including completions.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state.subscribe()
    }

    /// Stop any playback and reset the slot to empty.
    pub fn shutdown(&mut self) {
        self.stop_current();
        self.state.send_replace(PlaybackState::default());
    }

    fn bump_play_id(&mut self) -> u64 {
        self.next_play_id += 1;
        self.next_play_id
    }

    fn stop_current(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
        if let Some(mut playback) = self.current.take() {
            playback.stop();
            debug!("Previous playback stopped");
        }
    }
}

impl<E: PlaybackEngine> Drop for PlaybackController<E> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn watch_completion(
    state: Arc<watch::Sender<PlaybackState>>,
    errors: ErrorReporter,
    clip: ClipRef,
    play_id: u64,
    done: oneshot::Receiver<PlaybackOutcome>,
) {
    let outcome = done.await.unwrap_or(PlaybackOutcome::Interrupted);

    let current = state.send_if_modified(|s| {
        if s.play_id != play_id {
            return false;
        }
        s.is_playing = false;
        true
    });

    match outcome {
        PlaybackOutcome::Finished => {
            info!(clip = %clip, current, "Playback finished");
        }
        PlaybackOutcome::Interrupted => {
            debug!(clip = %clip, current, "Playback interrupted");
        }
        PlaybackOutcome::Failed { reason } => {
            errors.report(ChatError::PlaybackRuntimeFailed {
                clip,
                reason,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }
}
