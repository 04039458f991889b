use crate::ClipRef;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use tracing::{debug, error};

/// Mono PCM audio of one recorded clip.
#[derive(Debug, Clone)]
pub struct RecordedClip {
    samples: Arc<[f32]>,
    sample_rate: u32,
}

impl RecordedClip {
    /// Wrap mono samples captured at `sample_rate`.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
        }
    }

    /// Mono samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length of the clip.
    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.samples.len() as f64 / f64::from(self.sample_rate))
    }
}

/// In-memory clip store shared by the cpal capture device and player.
///
/// Clips live as long as the process; nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: Arc<Mutex<HashMap<ClipRef, RecordedClip>>>,
}

impl ClipLibrary {
    /// Store a clip, replacing any clip under the same reference.
    pub fn insert(&self, clip: ClipRef, recorded: RecordedClip) {
        let mut clips = self.clips.lock().unwrap_or_else(|e| {
            error!("Clip library lock poisoned, recovering: {}", e);
            e.into_inner()
        });
        debug!(
            clip = %clip,
            duration_ms = recorded.duration().as_millis(),
            "Clip stored"
        );
        clips.insert(clip, recorded);
    }

    /// Look up a clip.
    pub fn get(&self, clip: &ClipRef) -> Option<RecordedClip> {
        self.clips
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(clip)
            .cloned()
    }

    /// Number of stored clips.
    pub fn len(&self) -> usize {
        self.clips.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether no clip is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
