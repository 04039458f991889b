use crate::ClipRef;

/// Single-slot playback state.
///
/// At most one clip is active. After completion the clip stays in
/// `active_clip` as "last played" with `is_playing` cleared; a load failure
/// clears the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Target of the most recent successful toggle.
    pub active_clip: Option<ClipRef>,
    /// True only while the active clip has not signaled completion or failure.
    pub is_playing: bool,
    pub(crate) play_id: u64,
}

impl PlaybackState {
    /// Whether this clip is the one currently playing.
    pub fn is_playing_clip(&self, clip: &ClipRef) -> bool {
        self.is_playing && self.active_clip.as_ref() == Some(clip)
    }
}
