use crate::{ClipRef, Message, MessageBody, PlaybackState, format_duration};

use std::fmt;

/// Label of the record control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLabel {
    /// Shown while idle.
    StartRecording,
    /// Shown while recording.
    StopRecording,
}

impl RecordLabel {
    /// Label for the given recording flag.
    pub fn for_recording(is_recording: bool) -> Self {
        if is_recording {
            RecordLabel::StopRecording
        } else {
            RecordLabel::StartRecording
        }
    }

    /// Display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordLabel::StartRecording => "Start Recording",
            RecordLabel::StopRecording => "Stop Recording",
        }
    }
}

impl fmt::Display for RecordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label of a voice message's playback control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackLabel {
    /// The clip is not playing.
    PlayAudio,
    /// The clip is playing.
    PauseAudio,
}

impl PlaybackLabel {
    /// Display text.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackLabel::PlayAudio => "Play Audio",
            PlaybackLabel::PauseAudio => "Pause Audio",
        }
    }
}

impl fmt::Display for PlaybackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render data for one timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageRow {
    /// A text bubble.
    Text {
        /// Insertion position.
        position: u64,
        /// Message text.
        content: String,
    },
    /// A voice bubble with its playback control.
    Voice {
        /// Insertion position.
        position: u64,
        /// Clip behind the control.
        clip: ClipRef,
        /// Control label, keyed to this clip.
        label: PlaybackLabel,
        /// The message's own duration as `MM:SS`.
        duration: String,
    },
}

impl MessageRow {
    pub(crate) fn from_message(message: &Message, playback: &PlaybackState) -> Self {
        match message.body() {
            MessageBody::Text { content } => MessageRow::Text {
                position: message.position(),
                content: content.clone(),
            },
            MessageBody::Voice(voice) => MessageRow::Voice {
                position: message.position(),
                clip: voice.clip().clone(),
                label: if playback.is_playing_clip(voice.clip()) {
                    PlaybackLabel::PauseAudio
                } else {
                    PlaybackLabel::PlayAudio
                },
                duration: format_duration(voice.duration_secs()),
            },
        }
    }

    /// Insertion position of the entry.
    pub fn position(&self) -> u64 {
        match self {
            MessageRow::Text { position, .. } | MessageRow::Voice { position, .. } => *position,
        }
    }
}
