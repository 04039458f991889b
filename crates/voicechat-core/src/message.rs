use crate::ClipRef;

use std::fmt;

use uuid::Uuid;

/// Identity assigned to a message when it joins the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(Uuid);

impl MessageId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A recorded clip attached to the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceMessage {
    clip: ClipRef,
    duration_secs: u64,
}

impl VoiceMessage {
    /// Build the payload produced when a recording stops.
    pub fn new(clip: ClipRef, duration_secs: u64) -> Self {
        Self {
            clip,
            duration_secs,
        }
    }

    /// Reference to the recorded audio.
    pub fn clip(&self) -> &ClipRef {
        &self.clip
    }

    /// Elapsed seconds at the moment recording was stopped.
    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }
}

/// Content of a timeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    /// Typed text.
    Text {
        /// The text as sent.
        content: String,
    },
    /// Recorded voice clip.
    Voice(VoiceMessage),
}

impl From<VoiceMessage> for MessageBody {
    fn from(voice: VoiceMessage) -> Self {
        MessageBody::Voice(voice)
    }
}

/// An entry of the timeline. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    position: u64,
    body: MessageBody,
}

impl Message {
    pub(crate) fn new(id: MessageId, position: u64, body: MessageBody) -> Self {
        Self { id, position, body }
    }

    /// Identity, never reused.
    pub fn id(&self) -> MessageId {
        self.id
    }

    /// Insertion position, starting at 1.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Message content.
    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    /// The voice payload, if this is a voice message.
    pub fn voice(&self) -> Option<&VoiceMessage> {
        match &self.body {
            MessageBody::Voice(voice) => Some(voice),
            MessageBody::Text { .. } => None,
        }
    }
}
