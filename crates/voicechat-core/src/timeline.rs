use crate::{ClipRef, Message, MessageBody, MessageId};

use tokio::sync::watch;
use tracing::{debug, instrument};

/// Append-only ordered log of messages.
///
/// Newest entries go last; display order is up to the renderer. Nothing is
/// ever removed or changed after `append`.
#[derive(Debug)]
pub struct MessageTimeline {
    entries: Vec<Message>,
    next_position: u64,
    len_tx: watch::Sender<usize>,
}

impl MessageTimeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_position: 1,
            len_tx: watch::Sender::new(0),
        }
    }

    /// Append a batch of messages as one contiguous unit, keeping the batch's
    /// own order. An empty batch is a no-op.
    #[instrument(skip(self, batch))]
    pub fn append<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = MessageBody>,
    {
        let before = self.entries.len();

        for body in batch {
            let position = self.next_position;
            self.next_position += 1;
            self.entries
                .push(Message::new(MessageId::new(), position, body));
        }

        let appended = self.entries.len() - before;
        if appended > 0 {
            debug!(appended, total = self.entries.len(), "Messages appended");
            self.len_tx.send_replace(self.entries.len());
        }
    }

    /// The current ordered entries, oldest first.
    pub fn view(&self) -> &[Message] {
        &self.entries
    }

    /// Watch the entry count. A change means new messages were appended.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.len_tx.subscribe()
    }

    /// Entry at an insertion position.
    pub fn get(&self, position: u64) -> Option<&Message> {
        // Positions are dense and start at 1.
        let index = usize::try_from(position.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    /// Clip of the voice message at an insertion position.
    pub fn voice_clip_at(&self, position: u64) -> Option<&ClipRef> {
        self.get(position)?.voice().map(|voice| voice.clip())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MessageTimeline {
    fn default() -> Self {
        Self::new()
    }
}
