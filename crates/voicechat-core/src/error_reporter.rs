use crate::ChatError;

use tokio::sync::mpsc;
use tracing::error;

/// User-visible error channel.
///
/// Controllers recover locally and then hand the error here. Every report is
/// logged and forwarded to whoever holds the receiver (a toast, a status
/// line). A dropped receiver only disables forwarding.
#[derive(Debug, Clone)]
pub struct ErrorReporter {
    tx: mpsc::UnboundedSender<ChatError>,
}

impl ErrorReporter {
    /// Create a reporter and the receiving end of its channel.
    ///
    /// The channel is unbounded: a receiver that is kept but never drained
    /// holds every reported error. Drain it, or drop it to stop forwarding.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ChatError>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Log the error and forward it to the receiver.
    pub fn report(&self, err: ChatError) {
        error!(error = %err, "Chat surface error");
        let _ = self.tx.send(err);
    }
}
