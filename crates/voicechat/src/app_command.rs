/// Commands sent from the input handler to the main application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Start recording if idle, stop and attach the clip if recording.
    ToggleRecording,
    /// Toggle playback of the voice message at a timeline position.
    TogglePlayback {
        /// Insertion position of the message.
        position: u64,
    },
    /// Send a text message.
    SendText {
        /// Message text.
        content: String,
    },
    /// Print the timeline.
    ShowTimeline,
    /// Print the command summary.
    Help,
    /// Request application shutdown.
    Shutdown,
}
