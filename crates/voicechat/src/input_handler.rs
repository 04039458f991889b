//! Terminal input handler.
//!
//! Reads command lines from stdin and forwards them to the main application
//! as [`AppCommand`]s over an async channel.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument};

/// Map one input line to a command.
///
/// Blank lines map to `None`. Anything that is not a known command is sent
/// as a text message.
pub fn parse_command(line: &str) -> Option<AppCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word, rest.is_empty()) {
        ("r" | "record", true) => AppCommand::ToggleRecording,
        ("l" | "list", true) => AppCommand::ShowTimeline,
        ("h" | "help", true) => AppCommand::Help,
        ("q" | "quit", true) => AppCommand::Shutdown,
        ("p" | "play", _) => match rest.parse() {
            Ok(position) => AppCommand::TogglePlayback { position },
            Err(_) => AppCommand::Help,
        },
        _ => AppCommand::SendText {
            content: line.to_string(),
        },
    };

    Some(command)
}

/// Forwards stdin lines to the application as commands.
pub struct InputHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl InputHandler {
    /// Create a handler that sends into `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Run the input loop until shutdown is signalled or stdin closes.
    ///
    /// End of input is forwarded as [`AppCommand::Shutdown`].
    #[instrument(skip_all)]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Input handler shutting down");
                    break;
                }
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if let Some(command) = parse_command(&line) {
                                debug!(command = ?command, "Input command");
                                let is_shutdown = command == AppCommand::Shutdown;
                                self.send(command).await?;
                                if is_shutdown {
                                    break;
                                }
                            }
                        }
                        None => {
                            info!("Input closed");
                            self.send(AppCommand::Shutdown).await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send command: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
