use crate::{
    AppCommand, AppResult,
    config::{Config, DisplayConfig},
    render,
};

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};
use voicechat_core::{
    ChatError, ChatSurface, ClipLibrary, CpalCapture, CpalPlayer, ErrorReporter,
};

type Surface = ChatSurface<CpalCapture, CpalPlayer>;

/// Main application state.
///
/// Owns the chat surface and drives it from terminal commands. Elapsed
/// ticks, playback changes and collaborator errors arrive on channels and
/// are printed as they come in.
pub struct App {
    pub(crate) surface: Surface,
    pub(crate) display: DisplayConfig,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) error_rx: mpsc::UnboundedReceiver<ChatError>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Mount the chat surface on the default audio devices.
    #[instrument(skip_all)]
    pub(crate) fn mount(
        config: &Config,
        command_rx: mpsc::Receiver<AppCommand>,
        shutdown_tx: watch::Sender<bool>,
    ) -> AppResult<Self> {
        let library = ClipLibrary::default();
        let (errors, error_rx) = ErrorReporter::channel();

        let surface = ChatSurface::mount(
            CpalCapture::new(library.clone()),
            CpalPlayer::new(library),
            config.surface_options(),
            errors,
        )?;

        Ok(Self {
            surface,
            display: config.display.clone(),
            command_rx,
            error_rx,
            shutdown_tx,
        })
    }

    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Voicechat starting");

        let App {
            mut surface,
            display,
            mut command_rx,
            mut error_rx,
            shutdown_tx,
        } = self;

        let mut elapsed_rx = surface.subscribe_elapsed();
        let mut playback_rx = surface.subscribe_playback();
        let mut timeline_rx = surface.subscribe_timeline();
        let mut was_playing = false;

        println!("{}", render::HELP);
        println!("{}", render::render_controls(surface.record_label()));

        loop {
            tokio::select! {
                cmd = command_rx.recv() => {
                    match cmd {
                        Some(AppCommand::Shutdown) => {
                            info!("Shutdown requested");
                            break;
                        }
                        Some(cmd) => handle_command(&mut surface, &display, cmd).await,
                        None => {
                            info!("Command channel closed, shutting down");
                            break;
                        }
                    }
                }

                Ok(()) = elapsed_rx.changed() => {
                    let elapsed_secs = *elapsed_rx.borrow_and_update();
                    debug!(elapsed_secs, "Recording tick");
                    if let Some(readout) = surface.recording_readout() {
                        println!("{readout}");
                    }
                }

                Ok(()) = timeline_rx.changed() => {
                    let messages = *timeline_rx.borrow_and_update();
                    debug!(messages, "Timeline changed");
                    print_timeline(&surface, &display);
                }

                Ok(()) = playback_rx.changed() => {
                    let is_playing = playback_rx.borrow_and_update().is_playing;
                    if was_playing && !is_playing {
                        println!("Playback stopped");
                    }
                    was_playing = is_playing;
                }

                Some(err) = error_rx.recv() => {
                    eprintln!("Error: {err}");
                }
            }
        }

        drop(surface);

        let _ = shutdown_tx.send(true);
        info!("Voicechat shut down successfully");

        Ok(())
    }
}

#[instrument(skip(surface, display))]
async fn handle_command(surface: &mut Surface, display: &DisplayConfig, cmd: AppCommand) {
    match cmd {
        AppCommand::ToggleRecording => {
            surface.toggle_recording().await;
            println!("{}", render::render_controls(surface.record_label()));
        }
        AppCommand::TogglePlayback { position } => {
            if !surface.toggle_playback_at(position).await {
                warn!(position, "No voice message at position");
                eprintln!("No voice message at [{position}]");
                return;
            }
            print_timeline(surface, display);
        }
        AppCommand::SendText { content } => surface.send_text(content),
        AppCommand::ShowTimeline => print_timeline(surface, display),
        AppCommand::Help => println!("{}", render::HELP),
        // Handled by the event loop.
        AppCommand::Shutdown => {}
    }
}

fn print_timeline(surface: &Surface, display: &DisplayConfig) {
    let lines = render::render_timeline(&surface.rows(), display.newest_first);
    for line in lines {
        println!("{line}");
    }
}
