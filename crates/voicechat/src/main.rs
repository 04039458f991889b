//! Voicechat: terminal chat that exchanges short voice clips as messages.

mod app;
mod app_command;
mod config;
mod error;
mod input_handler;
mod render;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    input_handler::InputHandler,
};

use crate::config::Config;

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "voicechat=debug,voicechat_core=debug";

/// Application entry point.
fn main() {
    let log_dir = match Config::log_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to resolve log directory: {e}");
            std::process::exit(1);
        }
    };

    // Stdout belongs to the chat, so logs go to a rolling file.
    let file_appender = tracing_appender::rolling::daily(log_dir, "voicechat.log");
    let (log_writer, log_guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(log_writer)
        .with_ansi(false)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let exit_code = rt.block_on(async {
        let (command_tx, command_rx) = mpsc::channel(32);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let app = match App::mount(&config, command_rx, shutdown_tx) {
            Ok(app) => app,
            Err(e) => {
                error!("Failed to mount chat surface: {:?}", e);
                eprintln!("Failed to mount chat surface: {e}");
                return 1;
            }
        };

        let input_handler = InputHandler::new(command_tx);

        tokio::join!(
            async {
                if let Err(e) = input_handler.run(shutdown_rx).await {
                    error!(error = ?e, "Input handler error");
                }
            },
            async {
                if let Err(e) = app.run().await {
                    error!(error = ?e, "App error");
                }
            }
        );

        0
    });

    // Stdin reads run on a blocking thread that only returns on the next line.
    rt.shutdown_timeout(Duration::from_secs(1));

    if exit_code != 0 {
        drop(log_guard);
        std::process::exit(exit_code);
    }
}
