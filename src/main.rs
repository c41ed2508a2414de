// Person Cards - a list of people you can show, rename and delete
//
// Architecture:
// - Roster: the records (ordered, ids generated at startup)
// - TUI (ratatui): one container (App) that owns the roster, plus child
//   components that send actions back to it
// - Logging: tracing events captured for the in-app logs panel, optionally
//   mirrored to rolling JSON files
// - Config: env > ~/.config/person-cards/config.toml > defaults

mod cli;
mod config;
mod logging;
mod roster;
mod tui;

use anyhow::{Context, Result};
use config::{Config, LogRotation, VERSION};
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the tracing subscriber.
///
/// Events always go to the in-memory buffer (stdout would garble the TUI).
/// With file logging enabled they are also written as JSON through a
/// non-blocking rolling appender; the returned guard must live until exit
/// so buffered lines are flushed.
fn init_logging(config: &Config, log_buffer: &LogBuffer) -> Result<Option<WorkerGuard>> {
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("person_cards={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let (file_layer, guard) = if config.logging.file_enabled {
        let logging = &config.logging;
        std::fs::create_dir_all(&logging.file_dir).with_context(|| {
            format!("Could not create log directory {}", logging.file_dir.display())
        })?;

        let appender = match logging.file_rotation {
            LogRotation::Hourly => {
                tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
            }
            LogRotation::Daily => {
                tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
            }
            LogRotation::Never => {
                tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
            }
        };
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(non_blocking)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands (config, roster) run and exit without the TUI
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env()?;

    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config, &log_buffer)?;

    tracing::info!(version = VERSION, "Starting person-cards");

    if let Err(e) = tui::run_tui(&config, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
