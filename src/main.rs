// folio - a single-page personal portfolio for the terminal
//
// One hard-coded content record rendered three ways:
// - TUI (ratatui): a scrollable page with a sticky nav whose highlight is
//   driven by the active-section resolver, plus a skill explorer
// - Static export: pre-rendered markup, robots, sitemap, generated icons
// - JSON dump of the content record
//
// Architecture:
// - content: the record everything reads from
// - resolver: scroll-spy state machine (visibility + nav intent)
// - tui: event loop, document layout, components
// - export: plain-file site generation

mod cli;
mod config;
mod content;
mod explorer;
mod export;
mod logging;
mod resolver;
mod sections;
mod theme;
mod tui;

use anyhow::Result;
use cli::CliAction;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();

    match cli::handle_cli(&mut config)? {
        CliAction::Exit => Ok(()),
        CliAction::Export(opts) => {
            // One-shot command: plain stdout logging
            tracing_subscriber::registry()
                .with(env_filter(&config))
                .with(tracing_subscriber::fmt::layer())
                .init();
            export::run(&config, &opts)
        }
        CliAction::Tui(startup) => {
            let log_buffer = LogBuffer::new();
            let _file_guard = init_tui_tracing(&config, log_buffer.clone());

            tracing::info!(
                version = config::VERSION,
                theme = %config.theme,
                "starting folio"
            );
            tui::run_tui(config, startup, log_buffer).await
        }
    }
}

/// Log filter precedence: RUST_LOG env var > config file > default "info"
fn env_filter(config: &Config) -> EnvFilter {
    let default_filter = format!("folio={}", config.logging.level);
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into())
}

/// Initialize tracing for TUI mode.
///
/// Logs are captured to the in-memory buffer (stdout would garble the
/// alternate screen). When file logging is enabled, a JSON layer writes to
/// rotating files through a non-blocking writer; the returned guard must be
/// kept alive for the duration of the program so logs flush on exit.
fn init_tui_tracing(
    config: &Config,
    buffer: LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = env_filter(config);

    if config.logging.file_enabled {
        if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
            eprintln!(
                "Warning: Could not create log directory {:?}: {}",
                config.logging.file_dir, e
            );
            // Fall through to buffer-only logging
        } else {
            let file_appender = match config.logging.file_rotation {
                LogRotation::Hourly => tracing_appender::rolling::hourly(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Daily => tracing_appender::rolling::daily(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
                LogRotation::Never => tracing_appender::rolling::never(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                ),
            };

            // Writes happen on a background thread
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(buffer))
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false),
                )
                .init();

            return Some(guard);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(buffer))
        .init();
    None
}
