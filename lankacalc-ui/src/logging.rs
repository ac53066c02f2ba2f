//! Process-wide `tracing` subscriber for the calculator.
//!
//! One global filter (`RUST_LOG`, else the configured directive) feeds up to
//! two sinks: stdout when `log_stdout` is set, and an append-only log file
//! when `log_file` is set. Both sinks share [`CalcLogFormat`].

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::config::AppConfig;

/// Filter used when neither `RUST_LOG` nor the configured directive parses.
const FALLBACK_DIRECTIVE: &str = "info";

/// `HH:MM:SS.mmm LEVEL target: fields`, with the level coloured on a terminal.
struct CalcLogFormat;

fn level_style(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[32m",
        Level::DEBUG => "\x1b[34m",
        Level::TRACE => "\x1b[2m",
    }
}

impl<S, N> FormatEvent<S, N> for CalcLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%H:%M:%S%.3f");

        if writer.has_ansi_escapes() {
            let style = level_style(*meta.level());
            write!(writer, "{time} {style}{:<5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{time} {:<5} ", meta.level())?;
        }
        write!(writer, "{}: ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `RUST_LOG` wins; otherwise `directive`, then [`FALLBACK_DIRECTIVE`].
fn make_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Opens `path` for appending, creating the file but not its directory.
fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Installs the global subscriber described by `config`. Call once at startup.
///
/// The log file is opened before anything is installed, so a bad path leaves
/// logging untouched and surfaces as an error.
///
/// # Errors
///
/// Fails if the log file cannot be opened or a global subscriber is already
/// set.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let log_file = config.log_file.as_deref().map(open_log_file).transpose()?;

    let stdout_layer = config.log_stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(CalcLogFormat)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .event_format(CalcLogFormat)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(make_filter(&config.log_level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("logging is already initialized")
}
