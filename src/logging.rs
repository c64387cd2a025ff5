use std::fs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging for the command-line utilities: human-readable
/// diagnostics on stderr (stdout carries the report output) plus a
/// daily-rotated JSON log file under `logs/`.
pub fn init_logging() {
    let _ = fs::create_dir_all("logs");

    let file_appender = tracing_appender::rolling::daily("logs", "textpipe.log");
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::from_default_env().add_directive("textpipe=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(non_blocking_writer))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    // Keep the guard alive so buffered log lines are flushed on exit
    std::mem::forget(guard);
}
