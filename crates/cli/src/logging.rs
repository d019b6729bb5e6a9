//! Tracing setup: stderr always, plus an optional log file.

use dailyprompt_core::config::types::LoggingConfig;
use std::fs::{self, File};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped, so it must be
/// held until the command finishes.
pub fn init(cfg: &LoggingConfig) -> Option<WorkerGuard> {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.file.as_deref() else {
        registry.init();
        return None;
    };

    let file_level = cfg
        .file_level
        .as_deref()
        .and_then(parse_level)
        .unwrap_or(stderr_level);

    let file = match open_log_file(path) {
        Ok(f) => f,
        Err(e) => {
            registry.init();
            tracing::warn!(path = %path.display(), "cannot open log file: {e}");
            return None;
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(file);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter(file_level));

    registry.with(file_layer).init();
    Some(guard)
}

fn filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::options().create(true).append(true).open(path)
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
