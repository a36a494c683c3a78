//! Tracing configuration for the `orphanages` CLI
//!
//! ## Architecture / 架构
//!
//! - **stderr layer**: always on, so stdout stays clean for command output
//! - **file layer**: `orphanages.log` in the platform data dir when available
//! - **Sentry layer**: only when `SENTRY_DSN` is set
//!
//! The returned [`TracingGuards`] must outlive every log call; dropping it
//! flushes the file writer and Sentry.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Keeps the background log writers alive.
#[must_use = "dropping the guards stops file and Sentry logging"]
pub struct TracingGuards {
    _file: Option<WorkerGuard>,
    _sentry: Option<sentry::ClientInitGuard>,
}

const LOG_FILE: &str = "orphanages.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level for the workspace crates
/// - HTTP internals stay at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("orphanage_directory_lib={level}"),
        format!("orphanages={level}"),
        format!("od_app={level}"),
        format!("od_infra={level}"),
        format!("od_core={level}"),
        "hyper=warn".to_string(),
        "reqwest=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber with appropriate configuration
///
/// `RUST_LOG` replaces the default directives when set. File logging is
/// skipped with a note on stderr if the data directory is unavailable.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<TracingGuards> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let sentry_guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                traces_sample_rate: 1.0,
                ..Default::default()
            },
        ))
    });
    let sentry_layer = sentry_guard.as_ref().map(|_| sentry_tracing::layer());

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let (file_writer, file_guard) = match logs_dir().and_then(|dir| build_file_writer(&dir)) {
        Ok((writer, guard)) => (Some(writer), Some(guard)),
        Err(err) => {
            eprintln!("Failed to initialize file logging, logging to stderr only: {err}");
            (None, None)
        }
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(sentry_layer)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(TracingGuards {
        _file: file_guard,
        _sentry: sentry_guard,
    })
}

fn logs_dir() -> anyhow::Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("orphanages").join("logs"))
        .ok_or_else(|| anyhow::anyhow!("No local data directory on this platform"))
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(file_appender))
}
