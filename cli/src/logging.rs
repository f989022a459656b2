//! Tracing setup for the `pizzabot` binary. Logs go to stderr and/or a per-process
//! file; stdout is reserved for route output.
use std::path::PathBuf;

use pizzabot_core::api as core_api;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

/// `RUST_LOG` wins when set and non-blank, otherwise the configured level.
pub fn build_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, core_api::CliError> {
    let directives = rust_log
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(level);
    EnvFilter::try_new(directives)
        .map_err(|e| core_api::CliError::Config(format!("invalid log filter '{directives}': {e}")))
}

/// Configured directory, else `~/.pizzabot/logs`, else `<tmp>/pizzabot`.
pub fn log_dir(logging: &core_api::LoggingConfig) -> PathBuf {
    if let Some(dir) = logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return PathBuf::from(dir);
    }

    core_api::get_pizzabot_data_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|_| std::env::temp_dir().join("pizzabot"))
}

pub fn log_file_name() -> String {
    format!("pizzabot.{}.log", std::process::id())
}

pub fn init_tracing(logging: &core_api::LoggingConfig) -> Result<(), core_api::CliError> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        return Err(core_api::CliError::Config(
            "logging enabled but both console and file are off".to_string(),
        ));
    }

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(&logging.level, rust_log.as_deref())?;

    let file_layer = if logging.file {
        let dir = log_dir(logging);
        std::fs::create_dir_all(&dir).map_err(|e| {
            core_api::CliError::Config(format!("create log dir {}: {e}", dir.display()))
        })?;
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(&dir, log_file_name()));
        let _ = LOG_GUARD.set(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
    } else {
        None
    };

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
