//! Tracing/logging initialization for the agent.
//!
//! Supports pretty, compact, and JSON output, optional file logging with
//! daily rotation, and falls back to `RUST_LOG` when no explicit level is
//! configured.

use crate::config::LoggingConfig;
use crate::error::{Error, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initializes the global tracing subscriber from the given configuration.
///
/// # Errors
///
/// Returns an error if the configured log level is invalid or the log file's
/// parent directory cannot be created.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            Error::config_with_source(format!("Invalid log level '{}'", config.level), e)
        })?;

    match config.format.as_str() {
        "json" => init_with_format(env_filter, config.file.as_deref(), fmt::layer().json())?,
        "compact" => init_with_format(
            env_filter,
            config.file.as_deref(),
            fmt::layer().compact().with_target(false),
        )?,
        _ => init_with_format(
            env_filter,
            config.file.as_deref(),
            fmt::layer().pretty().with_target(true),
        )?,
    }

    Ok(())
}

fn init_with_format<L>(env_filter: EnvFilter, file: Option<&str>, layer: L) -> Result<()>
where
    L: tracing_subscriber::Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    if let Some(file_path) = file {
        let appender = create_file_appender(file_path)?;
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.with_writer(appender))
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).with(layer).init();
    }
    Ok(())
}

fn create_file_appender(file_path: &str) -> Result<tracing_appender::rolling::RollingFileAppender> {
    let path = Path::new(file_path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::config_with_source(
                    format!("Failed to create log directory '{}'", parent.display()),
                    e,
                )
            })?;
        }
    }

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("nms-agent.log");
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));

    Ok(tracing_appender::rolling::daily(dir, file_name))
}

/// Validates that a log level string is one `tracing` understands.
///
/// # Errors
///
/// Returns an error if the level is not one of trace/debug/info/warn/error.
pub fn validate_log_level(level: &str) -> Result<()> {
    match level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(Error::validation(
            "log_level",
            "Must be one of: trace, debug, info, warn, error",
        )),
    }
}

/// Validates that a log format string is one this module supports.
///
/// # Errors
///
/// Returns an error if the format is not one of json/pretty/compact.
pub fn validate_log_format(format: &str) -> Result<()> {
    match format {
        "json" | "pretty" | "compact" => Ok(()),
        _ => Err(Error::validation(
            "log_format",
            "Must be one of: json, pretty, compact",
        )),
    }
}

/// Structured span for timing a named operation.
#[macro_export]
macro_rules! log_context {
    ($operation:expr) => {
        tracing::info_span!("operation", op = %$operation)
    };
    ($operation:expr, $($key:tt = $value:expr),*) => {
        tracing::info_span!("operation", op = %$operation, $($key = %$value),*)
    };
}

/// Logs start/end of an operation with timing, inside a [`log_context!`] span.
#[macro_export]
macro_rules! timed_operation {
    ($operation:expr, $code:block) => {{
        let _span = $crate::log_context!($operation).entered();
        let start = std::time::Instant::now();
        tracing::info!("operation started");

        let result = $code;

        let duration = start.elapsed();
        match &result {
            Ok(_) => tracing::info!(duration_ms = %duration.as_millis(), "operation completed"),
            Err(e) => tracing::error!(duration_ms = %duration.as_millis(), error = %e, "operation failed"),
        }

        result
    }};
}

/// Structured field logging for repository operations.
#[macro_export]
macro_rules! log_database_operation {
    ($operation:expr, $table:expr) => {
        tracing::debug!(operation = %$operation, table = %$table, component = "database", "database operation");
    };
    ($operation:expr, $table:expr, $($key:tt = $value:expr),*) => {
        tracing::debug!(operation = %$operation, table = %$table, component = "database", $($key = %$value),*, "database operation");
    };
}

/// Structured field logging for SNMP session operations.
#[macro_export]
macro_rules! log_snmp_operation {
    ($operation:expr, $target:expr) => {
        tracing::debug!(operation = %$operation, target = %$target, component = "snmp", "snmp operation");
    };
    ($operation:expr, $target:expr, $($key:tt = $value:expr),*) => {
        tracing::debug!(operation = %$operation, target = %$target, component = "snmp", $($key = %$value),*, "snmp operation");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("trace").is_ok());
        assert!(validate_log_level("INFO").is_ok());
        assert!(validate_log_level("invalid").is_err());
    }

    #[test]
    fn test_validate_log_format() {
        assert!(validate_log_format("json").is_ok());
        assert!(validate_log_format("pretty").is_ok());
        assert!(validate_log_format("compact").is_ok());
        assert!(validate_log_format("invalid").is_err());
    }

    #[test]
    fn test_file_appender_creation() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let file_path = temp_file.path().to_string_lossy().to_string();

        assert!(create_file_appender(&file_path).is_ok());
    }

    #[test]
    fn test_tracing_macros_compile() {
        let _span = log_context!("test_operation");
        let result: Result<i32> = timed_operation!("test_timed", { Ok(42) });
        assert_eq!(result.unwrap(), 42);
    }
}
