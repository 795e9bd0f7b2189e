//! NMS polling agent
//!
//! Loads configuration, wires the poller/alarm engine/repository/API client,
//! registers every polling-enabled device, and runs the orchestration loop.

mod orchestrator;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use nms_core::config::Config;
#[cfg(not(test))]
use nms_core::logging::init_tracing;

/// SNMP network monitoring agent
#[derive(Parser, Debug)]
#[command(name = "nms-agent")]
#[command(about = "Polls a device fleet over SNMP, evaluates alarms, and mirrors state upstream")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format override (pretty, compact, json)
    #[arg(long)]
    log_format: Option<String>,
}

/// Load configuration from file or environment with fallback to defaults
fn load_configuration(args: &Args) -> Result<Config> {
    if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        Ok(Config::from_file(config_path.clone())?)
    } else {
        Ok(Config::from_env().unwrap_or_else(|_| {
            info!("Using default configuration");
            Config::default()
        }))
    }
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(log_level) = &args.log_level {
        config.logging.level = log_level.clone();
    }
    if let Some(log_format) = &args.log_format {
        config.logging.format = log_format.clone();
    }
}

/// Initialize configuration, logging, and the database connection.
async fn initialize_app(args: Args) -> Result<(Config, nms_core::database::DatabaseManager)> {
    let mut config = load_configuration(&args)?;
    apply_cli_overrides(&mut config, &args);
    config.validate()?;

    #[cfg(not(test))]
    init_tracing(&config.logging)?;

    info!(
        environment = %config.environment,
        database_host = %config.database.host,
        "starting NMS agent"
    );

    let db = nms_core::database::DatabaseManager::new(&config.database).await?;
    migration::Migrator::up(db.connection(), None).await?;

    Ok((config, db))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let (config, db) = initialize_app(args).await?;

    orchestrator::run(config, db).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["nms-agent"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.log_format.is_none());
    }

    #[test]
    fn test_args_with_config_file() {
        let args = Args::try_parse_from(["nms-agent", "--config", "/path/to/config.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_args_with_log_level() {
        let args = Args::try_parse_from(["nms-agent", "--log-level", "debug"]).unwrap();
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_args_with_log_format() {
        let args = Args::try_parse_from(["nms-agent", "--log-format", "json"]).unwrap();
        assert_eq!(args.log_format, Some("json".to_string()));
    }

    #[test]
    fn test_args_short_flag() {
        let args = Args::try_parse_from(["nms-agent", "-c", "/path/to/config.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/path/to/config.toml")));
    }

    #[test]
    fn test_apply_cli_overrides_all() {
        let mut config = Config::default();
        let args = Args {
            config: None,
            log_level: Some("trace".to_string()),
            log_format: Some("json".to_string()),
        };

        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_apply_cli_overrides_none() {
        let mut config = Config::default();
        let original_level = config.logging.level.clone();
        let original_format = config.logging.format.clone();

        let args = Args {
            config: None,
            log_level: None,
            log_format: None,
        };

        apply_cli_overrides(&mut config, &args);

        assert_eq!(config.logging.level, original_level);
        assert_eq!(config.logging.format, original_format);
    }

    #[test]
    fn test_load_configuration_file_not_found() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/config.toml")),
            log_level: None,
            log_format: None,
        };

        let result = load_configuration(&args);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_configuration_from_env_fallback() {
        let args = Args {
            config: None,
            log_level: None,
            log_format: None,
        };

        let config = load_configuration(&args).unwrap();
        let default_config = Config::default();
        assert_eq!(config.environment, default_config.environment);
    }

    #[test]
    fn test_args_version_flag() {
        let result = Args::try_parse_from(["nms-agent", "--version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_help_flag() {
        let result = Args::try_parse_from(["nms-agent", "--help"]);
        assert!(result.is_err());
    }
}
