//! Core configuration structure and implementations

use crate::error::{Error, Result};
use config::{Config as ConfigBuilder, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::defaults;
use super::types::{AlarmConfig, ApiConfig, DatabaseConfig, LoggingConfig, PollingConfig, SnmpConfig};

/// Main configuration structure for the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deployment environment, e.g. `"development"` or `"production"`.
    pub environment: String,
    /// Verbose/debug mode toggle.
    pub debug: bool,
    /// Database configuration settings
    pub database: DatabaseConfig,
    /// Logging configuration settings
    pub logging: LoggingConfig,
    /// SNMP configuration settings
    pub snmp: SnmpConfig,
    /// Polling interval settings
    pub polling: PollingConfig,
    /// Alarm threshold settings
    pub alarm: AlarmConfig,
    /// Upstream backend API settings
    pub api: ApiConfig,
    /// Optional path to a vendor OID override file.
    pub vendor_oid_config_path: Option<String>,
}

impl Config {
    /// Creates a new configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file, then layers environment
    /// variable overrides on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file path contains invalid UTF-8, the file cannot be read,
    /// or the configuration cannot be parsed as valid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            Error::config(format!(
                "Configuration file path contains invalid UTF-8: {}",
                path.as_ref().display()
            ))
        })?;

        let mut builder = ConfigBuilder::builder().add_source(File::with_name(path_str));

        for (key, value) in collect_env_vars(&std::env::var) {
            builder = builder.set_override(&key, value).map_err(|e| {
                Error::config(format!("Failed to set config override for {key}: {e}"))
            })?;
        }

        builder
            .build()
            .map_err(|e| {
                Error::config(format!(
                    "Failed to load configuration from '{path_str}': {e}"
                ))
            })?
            .try_deserialize()
            .map_err(|e| {
                Error::config(format!(
                    "Failed to parse configuration from '{path_str}': {e}"
                ))
            })
    }

    /// Loads configuration from defaults plus environment variables,
    /// optionally layering a TOML file named by `NMS_CONFIG_FILE` first.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables cannot be parsed into valid configuration values
    /// or if the resulting configuration cannot be deserialized.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_source(std::env::var)
    }

    /// Loads configuration from environment variables using a custom source function
    ///
    /// # Errors
    ///
    /// Returns an error if configuration overrides cannot be set, the configuration cannot be built,
    /// or the resulting configuration cannot be deserialized.
    pub fn from_env_with_source<F>(env_source: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| Error::config(format!("Failed to serialize default config: {e}")))?;

        let mut builder = ConfigBuilder::builder().add_source(File::from_str(
            &defaults,
            config::FileFormat::Toml,
        ));

        if let Ok(path) = env_source("NMS_CONFIG_FILE") {
            builder = builder.add_source(File::with_name(&path));
        }

        for (key, value) in collect_env_vars(&env_source) {
            builder = builder.set_override(&key, value).map_err(|e| {
                Error::config(format!("Failed to set config override for {key}: {e}"))
            })?;
        }

        builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config from environment: {e}")))?
            .try_deserialize()
            .map_err(|e| {
                Error::config(format!(
                    "Failed to deserialize config from environment: {e}"
                ))
            })
    }

    /// Saves configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML
    /// or if the file cannot be written to the specified path.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path.as_ref(), toml_content).map_err(|e| {
            Error::config(format!(
                "Failed to write config to {}: {e}",
                path.as_ref().display()
            ))
        })?;

        Ok(())
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid, such as a
    /// missing production database password, zero values where positive
    /// values are required, or an empty upstream API base URL.
    pub fn validate(&self) -> Result<()> {
        self.validate_database()?;
        self.validate_snmp()?;
        self.validate_polling()?;
        self.validate_api()?;
        Ok(())
    }

    /// `true` when `environment` is `"production"`.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    fn validate_database(&self) -> Result<()> {
        if self.database.host.is_empty() {
            return Err(Error::config("Database host cannot be empty"));
        }
        if self.database.port == 0 {
            return Err(Error::config("Database port must be greater than 0"));
        }
        if self.is_production() && self.database.password.is_empty() {
            return Err(Error::config(
                "Database password cannot be empty in production",
            ));
        }
        if self.database.pool_size == 0 {
            return Err(Error::config("Database pool_size must be greater than 0"));
        }
        Ok(())
    }

    fn validate_snmp(&self) -> Result<()> {
        if self.snmp.timeout == 0 {
            return Err(Error::config("SNMP timeout must be greater than 0"));
        }
        if self.snmp.max_concurrent_pollers == 0 {
            return Err(Error::config(
                "SNMP max_concurrent_pollers must be greater than 0",
            ));
        }
        Ok(())
    }

    fn validate_polling(&self) -> Result<()> {
        if self.polling.interface_poll_interval == 0
            || self.polling.cpu_memory_poll_interval == 0
            || self.polling.inventory_poll_interval == 0
        {
            return Err(Error::config("Polling intervals must be greater than 0"));
        }
        Ok(())
    }

    fn validate_api(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(Error::config("API base_url cannot be empty"));
        }
        if self.api.timeout == 0 {
            return Err(Error::config("API timeout must be greater than 0"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: defaults::environment::DEFAULT_ENV.to_string(),
            debug: false,
            database: DatabaseConfig {
                host: defaults::database::DEFAULT_DB_HOST.to_string(),
                port: defaults::database::DEFAULT_DB_PORT,
                username: defaults::database::DEFAULT_DB_USER.to_string(),
                password: String::new(),
                database: defaults::database::DEFAULT_DB_NAME.to_string(),
                pool_size: defaults::database::DEFAULT_DB_POOL_SIZE,
                max_overflow: defaults::database::DEFAULT_DB_MAX_OVERFLOW,
            },
            logging: LoggingConfig {
                level: defaults::logging::DEFAULT_LOG_LEVEL.to_string(),
                format: defaults::logging::DEFAULT_LOG_FORMAT.to_string(),
                file: None,
            },
            snmp: SnmpConfig {
                timeout: defaults::snmp::DEFAULT_SNMP_TIMEOUT_SECONDS,
                retries: defaults::snmp::DEFAULT_SNMP_RETRIES,
                max_concurrent_pollers: defaults::snmp::DEFAULT_MAX_CONCURRENT_POLLERS,
                bulk_walk_enabled: defaults::snmp::DEFAULT_BULK_WALK_ENABLED,
            },
            polling: PollingConfig {
                interface_poll_interval: defaults::polling::DEFAULT_INTERFACE_POLL_INTERVAL,
                cpu_memory_poll_interval: defaults::polling::DEFAULT_CPU_MEMORY_POLL_INTERVAL,
                inventory_poll_interval: defaults::polling::DEFAULT_INVENTORY_POLL_INTERVAL,
            },
            alarm: AlarmConfig {
                cpu_threshold: defaults::alarm::DEFAULT_CPU_THRESHOLD,
                memory_threshold: defaults::alarm::DEFAULT_MEMORY_THRESHOLD,
                temperature_threshold: defaults::alarm::DEFAULT_TEMPERATURE_THRESHOLD,
            },
            api: ApiConfig {
                base_url: defaults::api::DEFAULT_API_BASE_URL.to_string(),
                timeout: defaults::api::DEFAULT_API_TIMEOUT_SECONDS,
                retry_attempts: defaults::api::DEFAULT_API_RETRY_ATTEMPTS,
            },
            vendor_oid_config_path: None,
        }
    }
}

pub(crate) fn collect_env_vars<F>(env_source: &F) -> Vec<(String, String)>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let env_vars = [
        ("NMS_ENV", "environment"),
        ("NMS_DEBUG", "debug"),
        ("DB_HOST", "database.host"),
        ("DB_PORT", "database.port"),
        ("DB_USER", "database.username"),
        ("DB_PASSWORD", "database.password"),
        ("DB_NAME", "database.database"),
        ("DB_POOL_SIZE", "database.pool_size"),
        ("NMS_LOG_LEVEL", "logging.level"),
        ("NMS_LOG_FORMAT", "logging.format"),
        ("NMS_LOG_FILE", "logging.file"),
        ("SNMP_TIMEOUT", "snmp.timeout"),
        ("SNMP_RETRIES", "snmp.retries"),
        ("MAX_CONCURRENT_POLLERS", "snmp.max_concurrent_pollers"),
        ("INTERFACE_POLL_INTERVAL", "polling.interface_poll_interval"),
        (
            "CPU_MEMORY_POLL_INTERVAL",
            "polling.cpu_memory_poll_interval",
        ),
        ("INVENTORY_POLL_INTERVAL", "polling.inventory_poll_interval"),
        ("CPU_THRESHOLD", "alarm.cpu_threshold"),
        ("MEMORY_THRESHOLD", "alarm.memory_threshold"),
        ("TEMPERATURE_THRESHOLD", "alarm.temperature_threshold"),
        ("BACKEND_API_URL", "api.base_url"),
        ("API_TIMEOUT", "api.timeout"),
        ("VENDOR_OID_CONFIG_PATH", "vendor_oid_config_path"),
    ];

    env_vars
        .iter()
        .filter_map(|(env_key, config_key)| {
            env_source(env_key)
                .ok()
                .map(|value| ((*config_key).to_string(), value))
        })
        .collect()
}
