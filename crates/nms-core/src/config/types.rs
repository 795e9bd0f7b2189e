//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database username.
    pub username: String,
    /// Database password. Must be non-empty outside development.
    pub password: String,
    /// Database name.
    pub database: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Maximum overflow connections beyond `pool_size`.
    pub max_overflow: u32,
}

impl DatabaseConfig {
    /// Build the Postgres connection string for this configuration.
    #[must_use]
    pub fn connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
    /// Log format (pretty, compact, json).
    pub format: String,
    /// Optional log file path. When set, logs are written there in addition
    /// to stdout.
    pub file: Option<String>,
}

/// SNMP polling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnmpConfig {
    /// Per-request timeout in seconds.
    pub timeout: u64,
    /// Number of retries per request.
    pub retries: u8,
    /// Maximum number of devices polled concurrently.
    pub max_concurrent_pollers: usize,
    /// Whether `GETBULK` is used for table walks.
    pub bulk_walk_enabled: bool,
}

/// Polling cycle intervals, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Interface metrics polling interval.
    pub interface_poll_interval: u64,
    /// CPU/memory/temperature polling interval.
    pub cpu_memory_poll_interval: u64,
    /// Inventory polling interval.
    pub inventory_poll_interval: u64,
}

/// Alarm evaluation thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmConfig {
    /// CPU utilization percentage at/above which `cpu_high` fires.
    pub cpu_threshold: f64,
    /// Memory utilization percentage at/above which `memory_high` fires.
    pub memory_threshold: f64,
    /// Temperature in Celsius at/above which `temperature_high` fires.
    pub temperature_threshold: f64,
}

/// Upstream backend API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
    /// Number of retry attempts for failed requests.
    pub retry_attempts: u8,
}
