//! Configuration default values and constants

/// Network address constants used as fallbacks outside the main `Config`
/// surface (e.g. `SessionConfig::default()`).
pub mod network {
    /// Localhost IP address
    pub const LOCALHOST: &str = "127.0.0.1";
    /// Default localhost with SNMP port
    pub const LOCALHOST_SNMP: &str = "127.0.0.1:161";
}

/// Database configuration constants
pub mod database {
    /// Default database host
    pub const DEFAULT_DB_HOST: &str = "localhost";
    /// Default database port
    pub const DEFAULT_DB_PORT: u16 = 5432;
    /// Default database username
    pub const DEFAULT_DB_USER: &str = "nms_user";
    /// Default database name
    pub const DEFAULT_DB_NAME: &str = "nms_db";
    /// Default connection pool size
    pub const DEFAULT_DB_POOL_SIZE: u32 = 10;
    /// Default maximum overflow connections
    pub const DEFAULT_DB_MAX_OVERFLOW: u32 = 20;
}

/// SNMP configuration constants
pub mod snmp {
    /// Default SNMP port
    pub const SNMP_DEFAULT_PORT: u16 = 161;
    /// Default SNMP trap port
    pub const SNMP_TRAP_PORT: u16 = 162;
    /// Default SNMP timeout in seconds
    pub const DEFAULT_SNMP_TIMEOUT_SECONDS: u64 = 5;
    /// Default SNMP retries
    pub const DEFAULT_SNMP_RETRIES: u8 = 3;
    /// Default maximum concurrent pollers
    pub const DEFAULT_MAX_CONCURRENT_POLLERS: usize = 20;
    /// Default `GETBULK` enablement
    pub const DEFAULT_BULK_WALK_ENABLED: bool = true;
}

/// Polling interval constants, in seconds
pub mod polling {
    /// Default interface metrics polling interval
    pub const DEFAULT_INTERFACE_POLL_INTERVAL: u64 = 30;
    /// Default CPU/memory/temperature polling interval
    pub const DEFAULT_CPU_MEMORY_POLL_INTERVAL: u64 = 300;
    /// Default inventory polling interval
    pub const DEFAULT_INVENTORY_POLL_INTERVAL: u64 = 3_600;
}

/// Alarm threshold constants
pub mod alarm {
    /// Default CPU utilization alarm threshold
    pub const DEFAULT_CPU_THRESHOLD: f64 = 80.0;
    /// Default memory utilization alarm threshold
    pub const DEFAULT_MEMORY_THRESHOLD: f64 = 80.0;
    /// Default temperature alarm threshold
    pub const DEFAULT_TEMPERATURE_THRESHOLD: f64 = 80.0;
}

/// Upstream API constants
pub mod api {
    /// Default backend base URL
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
    /// Default per-request timeout in seconds
    pub const DEFAULT_API_TIMEOUT_SECONDS: u64 = 10;
    /// Default retry attempts
    pub const DEFAULT_API_RETRY_ATTEMPTS: u8 = 3;
}

/// Logging configuration constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "info";
    /// Default log format
    pub const DEFAULT_LOG_FORMAT: &str = "pretty";
}

/// Top-level environment constants
pub mod environment {
    /// Default environment name
    pub const DEFAULT_ENV: &str = "development";
}
