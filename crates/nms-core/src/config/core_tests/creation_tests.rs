//! Tests for configuration creation and defaults

use super::super::core::Config;
use super::super::defaults;

#[test]
fn test_config_new() {
    let config = Config::new();
    assert_eq!(config.environment, defaults::environment::DEFAULT_ENV);
    assert_eq!(config.logging.level, defaults::logging::DEFAULT_LOG_LEVEL);
    assert_eq!(config.database.host, defaults::database::DEFAULT_DB_HOST);
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.database.host, defaults::database::DEFAULT_DB_HOST);
    assert_eq!(config.database.port, defaults::database::DEFAULT_DB_PORT);
    assert_eq!(
        config.database.username,
        defaults::database::DEFAULT_DB_USER
    );
    assert!(config.database.password.is_empty());
    assert_eq!(
        config.database.pool_size,
        defaults::database::DEFAULT_DB_POOL_SIZE
    );
    assert_eq!(
        config.database.max_overflow,
        defaults::database::DEFAULT_DB_MAX_OVERFLOW
    );

    assert_eq!(config.logging.level, defaults::logging::DEFAULT_LOG_LEVEL);
    assert_eq!(config.logging.format, defaults::logging::DEFAULT_LOG_FORMAT);
    assert!(config.logging.file.is_none());

    assert_eq!(
        config.snmp.timeout,
        defaults::snmp::DEFAULT_SNMP_TIMEOUT_SECONDS
    );
    assert_eq!(config.snmp.retries, defaults::snmp::DEFAULT_SNMP_RETRIES);
    assert_eq!(
        config.snmp.max_concurrent_pollers,
        defaults::snmp::DEFAULT_MAX_CONCURRENT_POLLERS
    );
    assert!(config.snmp.bulk_walk_enabled);

    assert_eq!(
        config.polling.interface_poll_interval,
        defaults::polling::DEFAULT_INTERFACE_POLL_INTERVAL
    );
    assert_eq!(
        config.polling.cpu_memory_poll_interval,
        defaults::polling::DEFAULT_CPU_MEMORY_POLL_INTERVAL
    );
    assert_eq!(
        config.polling.inventory_poll_interval,
        defaults::polling::DEFAULT_INVENTORY_POLL_INTERVAL
    );

    assert_eq!(
        config.alarm.cpu_threshold,
        defaults::alarm::DEFAULT_CPU_THRESHOLD
    );
    assert_eq!(
        config.alarm.memory_threshold,
        defaults::alarm::DEFAULT_MEMORY_THRESHOLD
    );
    assert_eq!(
        config.alarm.temperature_threshold,
        defaults::alarm::DEFAULT_TEMPERATURE_THRESHOLD
    );

    assert_eq!(config.api.base_url, defaults::api::DEFAULT_API_BASE_URL);
    assert_eq!(
        config.api.timeout,
        defaults::api::DEFAULT_API_TIMEOUT_SECONDS
    );
    assert_eq!(
        config.api.retry_attempts,
        defaults::api::DEFAULT_API_RETRY_ATTEMPTS
    );

    assert!(!config.debug);
    assert!(config.vendor_oid_config_path.is_none());
}
