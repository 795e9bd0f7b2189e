//! Tests for configuration validation

use super::super::core::Config;

#[test]
fn test_config_validate_valid_config() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_empty_database_host() {
    let mut config = Config::default();
    config.database.host = String::new();

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Database host cannot be empty")
    );
}

#[test]
fn test_config_validate_zero_database_port() {
    let mut config = Config::default();
    config.database.port = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Database port must be greater than 0")
    );
}

#[test]
fn test_config_validate_production_requires_password() {
    let mut config = Config::default();
    config.environment = "production".to_string();
    config.database.password = String::new();

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Database password cannot be empty in production")
    );

    config.database.password = "hunter2".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validate_zero_database_pool_size() {
    let mut config = Config::default();
    config.database.pool_size = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Database pool_size must be greater than 0")
    );
}

#[test]
fn test_config_validate_zero_snmp_timeout() {
    let mut config = Config::default();
    config.snmp.timeout = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("SNMP timeout must be greater than 0")
    );
}

#[test]
fn test_config_validate_zero_max_concurrent_pollers() {
    let mut config = Config::default();
    config.snmp.max_concurrent_pollers = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("max_concurrent_pollers must be greater than 0")
    );
}

#[test]
fn test_config_validate_zero_polling_interval() {
    let mut config = Config::default();
    config.polling.interface_poll_interval = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Polling intervals must be greater than 0")
    );
}

#[test]
fn test_config_validate_empty_api_base_url() {
    let mut config = Config::default();
    config.api.base_url = String::new();

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("API base_url cannot be empty")
    );
}

#[test]
fn test_config_validate_zero_api_timeout() {
    let mut config = Config::default();
    config.api.timeout = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("API timeout must be greater than 0")
    );
}
