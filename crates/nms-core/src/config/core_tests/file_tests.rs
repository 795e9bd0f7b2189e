//! Tests for configuration file loading and saving

use super::super::core::Config;
use tempfile::NamedTempFile;

#[test]
fn test_config_from_file_valid_toml() {
    let toml_content = r#"
environment = "production"
debug = false

[database]
host = "db.internal"
port = 5432
username = "nms_user"
password = "hunter2"
database = "nms_db"
pool_size = 10
max_overflow = 20

[logging]
level = "debug"
format = "json"

[snmp]
timeout = 10
retries = 5
max_concurrent_pollers = 20
bulk_walk_enabled = true

[polling]
interface_poll_interval = 30
cpu_memory_poll_interval = 300
inventory_poll_interval = 3600

[alarm]
cpu_threshold = 80.0
memory_threshold = 80.0
temperature_threshold = 80.0

[api]
base_url = "http://localhost:3000"
timeout = 10
retry_attempts = 3
"#;

    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    std::fs::write(temp_file.path(), toml_content).unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.environment, "production");
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.password, "hunter2");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.snmp.timeout, 10);
    assert_eq!(config.snmp.retries, 5);
}

#[test]
fn test_config_from_file_nonexistent() {
    let result = Config::from_file("/nonexistent/path/config.toml");
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.to_string().contains("Failed to load configuration"));
}

#[test]
fn test_config_from_file_invalid_toml() {
    let invalid_toml = "invalid toml content [[[";
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    std::fs::write(temp_file.path(), invalid_toml).unwrap();

    let result = Config::from_file(temp_file.path());
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.to_string().contains("Failed to load configuration"));
}

#[test]
fn test_config_from_file_invalid_structure() {
    let invalid_structure = r#"
[database]
host = "db.internal"
port = "not_a_number"
"#;
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    std::fs::write(temp_file.path(), invalid_structure).unwrap();

    let result = Config::from_file(temp_file.path());
    assert!(result.is_err());
}

#[test]
fn test_config_save_to_file() {
    let config = Config::new();
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();

    let result = config.save_to_file(temp_file.path());
    assert!(result.is_ok());

    let content = std::fs::read_to_string(temp_file.path()).unwrap();
    assert!(content.contains("[database]"));
    assert!(content.contains("[logging]"));
}

#[test]
fn test_config_save_to_file_invalid_path() {
    let config = Config::new();
    let result = config.save_to_file("/invalid/path/that/does/not/exist/config.toml");
    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.to_string().contains("Failed to write config"));
}

#[test]
fn test_config_roundtrip_save_and_load() {
    let original_config = Config::new();
    let temp_file = NamedTempFile::with_suffix(".toml").unwrap();

    original_config.save_to_file(temp_file.path()).unwrap();
    let loaded_config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(original_config.database.host, loaded_config.database.host);
    assert_eq!(original_config.logging.level, loaded_config.logging.level);
    assert_eq!(original_config.snmp.timeout, loaded_config.snmp.timeout);
}
