//! Tests for the database connection string and environment classification

use super::super::core::Config;

#[test]
fn test_config_database_url() {
    let config = Config::default();
    assert!(config.database_url().starts_with("postgres://"));
    assert!(config.database_url().contains(&config.database.host));
}

#[test]
fn test_config_is_development_by_default() {
    let config = Config::default();
    assert!(config.is_development());
    assert!(!config.is_production());
}

#[test]
fn test_config_is_production_when_environment_set() {
    let mut config = Config::default();
    config.environment = "production".to_string();
    assert!(config.is_production());
    assert!(!config.is_development());
}

#[test]
fn test_config_is_not_development_with_remote_host() {
    let mut config = Config::default();
    config.database.host = "db.prod.example.com".to_string();
    assert!(!config.is_development());
}
