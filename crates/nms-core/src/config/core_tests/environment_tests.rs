//! Tests for environment variable handling

use super::super::core::Config;
use std::collections::HashMap;
use std::env;

#[test]
fn test_config_from_env_empty_uses_defaults() {
    let env_source = |_key: &str| Err(env::VarError::NotPresent);
    let config = Config::from_env_with_source(env_source).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_from_env_overrides_selected_fields() {
    let mut env_vars = HashMap::new();
    env_vars.insert("DB_HOST", "db.internal");
    env_vars.insert("NMS_LOG_LEVEL", "debug");
    env_vars.insert("CPU_THRESHOLD", "90.0");

    let env_source = |key: &str| {
        env_vars
            .get(key)
            .map(|v| (*v).to_string())
            .ok_or(env::VarError::NotPresent)
    };

    let config = Config::from_env_with_source(env_source).unwrap();
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.alarm.cpu_threshold, 90.0);
    // Everything left unset still carries its default.
    assert_eq!(config.api.base_url, Config::default().api.base_url);
}

#[test]
fn test_config_from_env_invalid_values() {
    let mut env_vars = HashMap::new();
    env_vars.insert("DB_PORT", "not_a_port");

    let env_source = |key: &str| {
        env_vars
            .get(key)
            .map(|v| (*v).to_string())
            .ok_or(env::VarError::NotPresent)
    };

    let result = Config::from_env_with_source(env_source);
    assert!(result.is_err());
}

#[test]
fn test_collect_env_vars_empty() {
    let env_source = |_key: &str| Err(env::VarError::NotPresent);
    let vars = super::super::core::collect_env_vars(&env_source);
    assert!(vars.is_empty());
}

#[test]
fn test_collect_env_vars_with_values() {
    let mut env_vars = HashMap::new();
    env_vars.insert("DB_HOST", "db.internal");
    env_vars.insert("NMS_LOG_LEVEL", "debug");
    env_vars.insert("SNMP_TIMEOUT", "10");

    let env_source = |key: &str| {
        env_vars
            .get(key)
            .map(|v| (*v).to_string())
            .ok_or(env::VarError::NotPresent)
    };

    let vars = super::super::core::collect_env_vars(&env_source);
    assert_eq!(vars.len(), 3);

    let vars_map: HashMap<String, String> = vars.into_iter().collect();
    assert_eq!(
        vars_map.get("database.host"),
        Some(&"db.internal".to_string())
    );
    assert_eq!(vars_map.get("logging.level"), Some(&"debug".to_string()));
    assert_eq!(vars_map.get("snmp.timeout"), Some(&"10".to_string()));
}

#[test]
fn test_collect_env_vars_partial_values() {
    let mut env_vars = HashMap::new();
    env_vars.insert("DB_HOST", "db.internal");

    let env_source = |key: &str| {
        env_vars
            .get(key)
            .map(|v| (*v).to_string())
            .ok_or(env::VarError::NotPresent)
    };

    let vars = super::super::core::collect_env_vars(&env_source);
    assert_eq!(vars.len(), 1);

    let vars_map: HashMap<String, String> = vars.into_iter().collect();
    assert_eq!(
        vars_map.get("database.host"),
        Some(&"db.internal".to_string())
    );
}
