use super::*;

#[test]
fn session_config_default_matches_spec_defaults() {
    let config = SessionConfig::default();
    assert_eq!(config.version, 2);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.retries, 3);
    assert!(config.bulk_walk_enabled);
}

#[test]
fn credentials_default_to_public_community() {
    let SnmpCredentials::Community { community } = SnmpCredentials::default();
    assert_eq!(community, "public");
}
