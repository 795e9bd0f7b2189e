use super::Error;

#[test]
fn config_error_carries_message() {
    let err = Error::config("missing DB_PASSWORD");
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().contains("missing DB_PASSWORD"));
}

#[test]
fn snmp_error_carries_target() {
    let err = Error::snmp("10.0.0.1", "timeout");
    assert_eq!(err.error_code(), "SNMP_ERROR");
    assert!(err.to_string().contains("10.0.0.1"));
}

#[test]
fn validation_error_with_value_reports_both() {
    let err = Error::validation_with_value("admin_status", "unexpected code", "7");
    let msg = err.user_message();
    assert!(msg.contains("admin_status"));
    assert!(msg.contains('7'));
}

#[test]
fn io_conversion_preserves_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io_err.into();
    assert_eq!(err.error_code(), "IO_ERROR");
}
