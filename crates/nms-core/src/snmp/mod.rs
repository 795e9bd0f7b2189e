//! SNMP session layer: per-device session with reachability probing,
//! scalar/multi-OID fetches, and subtree walks.
//!
//! # Architecture
//!
//! - [`config`] - session configuration and credentials
//! - [`session`] - the session itself (probe/get/get_multiple/walk/close)
//! - [`values`] - normalized SNMP value representation

use std::time::Duration;
use thiserror::Error;

pub mod config;
pub mod session;
pub mod values;

pub use config::{SessionConfig, SnmpCredentials};
pub use session::{SessionOutcome, SnmpSession};
pub use values::{SnmpValue, safe_float, safe_int};

/// SNMP error types
#[derive(Error, Debug)]
pub enum SnmpError {
    /// Network connection error
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),

    /// SNMP protocol error
    #[error("SNMP protocol error: {message}")]
    Protocol {
        /// The protocol error message
        message: String,
    },

    /// Timeout error
    #[error("SNMP timeout after {duration:?}")]
    Timeout {
        /// The timeout duration that was exceeded
        duration: Duration,
    },

    /// Authentication failure
    #[error("SNMP authentication failed")]
    Authentication,

    /// Invalid OID format
    #[error("Invalid OID: {oid}")]
    InvalidOid {
        /// The invalid OID string
        oid: String,
    },
}

/// SNMP operation result
pub type SnmpResult<T> = std::result::Result<T, SnmpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn snmp_value_to_string() {
        assert_eq!(SnmpValue::Integer(42).to_string(), "42");
        assert_eq!(SnmpValue::String("test".to_string()).to_string(), "test");
        assert_eq!(
            SnmpValue::IpAddress(IpAddr::V4(Ipv4Addr::LOCALHOST)).to_string(),
            "127.0.0.1"
        );
        assert_eq!(SnmpValue::Counter32(1000).to_string(), "1000");
        assert_eq!(SnmpValue::Null.to_string(), "null");
        assert_eq!(SnmpValue::NoSuchObject.to_string(), "noSuchObject");
    }

    #[test]
    fn snmp_value_is_error() {
        assert!(!SnmpValue::Integer(42).is_error());
        assert!(!SnmpValue::String("test".to_string()).is_error());
        assert!(SnmpValue::NoSuchObject.is_error());
        assert!(SnmpValue::NoSuchInstance.is_error());
        assert!(SnmpValue::EndOfMibView.is_error());
    }

    #[test]
    fn session_config_default() {
        let config = SessionConfig::default();
        assert_eq!(config.version, 2);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.retries, 3);
    }

    #[tokio::test]
    async fn unreachable_session_get_multiple_returns_all_null() {
        let mut config = SessionConfig::default();
        // Port 1 is reserved and should refuse the connection immediately.
        config.address = "127.0.0.1:1".parse().unwrap();
        config.timeout = Duration::from_millis(200);
        let session = SnmpSession::new(config);

        let result = session
            .get_multiple(&["1.3.6.1.2.1.1.1.0", "1.3.6.1.2.1.1.5.0"])
            .await;

        assert_eq!(result.len(), 2);
        assert!(result.values().all(Option::is_none));
    }
}
