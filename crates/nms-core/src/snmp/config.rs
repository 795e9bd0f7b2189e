//! SNMP configuration types

use crate::config::{defaults, network};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// SNMP credentials for authentication.
///
/// `SNMPv3` is out of scope; only community-based v1/v2c auth is supported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SnmpCredentials {
    /// SNMPv1/v2c community string
    Community {
        /// Community string (read-only or read-write)
        community: String,
    },
}

impl Default for SnmpCredentials {
    fn default() -> Self {
        Self::Community {
            community: "public".to_string(),
        }
    }
}

/// Configuration for SNMP session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Target address and port
    pub address: SocketAddr,
    /// SNMP version (1 or 2; `SNMPv3` is not implemented)
    pub version: u8,
    /// Authentication credentials
    pub credentials: SnmpCredentials,
    /// Request timeout
    pub timeout: Duration,
    /// Number of retries
    pub retries: u32,
    /// Maximum number of variables per request
    pub max_vars_per_request: usize,
    /// Prefer GETBULK over GETNEXT for subtree walks
    pub bulk_walk_enabled: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            address: network::parse_socket_addr(defaults::network::LOCALHOST_SNMP)
                .expect("Default LOCALHOST_SNMP constant should always be valid"),
            version: 2,
            credentials: SnmpCredentials::default(),
            timeout: Duration::from_secs(5),
            retries: 3,
            max_vars_per_request: 10,
            bulk_walk_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests;
