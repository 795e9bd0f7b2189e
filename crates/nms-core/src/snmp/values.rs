//! SNMP value types and conversions

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// SNMP value types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnmpValue {
    /// Integer value
    Integer(i64),
    /// String value  
    String(String),
    /// Object identifier
    Oid(String),
    /// IP address
    IpAddress(IpAddr),
    /// Counter (32-bit)
    Counter32(u32),
    /// Counter (64-bit)
    Counter64(u64),
    /// Gauge (32-bit)
    Gauge32(u32),
    /// Time ticks
    TimeTicks(u32),
    /// Opaque data
    Opaque(Vec<u8>),
    /// Null value
    Null,
    /// No such object
    NoSuchObject,
    /// No such instance
    NoSuchInstance,
    /// End of MIB view
    EndOfMibView,
}

impl SnmpValue {
    /// Check if value represents an error condition
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(
            self,
            Self::NoSuchObject | Self::NoSuchInstance | Self::EndOfMibView
        )
    }
}

impl SnmpValue {
    /// Render this value as a plain string, the way the safe-conversion
    /// helpers below expect their input.
    #[must_use]
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

/// Reject any value containing letters outside `.-eE`, treat empty as
/// `default`, otherwise coerce. Used wherever a vendor OID might return a
/// quirky response (an embedded unit string, an error sentinel) that must
/// not abort the poll.
#[must_use]
pub fn safe_int(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else { return default };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return default;
    }
    trimmed.parse::<f64>().map_or(default, |v| v as i64)
}

/// Float counterpart of [`safe_int`].
#[must_use]
pub fn safe_float(raw: Option<&str>, default: f64) -> f64 {
    let Some(raw) = raw else { return default };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    if trimmed
        .chars()
        .any(|c| c.is_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return default;
    }
    trimmed.parse::<f64>().unwrap_or(default)
}

impl std::fmt::Display for SnmpValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Oid(oid) => write!(f, "{oid}"),
            Self::IpAddress(ip) => write!(f, "{ip}"),
            Self::Counter32(c) => write!(f, "{c}"),
            Self::Counter64(c) => write!(f, "{c}"),
            Self::Gauge32(g) => write!(f, "{g}"),
            Self::TimeTicks(t) => write!(f, "{t}"),
            Self::Opaque(data) => write!(f, "Opaque({} bytes)", data.len()),
            Self::Null => write!(f, "null"),
            Self::NoSuchObject => write!(f, "noSuchObject"),
            Self::NoSuchInstance => write!(f, "noSuchInstance"),
            Self::EndOfMibView => write!(f, "endOfMibView"),
        }
    }
}

#[cfg(test)]
mod safe_conversion_tests {
    use super::*;

    #[test]
    fn safe_int_rejects_alpha_and_uses_default() {
        assert_eq!(safe_int(Some("12mb"), -1), -1);
        assert_eq!(safe_int(Some("42"), -1), 42);
        assert_eq!(safe_int(None, -1), -1);
        assert_eq!(safe_int(Some(""), -1), -1);
    }

    #[test]
    fn safe_float_accepts_scientific_notation() {
        assert_eq!(safe_float(Some("1.5e2"), 0.0), 150.0);
        assert_eq!(safe_float(Some("not a number"), 0.0), 0.0);
    }
}
