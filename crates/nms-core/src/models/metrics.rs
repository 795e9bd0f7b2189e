//! Metric and inventory snapshot types produced by the device poller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse reachability classification for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    /// The device answered its reachability probe.
    Reachable,
    /// The device failed its reachability probe.
    Unreachable,
    /// The device has not been polled yet.
    Unknown,
}

/// One interface's state as of a single interface poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMetric {
    /// Device this interface belongs to.
    pub device_id: Uuid,
    /// SNMP `ifIndex`.
    pub interface_index: u32,
    /// `ifDescr`.
    pub interface_name: String,
    /// Optional free-text description (defaults to `interface_name`).
    pub description: String,
    /// Administrative status: `"up"` or `"down"`.
    pub admin_status: String,
    /// Operational status: `"up"` or `"down"`.
    pub oper_status: String,
    /// `ifMtu`, defaulting to 1500 when the device doesn't answer.
    pub mtu: u32,
    /// `ifSpeed` in bits per second.
    pub speed: u64,
    /// `ifInOctets`.
    pub in_octets: u64,
    /// `ifOutOctets`.
    pub out_octets: u64,
    /// `ifInErrors`.
    pub in_errors: u64,
    /// `ifOutErrors`.
    pub out_errors: u64,
    /// When this sample was taken.
    pub timestamp: DateTime<Utc>,
}

impl InterfaceMetric {
    /// True when admin is up but oper is down — the `port_down` condition.
    #[must_use]
    pub fn is_port_down(&self) -> bool {
        self.admin_status == "up" && self.oper_status == "down"
    }
}

/// A device's CPU/memory/temperature/uptime snapshot as of a single health
/// poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceHealthMetric {
    /// Device this sample belongs to.
    pub device_id: Uuid,
    /// Device name, denormalized for display.
    pub device_name: String,
    /// Seconds since last reboot, derived from `sysUpTime`.
    pub uptime_seconds: u64,
    /// CPU utilization percentage, or `None` if unavailable for this vendor.
    pub cpu_usage: Option<f64>,
    /// Memory utilization percentage, or `None` if unavailable.
    pub memory_usage: Option<f64>,
    /// Temperature in Celsius, or `None` if unavailable.
    pub temperature: Option<f64>,
    /// When this sample was taken.
    pub timestamp: DateTime<Utc>,
}

/// A device's identity/inventory snapshot, refreshed on a long interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInventory {
    /// Device this record belongs to.
    pub device_id: Uuid,
    /// Raw `sysDescr` string.
    pub sys_descr: String,
    /// Serial number, when discoverable for the device's vendor.
    pub serial_number: Option<String>,
    /// Firmware version, when discoverable.
    pub firmware_version: Option<String>,
    /// Combined vendor/model label (single column; see the repository's
    /// schema reconciliation notes for why vendor and model are not split).
    pub vendor_model: Option<String>,
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_interface(admin: &str, oper: &str) -> InterfaceMetric {
        InterfaceMetric {
            device_id: Uuid::new_v4(),
            interface_index: 1,
            interface_name: "Gi0/1".to_string(),
            description: "Gi0/1".to_string(),
            admin_status: admin.to_string(),
            oper_status: oper.to_string(),
            mtu: 1500,
            speed: 1_000_000_000,
            in_octets: 0,
            out_octets: 0,
            in_errors: 0,
            out_errors: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn port_down_requires_admin_up_and_oper_down() {
        assert!(sample_interface("up", "down").is_port_down());
        assert!(!sample_interface("up", "up").is_port_down());
        assert!(!sample_interface("down", "down").is_port_down());
    }
}
