//! Alarm types and the alarm engine's previous-state record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use uuid::Uuid;

/// Alarm severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmSeverity {
    /// Informational; typically a recovery event.
    Info,
    /// Warning; a resource threshold was crossed.
    Warning,
    /// Critical; a device or port went down/unreachable.
    Critical,
}

/// The kind of condition an alarm reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmType {
    /// An interface transitioned from admin-up/oper-up to admin-up/oper-down.
    PortDown,
    /// An interface recovered from `PortDown`.
    PortUp,
    /// A device failed its reachability probe.
    DeviceUnreachable,
    /// A device recovered from `DeviceUnreachable`.
    DeviceReachable,
    /// CPU utilization crossed the configured threshold.
    CpuHigh,
    /// Memory utilization crossed the configured threshold.
    MemoryHigh,
    /// Temperature crossed the configured threshold.
    TemperatureHigh,
    /// A fan failure was reported (reserved; no current producer).
    FanFailure,
    /// A power supply failure was reported (reserved; no current producer).
    PowerSupplyFailure,
}

impl AlarmType {
    /// Stable `snake_case` string form, matching the serde representation.
    /// Used for the database column, which is a plain `String` rather than
    /// a SQL enum.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PortDown => "port_down",
            Self::PortUp => "port_up",
            Self::DeviceUnreachable => "device_unreachable",
            Self::DeviceReachable => "device_reachable",
            Self::CpuHigh => "cpu_high",
            Self::MemoryHigh => "memory_high",
            Self::TemperatureHigh => "temperature_high",
            Self::FanFailure => "fan_failure",
            Self::PowerSupplyFailure => "power_supply_failure",
        }
    }
}

impl AlarmSeverity {
    /// Stable lowercase string form, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::str::FromStr for AlarmType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "port_down" => Ok(Self::PortDown),
            "port_up" => Ok(Self::PortUp),
            "device_unreachable" => Ok(Self::DeviceUnreachable),
            "device_reachable" => Ok(Self::DeviceReachable),
            "cpu_high" => Ok(Self::CpuHigh),
            "memory_high" => Ok(Self::MemoryHigh),
            "temperature_high" => Ok(Self::TemperatureHigh),
            "fan_failure" => Ok(Self::FanFailure),
            "power_supply_failure" => Ok(Self::PowerSupplyFailure),
            other => Err(format!("unknown alarm type: {other}")),
        }
    }
}

impl std::str::FromStr for AlarmSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            other => Err(format!("unknown alarm severity: {other}")),
        }
    }
}

/// A single alarm event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    /// Unique alarm ID.
    pub id: Uuid,
    /// Device this alarm pertains to.
    pub device_id: Uuid,
    /// Device name, denormalized for display without a join.
    pub device_name: String,
    /// The alarm's type.
    pub alarm_type: AlarmType,
    /// Severity of the condition.
    pub severity: AlarmSeverity,
    /// Human-readable message.
    pub message: String,
    /// Whether an operator has acknowledged this alarm.
    pub acknowledged: bool,
    /// When the alarm was created.
    pub created_at: DateTime<Utc>,
    /// When the alarm was acknowledged, if ever.
    pub acknowledged_at: Option<DateTime<Utc>>,
    /// When the alarm was resolved, if ever.
    pub resolved_at: Option<DateTime<Utc>>,
    /// Free-form structured context (interface index, raw metric value, etc).
    #[serde(default)]
    pub metadata: HashMap<String, JsonValue>,
}

impl Alarm {
    /// Build a new, unacknowledged, unresolved alarm with the given fields.
    #[must_use]
    pub fn new(
        device_id: Uuid,
        device_name: impl Into<String>,
        alarm_type: AlarmType,
        severity: AlarmSeverity,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            device_id,
            device_name: device_name.into(),
            alarm_type,
            severity,
            message: message.into(),
            acknowledged: false,
            created_at,
            acknowledged_at: None,
            resolved_at: None,
            metadata: HashMap::new(),
        }
    }

    /// Attach a metadata key/value pair, builder-style.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// The alarm engine's record of a metric's last-observed boolean state,
/// keyed externally by `(device_id, metric_key)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousState {
    /// Whether the alarm condition was active as of the last evaluation.
    pub active: bool,
    /// The last raw numeric value observed, if the metric is numeric.
    pub last_value: Option<f64>,
    /// When this state was last updated.
    pub updated_at: DateTime<Utc>,
}

impl PreviousState {
    /// The implicit state of a metric key never seen before: inactive.
    #[must_use]
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            active: false,
            last_value: None,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_builder_attaches_metadata() {
        let alarm = Alarm::new(
            Uuid::new_v4(),
            "core-sw-1",
            AlarmType::PortDown,
            AlarmSeverity::Critical,
            "interface 3 went down",
            Utc::now(),
        )
        .with_metadata("interface_index", 3);

        assert_eq!(alarm.metadata.get("interface_index"), Some(&JsonValue::from(3)));
        assert!(!alarm.acknowledged);
    }

    #[test]
    fn initial_previous_state_is_inactive() {
        let state = PreviousState::initial(Utc::now());
        assert!(!state.active);
        assert!(state.last_value.is_none());
    }
}
