//! Shared domain types: alarms, metrics, inventory, and the alarm engine's
//! previous-state record.

mod alarm;
mod metrics;

pub use alarm::{Alarm, AlarmSeverity, AlarmType, PreviousState};
pub use metrics::{DeviceHealthMetric, DeviceInventory, DeviceStatus, InterfaceMetric};
