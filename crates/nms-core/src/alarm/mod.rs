//! Stateful alarm engine: a pure function of (current observation, previous
//! state) to (alarm events, new state). No I/O.
//!
//! Keyed by `(device_id, metric_key)` where `metric_key` is
//! `"iface_<ifIndex>"`, `"device_health"`, or `"device_reachability"`.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Alarm, AlarmSeverity, AlarmType, InterfaceMetric, PreviousState};

fn iface_key(ifindex: u32) -> String {
    format!("iface_{ifindex}")
}

const DEVICE_HEALTH_KEY: &str = "device_health";
const DEVICE_REACHABILITY_KEY: &str = "device_reachability";

/// Thresholds used to evaluate resource alarms.
#[derive(Debug, Clone, Copy)]
pub struct AlarmThresholds {
    /// CPU utilization percentage at/above which `cpu_high` fires.
    pub cpu_threshold: f64,
    /// Memory utilization percentage at/above which `memory_high` fires.
    pub memory_threshold: f64,
    /// Temperature in Celsius at/above which `temperature_high` fires.
    pub temperature_threshold: f64,
}

impl Default for AlarmThresholds {
    fn default() -> Self {
        Self {
            cpu_threshold: 80.0,
            memory_threshold: 80.0,
            temperature_threshold: 80.0,
        }
    }
}

/// Owns the `PreviousState` map and evaluates edge-triggered alarm rules.
///
/// The engine is the exclusive owner of `PreviousState`; callers must not
/// maintain their own copies of device condition flags.
pub struct AlarmEngine {
    thresholds: AlarmThresholds,
    state: RwLock<HashMap<(Uuid, String), PreviousState>>,
}

impl AlarmEngine {
    /// Create a new engine with the given thresholds and empty state.
    #[must_use]
    pub fn new(thresholds: AlarmThresholds) -> Self {
        Self {
            thresholds,
            state: RwLock::new(HashMap::new()),
        }
    }

    async fn previous(&self, device_id: Uuid, key: &str, now: DateTime<Utc>) -> PreviousState {
        let state = self.state.read().await;
        state
            .get(&(device_id, key.to_string()))
            .copied()
            .unwrap_or_else(|| PreviousState::initial(now))
    }

    async fn store(&self, device_id: Uuid, key: &str, new_state: PreviousState) {
        let mut state = self.state.write().await;
        state.insert((device_id, key.to_string()), new_state);
    }

    /// Drop all retained state for a device, e.g. when it is deregistered.
    pub async fn clear_device_state(&self, device_id: Uuid) {
        let mut state = self.state.write().await;
        state.retain(|(id, _), _| *id != device_id);
    }

    /// Evaluate one interface's port-down/port-up rule.
    pub async fn evaluate_interface(
        &self,
        device_id: Uuid,
        device_name: &str,
        metric: &InterfaceMetric,
        now: DateTime<Utc>,
    ) -> Vec<Alarm> {
        let key = iface_key(metric.interface_index);
        let previous = self.previous(device_id, &key, now).await;
        let is_down = metric.is_port_down();

        let mut alarms = Vec::new();
        if is_down && !previous.active {
            alarms.push(
                Alarm::new(
                    device_id,
                    device_name,
                    AlarmType::PortDown,
                    AlarmSeverity::Critical,
                    format!(
                        "Interface {} ({}) is down",
                        metric.interface_index, metric.interface_name
                    ),
                    now,
                )
                .with_metadata("interface_index", metric.interface_index)
                .with_metadata("interface_name", metric.interface_name.clone())
                .with_metadata("description", metric.description.clone())
                .with_metadata("admin_status", metric.admin_status.clone())
                .with_metadata("oper_status", metric.oper_status.clone()),
            );
        } else if !is_down && previous.active {
            alarms.push(
                Alarm::new(
                    device_id,
                    device_name,
                    AlarmType::PortUp,
                    AlarmSeverity::Info,
                    format!(
                        "Interface {} ({}) recovered",
                        metric.interface_index, metric.interface_name
                    ),
                    now,
                )
                .with_metadata("interface_index", metric.interface_index)
                .with_metadata("interface_name", metric.interface_name.clone())
                .with_metadata("description", metric.description.clone()),
            );
        }

        self.store(
            device_id,
            &key,
            PreviousState {
                active: is_down,
                last_value: None,
                updated_at: now,
            },
        )
        .await;

        alarms
    }

    /// Evaluate the resource thresholds (CPU/memory/temperature) for one
    /// health poll. A `None` metric value leaves the corresponding flag
    /// untouched and emits nothing for that metric.
    ///
    /// Resource alarms fire on the rising edge only; there is no explicit
    /// recovery alarm on the falling edge (state is simply cleared on the
    /// next evaluation). This asymmetry mirrors the source system and is a
    /// deliberate, if debatable, carryover — see the design notes.
    #[allow(clippy::too_many_lines)]
    pub async fn evaluate_health(
        &self,
        device_id: Uuid,
        device_name: &str,
        cpu_usage: Option<f64>,
        memory_usage: Option<f64>,
        temperature: Option<f64>,
        now: DateTime<Utc>,
    ) -> Vec<Alarm> {
        let mut alarms = Vec::new();

        alarms.extend(
            self.evaluate_resource(
                device_id,
                device_name,
                "cpu_usage",
                cpu_usage,
                self.thresholds.cpu_threshold,
                AlarmType::CpuHigh,
                AlarmSeverity::Warning,
                "CPU",
                now,
            )
            .await,
        );

        alarms.extend(
            self.evaluate_resource(
                device_id,
                device_name,
                "memory_usage",
                memory_usage,
                self.thresholds.memory_threshold,
                AlarmType::MemoryHigh,
                AlarmSeverity::Warning,
                "Memory",
                now,
            )
            .await,
        );

        alarms.extend(
            self.evaluate_resource(
                device_id,
                device_name,
                "temperature",
                temperature,
                self.thresholds.temperature_threshold,
                AlarmType::TemperatureHigh,
                AlarmSeverity::Critical,
                "Temperature",
                now,
            )
            .await,
        );

        alarms
    }

    #[allow(clippy::too_many_arguments)]
    async fn evaluate_resource(
        &self,
        device_id: Uuid,
        device_name: &str,
        metric_suffix: &str,
        value: Option<f64>,
        threshold: f64,
        alarm_type: AlarmType,
        severity: AlarmSeverity,
        label: &str,
        now: DateTime<Utc>,
    ) -> Vec<Alarm> {
        let key = format!("{DEVICE_HEALTH_KEY}_{metric_suffix}");

        let Some(value) = value else {
            debug!(device = device_name, metric = metric_suffix, "null resource value, leaving state unchanged");
            return Vec::new();
        };

        let previous = self.previous(device_id, &key, now).await;
        let is_high = value >= threshold;

        let mut alarms = Vec::new();
        if is_high && !previous.active {
            alarms.push(
                Alarm::new(
                    device_id,
                    device_name,
                    alarm_type,
                    severity,
                    format!("{label} usage {value:.1} at or above threshold {threshold:.1}"),
                    now,
                )
                .with_metadata("value", value)
                .with_metadata("threshold", threshold),
            );
        }

        self.store(
            device_id,
            &key,
            PreviousState {
                active: is_high,
                last_value: Some(value),
                updated_at: now,
            },
        )
        .await;

        alarms
    }

    /// Evaluate the device reachability rule.
    pub async fn evaluate_reachability(
        &self,
        device_id: Uuid,
        device_name: &str,
        reachable: bool,
        now: DateTime<Utc>,
    ) -> Vec<Alarm> {
        let previous = self.previous(device_id, DEVICE_REACHABILITY_KEY, now).await;
        let unreachable = !reachable;

        let mut alarms = Vec::new();
        if unreachable && !previous.active {
            alarms.push(
                Alarm::new(
                    device_id,
                    device_name,
                    AlarmType::DeviceUnreachable,
                    AlarmSeverity::Critical,
                    format!("Device {device_name} is unreachable"),
                    now,
                )
                .with_metadata("reachable", reachable),
            );
        } else if !unreachable && previous.active {
            alarms.push(
                Alarm::new(
                    device_id,
                    device_name,
                    AlarmType::DeviceReachable,
                    AlarmSeverity::Info,
                    format!("Device {device_name} is reachable again"),
                    now,
                )
                .with_metadata("reachable", reachable),
            );
        }

        self.store(
            device_id,
            DEVICE_REACHABILITY_KEY,
            PreviousState {
                active: unreachable,
                last_value: None,
                updated_at: now,
            },
        )
        .await;

        alarms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(admin: &str, oper: &str) -> InterfaceMetric {
        InterfaceMetric {
            device_id: Uuid::new_v4(),
            interface_index: 3,
            interface_name: "Gi0/3".to_string(),
            description: "Gi0/3".to_string(),
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

    #[tokio::test]
    async fn first_observation_in_bad_state_emits_immediately() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        let alarms = engine
            .evaluate_interface(device_id, "sw1", &interface("up", "down"), now)
            .await;

        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].alarm_type, AlarmType::PortDown);
    }

    #[tokio::test]
    async fn port_down_then_up_emits_both_edges() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        let down = engine
            .evaluate_interface(device_id, "sw1", &interface("up", "down"), now)
            .await;
        assert_eq!(down[0].alarm_type, AlarmType::PortDown);

        let up = engine
            .evaluate_interface(device_id, "sw1", &interface("up", "up"), now)
            .await;
        assert_eq!(up.len(), 1);
        assert_eq!(up[0].alarm_type, AlarmType::PortUp);

        let repeat = engine
            .evaluate_interface(device_id, "sw1", &interface("up", "up"), now)
            .await;
        assert!(repeat.is_empty());
    }

    #[tokio::test]
    async fn cpu_high_has_no_recovery_alarm() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        let high = engine
            .evaluate_health(device_id, "sw1", Some(95.0), None, None, now)
            .await;
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].alarm_type, AlarmType::CpuHigh);

        let recovered = engine
            .evaluate_health(device_id, "sw1", Some(10.0), None, None, now)
            .await;
        assert!(recovered.is_empty());

        let high_again = engine
            .evaluate_health(device_id, "sw1", Some(95.0), None, None, now)
            .await;
        assert_eq!(high_again.len(), 1);
    }

    #[tokio::test]
    async fn null_metric_leaves_state_untouched() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        let first = engine
            .evaluate_health(device_id, "sw1", Some(95.0), None, None, now)
            .await;
        assert_eq!(first.len(), 1);

        let with_null = engine
            .evaluate_health(device_id, "sw1", None, None, None, now)
            .await;
        assert!(with_null.is_empty());

        let recovered = engine
            .evaluate_health(device_id, "sw1", Some(10.0), None, None, now)
            .await;
        assert!(recovered.is_empty(), "state should still reflect the last non-null observation");
    }

    #[tokio::test]
    async fn reachability_edges_both_directions() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        let down = engine
            .evaluate_reachability(device_id, "sw1", false, now)
            .await;
        assert_eq!(down[0].alarm_type, AlarmType::DeviceUnreachable);

        let up = engine
            .evaluate_reachability(device_id, "sw1", true, now)
            .await;
        assert_eq!(up[0].alarm_type, AlarmType::DeviceReachable);
    }

    #[tokio::test]
    async fn clear_device_state_forgets_all_keys() {
        let engine = AlarmEngine::new(AlarmThresholds::default());
        let device_id = Uuid::new_v4();
        let now = Utc::now();

        engine
            .evaluate_interface(device_id, "sw1", &interface("up", "down"), now)
            .await;
        engine.clear_device_state(device_id).await;

        let alarms = engine
            .evaluate_interface(device_id, "sw1", &interface("up", "down"), now)
            .await;
        assert_eq!(alarms.len(), 1, "state was cleared, so this is a fresh first observation");
    }
}
