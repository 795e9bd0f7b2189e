//! Device poller: interface, health, and inventory polling with per-vendor
//! OID dispatch. Maintains one SNMP session per registered device.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use chrono::Utc;
use regex::Regex;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

pub use crate::oid::Vendor;
use crate::models::{DeviceHealthMetric, DeviceInventory, InterfaceMetric};
use crate::snmp::{SessionConfig, SnmpCredentials, SnmpSession, safe_float, safe_int};

/// Registration record for a polled device.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Unique device ID.
    pub device_id: Uuid,
    /// Display name.
    pub device_name: String,
    /// SNMP target address.
    pub address: SocketAddr,
    /// SNMPv1/v2c community string.
    pub community: String,
    /// SNMP version (1 or 2).
    pub snmp_version: u8,
    /// Whether this device should be polled at all.
    pub enabled: bool,
}

impl DeviceConfig {
    fn session_config(&self, timeout: Duration, retries: u32, bulk_walk_enabled: bool) -> SessionConfig {
        SessionConfig {
            address: self.address,
            version: self.snmp_version,
            credentials: SnmpCredentials::Community {
                community: self.community.clone(),
            },
            timeout,
            retries,
            max_vars_per_request: 10,
            bulk_walk_enabled,
        }
    }
}

/// Session defaults applied to every registered device.
#[derive(Debug, Clone, Copy)]
pub struct PollerDefaults {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry count (not currently applied by the session transport itself).
    pub retries: u32,
    /// Whether subtree walks prefer GETBULK over GETNEXT.
    pub bulk_walk_enabled: bool,
}

impl Default for PollerDefaults {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            retries: 3,
            bulk_walk_enabled: true,
        }
    }
}

const IF_INDEX_ROOT: &str = "1.3.6.1.2.1.2.2.1.1";

fn translate_status(code: Option<&str>) -> String {
    // 1 = up; 3 (testing) and anything else surfaces as down. Deliberate
    // simplification: operators get a binary up/down signal.
    if safe_int(code, 0) == 1 {
        "up".to_string()
    } else {
        "down".to_string()
    }
}

/// Owns one SNMP session per registered device and performs interface,
/// health, and inventory polling with vendor-specific OID dispatch.
pub struct DevicePoller {
    devices: RwLock<HashMap<Uuid, DeviceConfig>>,
    sessions: RwLock<HashMap<Uuid, SnmpSession>>,
    defaults: PollerDefaults,
}

impl DevicePoller {
    /// Create a poller with the given session defaults.
    #[must_use]
    pub fn new(defaults: PollerDefaults) -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
            sessions: RwLock::new(HashMap::new()),
            defaults,
        }
    }

    /// Register a device. Disabled devices are recorded but never polled.
    pub async fn register_device(&self, config: DeviceConfig) {
        let device_id = config.device_id;
        if !config.enabled {
            debug!(device = %config.device_name, "registering disabled device, will not be polled");
        }
        let session = SnmpSession::new(config.session_config(
            self.defaults.timeout,
            self.defaults.retries,
            self.defaults.bulk_walk_enabled,
        ));
        self.sessions.write().await.insert(device_id, session);
        self.devices.write().await.insert(device_id, config);
    }

    /// Drop a device's session and registration.
    pub async fn deregister_device(&self, device_id: Uuid) {
        self.devices.write().await.remove(&device_id);
        self.sessions.write().await.remove(&device_id);
    }

    async fn session_for(&self, device_id: Uuid) -> Option<SnmpSession> {
        self.sessions.read().await.get(&device_id).cloned()
    }

    async fn device(&self, device_id: Uuid) -> Option<DeviceConfig> {
        self.devices.read().await.get(&device_id).cloned()
    }

    /// Reachability probe for a registered device.
    pub async fn probe(&self, device_id: Uuid) -> bool {
        match self.session_for(device_id).await {
            Some(session) => session.probe().await,
            None => false,
        }
    }

    /// Poll all interfaces on a device: walk `ifIndex`, then one multi-get
    /// per index packing all ten per-index leaves.
    pub async fn poll_interfaces(&self, device_id: Uuid) -> Vec<InterfaceMetric> {
        let Some(session) = self.session_for(device_id).await else {
            return Vec::new();
        };

        let walk = session.walk(IF_INDEX_ROOT).await;
        let mut metrics = Vec::new();
        let now = Utc::now();

        for (_, value) in walk {
            let ifindex_str = value.as_text();
            let Ok(ifindex) = ifindex_str.parse::<u32>() else {
                warn!(device_id = %device_id, raw = %ifindex_str, "non-numeric ifIndex, skipping");
                continue;
            };

            let oids = [
                format!("1.3.6.1.2.1.2.2.1.2.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.3.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.4.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.5.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.7.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.8.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.10.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.14.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.16.{ifindex}"),
                format!("1.3.6.1.2.1.2.2.1.20.{ifindex}"),
            ];
            let oid_refs: Vec<&str> = oids.iter().map(String::as_str).collect();
            let values = session.get_multiple(&oid_refs).await;

            let text = |oid: &str| values.get(oid).and_then(|v| v.as_ref()).map(|v| v.as_text());

            let descr = text(&oids[0]).unwrap_or_else(|| format!("if{ifindex}"));
            metrics.push(InterfaceMetric {
                device_id,
                interface_index: ifindex,
                interface_name: descr.clone(),
                description: descr,
                admin_status: translate_status(text(&oids[4]).as_deref()),
                oper_status: translate_status(text(&oids[5]).as_deref()),
                mtu: safe_int(text(&oids[2]).as_deref(), 1500).max(0) as u32,
                speed: safe_int(text(&oids[3]).as_deref(), 0).max(0) as u64,
                in_octets: safe_int(text(&oids[6]).as_deref(), 0).max(0) as u64,
                out_octets: safe_int(text(&oids[8]).as_deref(), 0).max(0) as u64,
                in_errors: safe_int(text(&oids[7]).as_deref(), 0).max(0) as u64,
                out_errors: safe_int(text(&oids[9]).as_deref(), 0).max(0) as u64,
                timestamp: now,
            });
        }

        metrics
    }

    /// Poll system health: `sysName`/`sysUpTime` plus vendor-dispatched
    /// CPU/memory/temperature. Returns `None` if `sysUpTime` is absent.
    pub async fn poll_health(&self, device_id: Uuid, vendor: Vendor) -> Option<DeviceHealthMetric> {
        let session = self.session_for(device_id).await?;
        let device = self.device(device_id).await?;

        let sys_name = session
            .get("1.3.6.1.2.1.1.5.0")
            .await
            .ok()
            .flatten()
            .map(|v| v.as_text())
            .unwrap_or_else(|| device.device_name.clone());

        let uptime_raw = session.get("1.3.6.1.2.1.1.3.0").await.ok().flatten()?;
        let uptime_seconds = (safe_float(Some(&uptime_raw.as_text()), 0.0) * 0.01) as u64;

        let (cpu_usage, memory_usage, temperature) = match vendor {
            Vendor::Cisco => self.cisco_health(&session).await,
            Vendor::Fortinet => self.fortinet_health(&session).await,
            Vendor::Mikrotik => self.mikrotik_health(&session).await,
            Vendor::Generic => self.generic_health(&session).await,
        };

        Some(DeviceHealthMetric {
            device_id,
            device_name: sys_name,
            uptime_seconds,
            cpu_usage,
            memory_usage,
            temperature,
            timestamp: Utc::now(),
        })
    }

    async fn first_non_null(&self, session: &SnmpSession, oids: &[&str]) -> Option<f64> {
        for oid in oids {
            if let Ok(Some(value)) = session.get(oid).await {
                let raw = value.as_text();
                let parsed = safe_float(Some(&raw), f64::NAN);
                if !parsed.is_nan() {
                    return Some(parsed);
                }
            }
        }
        None
    }

    async fn cisco_health(&self, session: &SnmpSession) -> (Option<f64>, Option<f64>, Option<f64>) {
        let cpu = self
            .first_non_null(
                session,
                &[
                    "1.3.6.1.4.1.9.9.109.1.1.1.1.5.1",
                    "1.3.6.1.4.1.9.9.109.1.1.1.1.5",
                    "1.3.6.1.4.1.9.2.1.58.0",
                ],
            )
            .await;

        let used = self
            .first_non_null(
                session,
                &["1.3.6.1.4.1.9.9.48.1.1.1.5.1", "1.3.6.1.4.1.9.9.48.1.1.1.5"],
            )
            .await;
        let free = self
            .first_non_null(
                session,
                &["1.3.6.1.4.1.9.9.48.1.1.1.6.1", "1.3.6.1.4.1.9.9.48.1.1.1.6"],
            )
            .await;
        let memory = match (used, free) {
            (Some(u), Some(f)) if u + f > 0.0 => Some(u / (u + f) * 100.0),
            _ => None,
        };

        let mut temperature = self
            .first_non_null(
                session,
                &[
                    "1.3.6.1.4.1.9.9.13.1.3.1.3.1",
                    "1.3.6.1.4.1.9.9.13.1.3.1.3.1004",
                    "1.3.6.1.4.1.9.9.13.1.3.1.3.1001",
                ],
            )
            .await;

        if temperature.is_none() {
            let sensor_types = session
                .walk("1.3.6.1.4.1.9.9.91.1.1.1.1.1")
                .await;
            for (oid, value) in sensor_types {
                if safe_int(Some(&value.as_text()), -1) == 8 {
                    if let Some(idx) = oid.rsplit('.').next() {
                        let value_oid = format!("1.3.6.1.4.1.9.9.91.1.1.1.1.4.{idx}");
                        if let Ok(Some(v)) = session.get(&value_oid).await {
                            temperature = Some(safe_float(Some(&v.as_text()), 0.0));
                            break;
                        }
                    }
                }
            }
        }

        if temperature.is_none() {
            let walked = session.walk("1.3.6.1.4.1.9.9.13.1.3.1.3").await;
            temperature = walked
                .first()
                .map(|(_, v)| safe_float(Some(&v.as_text()), 0.0));
        }

        let temperature = temperature.map(|raw| {
            if raw > 1000.0 {
                raw / 1000.0
            } else if raw > 150.0 {
                raw / 10.0
            } else {
                raw
            }
        });

        (cpu, memory, temperature)
    }

    async fn fortinet_health(&self, session: &SnmpSession) -> (Option<f64>, Option<f64>, Option<f64>) {
        let cpu = session
            .get("1.3.6.1.4.1.12356.101.13.2.1.1.2")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        let memory = session
            .get("1.3.6.1.4.1.12356.101.13.2.1.2.1")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        let temperature = session
            .get("1.3.6.1.4.1.12356.101.13.2.1.3.1")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        (cpu, memory, temperature)
    }

    async fn mikrotik_health(&self, session: &SnmpSession) -> (Option<f64>, Option<f64>, Option<f64>) {
        let cpu = session
            .get("1.3.6.1.4.1.14988.1.1.3.2")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        let total = session
            .get("1.3.6.1.4.1.14988.1.1.3.3")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        let free = session
            .get("1.3.6.1.4.1.14988.1.1.3.4")
            .await
            .ok()
            .flatten()
            .map(|v| safe_float(Some(&v.as_text()), 0.0));
        let memory = match (total, free) {
            (Some(t), Some(f)) if t > 0.0 => Some((t - f) / t * 100.0),
            _ => None,
        };
        (cpu, memory, None)
    }

    async fn generic_health(&self, session: &SnmpSession) -> (Option<f64>, Option<f64>, Option<f64>) {
        let load_rows = session.walk("1.3.6.1.2.1.25.3.3.1.2").await;
        let cpu = if load_rows.is_empty() {
            None
        } else {
            let sum: f64 = load_rows
                .iter()
                .map(|(_, v)| safe_float(Some(&v.as_text()), 0.0))
                .sum();
            Some(sum / load_rows.len() as f64)
        };

        let storage_types = session.walk("1.3.6.1.2.1.25.2.3.1.2").await;
        let mut memory = None;
        for (oid, value) in storage_types {
            if value.as_text().eq_ignore_ascii_case("hrStorageRam") {
                if let Some(idx) = oid.rsplit('.').next() {
                    let used_oid = format!("1.3.6.1.2.1.25.2.3.1.6.{idx}");
                    let size_oid = format!("1.3.6.1.2.1.25.2.3.1.5.{idx}");
                    let used = session
                        .get(&used_oid)
                        .await
                        .ok()
                        .flatten()
                        .map(|v| safe_float(Some(&v.as_text()), 0.0));
                    let size = session
                        .get(&size_oid)
                        .await
                        .ok()
                        .flatten()
                        .map(|v| safe_float(Some(&v.as_text()), 0.0));
                    if let (Some(u), Some(s)) = (used, size) {
                        if s > 0.0 {
                            memory = Some(u / s * 100.0);
                        }
                    }
                    break;
                }
            }
        }

        (cpu, memory, None)
    }

    /// Poll device identity/inventory. Returns `None` if `sysDescr` is
    /// unavailable.
    pub async fn poll_inventory(&self, device_id: Uuid) -> Option<DeviceInventory> {
        let session = self.session_for(device_id).await?;

        let sys_descr = session
            .get("1.3.6.1.2.1.1.1.0")
            .await
            .ok()
            .flatten()?
            .as_text();
        let sys_name = session
            .get("1.3.6.1.2.1.1.5.0")
            .await
            .ok()
            .flatten()
            .map(|v| v.as_text());

        let vendor = Vendor::classify(&sys_descr);

        let (serial_number, firmware_version) = match vendor {
            Vendor::Cisco => {
                let serial = session
                    .walk("1.3.6.1.2.1.47.1.1.1.1.11")
                    .await
                    .into_iter()
                    .map(|(_, v)| v.as_text())
                    .find(|s| !s.is_empty());
                let firmware = Regex::new(r"Version ([^,\s]+)")
                    .ok()
                    .and_then(|re| re.captures(&sys_descr))
                    .map(|caps| caps[1].to_string());
                (serial, firmware)
            }
            Vendor::Fortinet => {
                let serial = session
                    .get("1.3.6.1.4.1.12356.100.1.1.1.0")
                    .await
                    .ok()
                    .flatten()
                    .map(|v| v.as_text());
                (serial, None)
            }
            Vendor::Mikrotik => {
                let firmware = session
                    .get("1.3.6.1.4.1.14988.1.1.4.4.0")
                    .await
                    .ok()
                    .flatten()
                    .map(|v| v.as_text());
                (None, firmware)
            }
            Vendor::Generic => (None, None),
        };

        let model = match vendor {
            Vendor::Cisco => session
                .walk("1.3.6.1.2.1.47.1.1.1.1.13")
                .await
                .into_iter()
                .map(|(_, v)| v.as_text())
                .find(|s| !s.is_empty()),
            _ => None,
        };

        let vendor_model = match (Some(format!("{vendor:?}")), model) {
            (Some(v), Some(m)) => Some(format!("{v} {m}")),
            (Some(v), None) => Some(v),
            _ => None,
        };

        Some(DeviceInventory {
            device_id,
            sys_descr,
            serial_number,
            firmware_version,
            vendor_model,
            timestamp: Utc::now(),
        })
    }
}
