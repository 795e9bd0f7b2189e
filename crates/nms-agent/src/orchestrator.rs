//! The polling cycle: fans the registered fleet out to the poller, drains
//! results into the alarm engine, persists observations and alarms, mirrors
//! state to the upstream API, and propagates reachability.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use nms_core::alarm::AlarmEngine;
use nms_core::api_client::{ApiClient, ApiClientConfig};
use nms_core::config::network::parse_socket_addr_with_default_port;
use nms_core::config::Config;
use nms_core::database::DatabaseManager;
use nms_core::models::Alarm;
use nms_core::oid::Vendor;
use nms_core::poller::{DeviceConfig, DevicePoller, PollerDefaults};
use nms_core::repository::{AlarmRepository, DeviceRepository, MetricsRepository};
use tokio::sync::{RwLock, Semaphore};
use tracing::{error, info, warn};
use uuid::Uuid;

fn vendor_from_tag(tag: Option<&str>) -> Vendor {
    match tag.map(str::to_lowercase).as_deref() {
        Some("cisco") => Vendor::Cisco,
        Some("fortinet") => Vendor::Fortinet,
        Some("mikrotik") => Vendor::Mikrotik,
        _ => Vendor::Generic,
    }
}

/// Persists an alarm to the database and mirrors it upstream. Mirroring is
/// best-effort and never blocks on or propagates a failure.
async fn record_alarm(alarms: &AlarmRepository, api: &ApiClient, alarm: Alarm) {
    match alarms.create(&alarm).await {
        Ok(persisted) => {
            api.create_alarm(&persisted).await;
        }
        Err(e) => {
            error!(device_id = %alarm.device_id, alarm_type = ?alarm.alarm_type, error = %e, "failed to persist alarm, skipping API mirror");
        }
    }
}

async fn set_connection_status(
    devices: &DeviceRepository,
    api: &ApiClient,
    device_id: Uuid,
    online: bool,
) {
    let status = if online { "online" } else { "offline" };
    if devices.update_status(device_id, status).await {
        api.update_device_status(device_id, status).await;
    }
}

/// One polling cycle's collaborators, built fresh for each cycle's database
/// session.
struct CycleContext {
    devices: DeviceRepository,
    alarms: AlarmRepository,
    metrics: MetricsRepository,
}

#[allow(clippy::too_many_arguments)]
async fn process_device(
    device: DeviceConfig,
    vendor: Vendor,
    poller: Arc<DevicePoller>,
    alarm_engine: Arc<AlarmEngine>,
    api: Arc<ApiClient>,
    ctx: Arc<CycleContext>,
    last_inventory_poll: Arc<RwLock<HashMap<Uuid, chrono::DateTime<Utc>>>>,
    inventory_poll_interval: Duration,
) {
    let device_id = device.device_id;
    let device_name = device.device_name.clone();
    let now = Utc::now();
    let mut device_is_online = false;

    let interfaces = poller.poll_interfaces(device_id).await;
    if !interfaces.is_empty() {
        device_is_online = true;
        set_connection_status(&ctx.devices, &api, device_id, true).await;

        let due = {
            let last = last_inventory_poll.read().await;
            last.get(&device_id)
                .is_none_or(|last| now.signed_duration_since(*last).num_seconds() >= inventory_poll_interval.as_secs() as i64)
        };
        if due {
            if let Some(inventory) = poller.poll_inventory(device_id).await {
                if let Err(e) = ctx.metrics.save_inventory(&inventory).await {
                    warn!(device = %device_name, error = %e, "failed to persist inventory");
                }
                last_inventory_poll.write().await.insert(device_id, now);
            }
        }

        for metric in &interfaces {
            let alarms = alarm_engine
                .evaluate_interface(device_id, &device_name, metric, now)
                .await;
            for alarm in alarms {
                record_alarm(&ctx.alarms, &api, alarm).await;
            }
            if let Err(e) = ctx.metrics.save_interface_metrics(metric).await {
                warn!(device = %device_name, interface = metric.interface_index, error = %e, "failed to persist interface metric");
            }
        }
    }

    if let Some(health) = poller.poll_health(device_id, vendor).await {
        device_is_online = true;
        set_connection_status(&ctx.devices, &api, device_id, true).await;

        let alarms = alarm_engine
            .evaluate_health(
                device_id,
                &device_name,
                health.cpu_usage,
                health.memory_usage,
                health.temperature,
                now,
            )
            .await;
        for alarm in alarms {
            record_alarm(&ctx.alarms, &api, alarm).await;
        }

        if let Err(e) = ctx.metrics.save_health_metrics(&health).await {
            warn!(device = %device_name, error = %e, "failed to persist health metric");
        }
        if let Ok(payload) = serde_json::to_value(&health) {
            api.send_metrics(device_id, "health", &payload).await;
        }
    }

    if !device_is_online {
        set_connection_status(&ctx.devices, &api, device_id, false).await;
    }

    let reachability_alarms = alarm_engine
        .evaluate_reachability(device_id, &device_name, device_is_online, now)
        .await;
    for alarm in reachability_alarms {
        record_alarm(&ctx.alarms, &api, alarm).await;
    }
}

/// Runs the orchestration loop until interrupted (SIGINT/Ctrl-C).
///
/// # Errors
///
/// Returns an error only if the initial device registry query fails;
/// per-device and per-cycle failures are isolated and logged, never
/// propagated.
pub async fn run(config: Config, db: DatabaseManager) -> anyhow::Result<()> {
    let poller = Arc::new(DevicePoller::new(PollerDefaults {
        timeout: Duration::from_secs(config.snmp.timeout),
        retries: u32::from(config.snmp.retries),
        bulk_walk_enabled: config.snmp.bulk_walk_enabled,
    }));
    let alarm_engine = Arc::new(AlarmEngine::new(config.alarm_thresholds()));
    let api = Arc::new(ApiClient::new(ApiClientConfig {
        base_url: config.api.base_url.clone(),
        timeout: Duration::from_secs(config.api.timeout),
    }));

    let device_repo = DeviceRepository::new(db.connection().clone());
    let registered = device_repo.get_all_enabled().await?;
    let mut vendors = HashMap::new();
    for device in &registered {
        let Ok(address) = parse_socket_addr_with_default_port(
            &device.ip_address,
            u16::try_from(device.snmp_port).unwrap_or(161),
        ) else {
            warn!(device = %device.name, address = %device.ip_address, "skipping device with unparseable address");
            continue;
        };
        vendors.insert(device.id, vendor_from_tag(device.vendor.as_deref()));
        poller
            .register_device(DeviceConfig {
                device_id: device.id,
                device_name: device.name.clone(),
                address,
                community: device.community_string.clone(),
                snmp_version: u8::try_from(device.snmp_version).unwrap_or(2),
                enabled: device.polling_enabled,
            })
            .await;
    }
    info!(count = registered.len(), "registered devices for polling");

    let last_inventory_poll = Arc::new(RwLock::new(HashMap::new()));
    let semaphore = Arc::new(Semaphore::new(config.snmp.max_concurrent_pollers));
    let interface_poll_interval = Duration::from_secs(config.polling.interface_poll_interval);
    let inventory_poll_interval = Duration::from_secs(config.polling.inventory_poll_interval);

    loop {
        let cycle = run_cycle(
            &registered,
            &vendors,
            &poller,
            &alarm_engine,
            &api,
            &db,
            &last_inventory_poll,
            inventory_poll_interval,
            &semaphore,
        );

        tokio::select! {
            () = cycle => {}
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received, exiting after current cycle");
                break;
            }
        }

        tokio::select! {
            () = tokio::time::sleep(interface_poll_interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received during idle period");
                break;
            }
        }
    }

    Ok(())
}

/// Runs a single polling cycle across the fleet, bounded by
/// `max_concurrent_pollers` concurrent device workers.
async fn run_cycle(
    registered: &[nms_core::entities::devices::Model],
    vendors: &HashMap<Uuid, Vendor>,
    poller: &Arc<DevicePoller>,
    alarm_engine: &Arc<AlarmEngine>,
    api: &Arc<ApiClient>,
    db: &DatabaseManager,
    last_inventory_poll: &Arc<RwLock<HashMap<Uuid, chrono::DateTime<Utc>>>>,
    inventory_poll_interval: Duration,
    semaphore: &Arc<Semaphore>,
) {
    let ctx = Arc::new(CycleContext {
        devices: DeviceRepository::new(db.connection().clone()),
        alarms: AlarmRepository::new(db.connection().clone()),
        metrics: MetricsRepository::new(db.connection().clone()),
    });

    let mut handles = Vec::with_capacity(registered.len());
    for device in registered {
        if !device.polling_enabled {
            continue;
        }
        let Ok(address) = parse_socket_addr_with_default_port(
            &device.ip_address,
            u16::try_from(device.snmp_port).unwrap_or(161),
        ) else {
            continue;
        };
        let device_config = DeviceConfig {
            device_id: device.id,
            device_name: device.name.clone(),
            address,
            community: device.community_string.clone(),
            snmp_version: u8::try_from(device.snmp_version).unwrap_or(2),
            enabled: device.polling_enabled,
        };
        let vendor = vendors.get(&device.id).copied().unwrap_or(Vendor::Generic);

        let permit = Arc::clone(semaphore);
        let poller = Arc::clone(poller);
        let alarm_engine = Arc::clone(alarm_engine);
        let api = Arc::clone(api);
        let ctx = Arc::clone(&ctx);
        let last_inventory_poll = Arc::clone(last_inventory_poll);

        handles.push(tokio::spawn(async move {
            let _permit = permit.acquire_owned().await;
            process_device(
                device_config,
                vendor,
                poller,
                alarm_engine,
                api,
                ctx,
                last_inventory_poll,
                inventory_poll_interval,
            )
            .await;
        }));
    }

    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "device polling task panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_from_tag_maps_known_tags() {
        assert_eq!(vendor_from_tag(Some("cisco")), Vendor::Cisco);
        assert_eq!(vendor_from_tag(Some("Fortinet")), Vendor::Fortinet);
        assert_eq!(vendor_from_tag(Some("MIKROTIK")), Vendor::Mikrotik);
        assert_eq!(vendor_from_tag(Some("juniper")), Vendor::Generic);
        assert_eq!(vendor_from_tag(None), Vendor::Generic);
    }
}
