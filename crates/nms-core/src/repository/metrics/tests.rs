use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::MetricsRepository;
use crate::models::{DeviceHealthMetric, DeviceInventory, InterfaceMetric};
use crate::repository::test_support::test_db;

async fn repo() -> MetricsRepository {
    MetricsRepository::new(test_db().await)
}

fn sample_interface(device_id: Uuid) -> InterfaceMetric {
    InterfaceMetric {
        device_id,
        interface_index: 1,
        interface_name: "Gi0/1".to_string(),
        description: "Gi0/1".to_string(),
        admin_status: "up".to_string(),
        oper_status: "up".to_string(),
        mtu: 1500,
        speed: 1_000_000_000,
        in_octets: 1_000,
        out_octets: 2_000,
        in_errors: 5,
        out_errors: 7,
        timestamp: Utc::now(),
    }
}

fn sample_health(device_id: Uuid) -> DeviceHealthMetric {
    DeviceHealthMetric {
        device_id,
        device_name: "core-sw-1".to_string(),
        uptime_seconds: 3600,
        cpu_usage: Some(42.0),
        memory_usage: Some(55.0),
        temperature: Some(35.0),
        timestamp: Utc::now(),
    }
}

fn sample_inventory(device_id: Uuid, sys_descr: &str) -> DeviceInventory {
    DeviceInventory {
        device_id,
        sys_descr: sys_descr.to_string(),
        serial_number: Some("ABC123".to_string()),
        firmware_version: Some("15.2".to_string()),
        vendor_model: Some("Cisco Catalyst".to_string()),
        timestamp: Utc::now(),
    }
}

#[tokio::test]
async fn save_interface_metrics_inserts_a_row() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    repo.save_interface_metrics(&sample_interface(device_id))
        .await
        .unwrap();

    let rows = crate::entities::interface_metrics::Entity::find()
        .filter(crate::entities::interface_metrics::Column::DeviceId.eq(device_id))
        .all(&repo.db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].in_errors, 5);
    assert_eq!(rows[0].out_errors, 7);
}

#[tokio::test]
async fn save_health_metrics_inserts_a_row() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    repo.save_health_metrics(&sample_health(device_id))
        .await
        .unwrap();
}

#[tokio::test]
async fn save_inventory_upserts_on_device_id() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();

    repo.save_inventory(&sample_inventory(device_id, "Cisco IOS XE v1"))
        .await
        .unwrap();
    repo.save_inventory(&sample_inventory(device_id, "Cisco IOS XE v2"))
        .await
        .unwrap();

    let rows = crate::entities::device_inventory::Entity::find()
        .filter(crate::entities::device_inventory::Column::DeviceId.eq(device_id))
        .all(&repo.db)
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].sys_descr, "Cisco IOS XE v2");
}

#[tokio::test]
async fn get_latest_health_returns_newest_first_within_window() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    repo.save_health_metrics(&sample_health(device_id))
        .await
        .unwrap();
    repo.save_health_metrics(&sample_health(device_id))
        .await
        .unwrap();

    let results = repo.get_latest_health(device_id, Some(24)).await.unwrap();
    assert_eq!(results.len(), 2);
}
