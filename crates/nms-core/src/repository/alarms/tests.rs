use chrono::Utc;
use uuid::Uuid;

use super::AlarmRepository;
use crate::models::{Alarm, AlarmSeverity, AlarmType};
use crate::repository::test_support::test_db;

async fn repo() -> AlarmRepository {
    AlarmRepository::new(test_db().await)
}

fn sample(device_id: Uuid, alarm_type: AlarmType, severity: AlarmSeverity) -> Alarm {
    Alarm::new(
        device_id,
        "core-sw-1",
        alarm_type,
        severity,
        "test alarm",
        Utc::now(),
    )
    .with_metadata("interface_index", 3)
}

#[tokio::test]
async fn create_then_get_by_id_round_trips_metadata() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    let alarm = sample(device_id, AlarmType::PortDown, AlarmSeverity::Critical);

    let created = repo.create(&alarm).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.alarm_type, AlarmType::PortDown);
    assert_eq!(fetched.severity, AlarmSeverity::Critical);
    assert_eq!(
        fetched.metadata.get("interface_index"),
        Some(&serde_json::Value::from(3))
    );
}

#[tokio::test]
async fn get_active_filters_by_device_and_severity_and_excludes_resolved() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    let other_device = Uuid::new_v4();

    let critical = repo
        .create(&sample(device_id, AlarmType::PortDown, AlarmSeverity::Critical))
        .await
        .unwrap();
    repo.create(&sample(device_id, AlarmType::CpuHigh, AlarmSeverity::Warning))
        .await
        .unwrap();
    repo.create(&sample(
        other_device,
        AlarmType::PortDown,
        AlarmSeverity::Critical,
    ))
    .await
    .unwrap();

    let active = repo
        .get_active(Some(device_id), Some(AlarmSeverity::Critical), None)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, critical.id);

    assert!(repo.resolve(critical.id).await);
    let active_after_resolve = repo
        .get_active(Some(device_id), Some(AlarmSeverity::Critical), None)
        .await
        .unwrap();
    assert!(active_after_resolve.is_empty());
}

#[tokio::test]
async fn acknowledge_stamps_actor_and_timestamp() {
    let repo = repo().await;
    let alarm = repo
        .create(&sample(
            Uuid::new_v4(),
            AlarmType::DeviceUnreachable,
            AlarmSeverity::Critical,
        ))
        .await
        .unwrap();

    assert!(!alarm.acknowledged);
    assert!(repo.acknowledge(alarm.id, "operator1").await);

    let fetched = repo.get_by_id(alarm.id).await.unwrap().unwrap();
    assert!(fetched.acknowledged);
    assert!(fetched.acknowledged_at.is_some());
}

#[tokio::test]
async fn get_active_by_type_matches_only_that_type() {
    let repo = repo().await;
    let device_id = Uuid::new_v4();
    repo.create(&sample(device_id, AlarmType::PortDown, AlarmSeverity::Critical))
        .await
        .unwrap();
    repo.create(&sample(device_id, AlarmType::CpuHigh, AlarmSeverity::Warning))
        .await
        .unwrap();

    let port_downs = repo.get_active_by_type(AlarmType::PortDown).await.unwrap();
    assert_eq!(port_downs.len(), 1);
    assert_eq!(port_downs[0].alarm_type, AlarmType::PortDown);
}

#[tokio::test]
async fn mutators_on_unknown_alarm_return_false() {
    let repo = repo().await;
    assert!(!repo.acknowledge(Uuid::new_v4(), "operator1").await);
    assert!(!repo.resolve(Uuid::new_v4()).await);
}
