use super::DeviceRepository;
use crate::repository::test_support::test_db;

async fn repo() -> DeviceRepository {
    DeviceRepository::new(test_db().await)
}

#[tokio::test]
async fn create_then_get_by_id_and_name_round_trip() {
    let repo = repo().await;
    let created = repo
        .create("core-sw-1", "10.0.0.1", Some("cisco"), "public", 2, 161)
        .await
        .expect("create device");

    let by_id = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "core-sw-1");
    assert_eq!(by_id.connection_status, "unknown");

    let by_name = repo.get_by_name("core-sw-1").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);
}

#[tokio::test]
async fn get_all_enabled_excludes_disabled_devices() {
    let repo = repo().await;
    let enabled = repo
        .create("sw-enabled", "10.0.0.2", None, "public", 2, 161)
        .await
        .unwrap();

    let conn = repo.db.clone();
    let disabled = repo
        .create("sw-disabled", "10.0.0.3", None, "public", 2, 161)
        .await
        .unwrap();
    {
        use sea_orm::{ActiveModelTrait, Set};
        let mut active: crate::entities::devices::ActiveModel = disabled.clone().into();
        active.polling_enabled = Set(false);
        active.update(&conn).await.unwrap();
    }

    let devices = repo.get_all_enabled().await.unwrap();
    let names: Vec<_> = devices.iter().map(|d| d.name.as_str()).collect();
    assert!(names.contains(&enabled.name.as_str()));
    assert!(!names.contains(&"sw-disabled"));
}

#[tokio::test]
async fn update_status_stamps_last_polled_and_last_online() {
    let repo = repo().await;
    let device = repo
        .create("sw-status", "10.0.0.4", None, "public", 2, 161)
        .await
        .unwrap();

    assert!(repo.update_status(device.id, "online").await);
    let online = repo.get_by_id(device.id).await.unwrap().unwrap();
    assert_eq!(online.connection_status, "online");
    assert!(online.last_polled.is_some());
    assert!(online.last_online.is_some());

    assert!(repo.update_status(device.id, "offline").await);
    let offline = repo.get_by_id(device.id).await.unwrap().unwrap();
    assert_eq!(offline.connection_status, "offline");
    // last_online is sticky: it is not cleared by an offline transition.
    assert!(offline.last_online.is_some());
}

#[tokio::test]
async fn update_status_on_unknown_device_returns_false() {
    let repo = repo().await;
    assert!(!repo.update_status(uuid::Uuid::new_v4(), "online").await);
}
