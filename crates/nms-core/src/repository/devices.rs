//! Device registry access: creation, lookup, and reachability bookkeeping.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::entities::devices::{self, Entity as Devices};
use crate::error::{Error, Result};

/// Data access for the device registry.
#[derive(Debug, Clone)]
pub struct DeviceRepository {
    db: DatabaseConnection,
}

impl DeviceRepository {
    /// Build a repository over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new device.
    pub async fn create(
        &self,
        name: &str,
        ip_address: &str,
        vendor: Option<&str>,
        community_string: &str,
        snmp_version: i16,
        snmp_port: i32,
    ) -> Result<devices::Model> {
        let now = Utc::now();
        let active = devices::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            ip_address: Set(ip_address.to_string()),
            vendor: Set(vendor.map(str::to_string)),
            community_string: Set(community_string.to_string()),
            snmp_version: Set(snmp_version),
            snmp_port: Set(snmp_port),
            polling_enabled: Set(true),
            connection_status: Set("unknown".to_string()),
            last_polled: Set(None),
            last_online: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&self.db).await.map_err(|e| {
            error!(device = name, error = %e, "failed to create device");
            Error::database_with_source("create_device", e.to_string(), e)
        })?;

        debug!(device = name, id = %model.id, "created device");
        Ok(model)
    }

    /// Devices with `polling_enabled = true`.
    pub async fn get_all_enabled(&self) -> Result<Vec<devices::Model>> {
        Devices::find()
            .filter(devices::Column::PollingEnabled.eq(true))
            .all(&self.db)
            .await
            .map_err(|e| Error::database_with_source("get_all_enabled", e.to_string(), e))
    }

    /// Look up a device by primary key.
    pub async fn get_by_id(&self, device_id: Uuid) -> Result<Option<devices::Model>> {
        Devices::find_by_id(device_id)
            .one(&self.db)
            .await
            .map_err(|e| Error::database_with_source("get_device_by_id", e.to_string(), e))
    }

    /// Look up a device by its unique display name.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<devices::Model>> {
        Devices::find()
            .filter(devices::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| Error::database_with_source("get_device_by_name", e.to_string(), e))
    }

    /// Stamp a device's reachability. `status` is `"online"` or `"offline"`;
    /// `last_polled` is always refreshed, and `last_online` only on
    /// `"online"`. Returns `false` (never propagates an error) on any
    /// failure or missing row, matching the mutator contract of the other
    /// repositories.
    pub async fn update_status(&self, device_id: Uuid, status: &str) -> bool {
        let Ok(Some(model)) = self.get_by_id(device_id).await else {
            return false;
        };

        let now = Utc::now();
        let mut active: devices::ActiveModel = model.into();
        active.connection_status = Set(status.to_string());
        active.last_polled = Set(Some(now));
        active.updated_at = Set(now);
        if status == "online" {
            active.last_online = Set(Some(now));
        }

        match active.update(&self.db).await {
            Ok(_) => {
                debug!(device_id = %device_id, status, "updated device status");
                true
            }
            Err(e) => {
                warn!(device_id = %device_id, error = %e, "failed to update device status");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
