//! Time-series persistence: interface and health metrics are append-only;
//! inventory is upserted, one row per device.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::entities::device_health_metrics::{self, Entity as DeviceHealthMetrics};
use crate::entities::device_inventory::{self, Entity as DeviceInventoryEntity};
use crate::entities::interface_metrics;
use crate::error::{Error, Result};
use crate::models::{DeviceHealthMetric, DeviceInventory, InterfaceMetric};

/// Data access for the interface/health/inventory time series.
#[derive(Debug, Clone)]
pub struct MetricsRepository {
    db: DatabaseConnection,
}

impl MetricsRepository {
    /// Build a repository over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Append one interface sample.
    pub async fn save_interface_metrics(&self, metric: &InterfaceMetric) -> Result<()> {
        let active = interface_metrics::ActiveModel {
            id: Set(Uuid::new_v4()),
            device_id: Set(metric.device_id),
            interface_index: Set(i32::try_from(metric.interface_index).unwrap_or(i32::MAX)),
            interface_name: Set(metric.interface_name.clone()),
            description: Set(metric.description.clone()),
            admin_status: Set(metric.admin_status.clone()),
            oper_status: Set(metric.oper_status.clone()),
            speed: Set(i64::try_from(metric.speed).unwrap_or(i64::MAX)),
            in_octets: Set(i64::try_from(metric.in_octets).unwrap_or(i64::MAX)),
            out_octets: Set(i64::try_from(metric.out_octets).unwrap_or(i64::MAX)),
            in_errors: Set(i64::try_from(metric.in_errors).unwrap_or(i64::MAX)),
            out_errors: Set(i64::try_from(metric.out_errors).unwrap_or(i64::MAX)),
            timestamp: Set(metric.timestamp),
        };

        active.insert(&self.db).await.map_err(|e| {
            error!(device_id = %metric.device_id, error = %e, "failed to save interface metrics");
            Error::database_with_source("save_interface_metrics", e.to_string(), e)
        })?;
        Ok(())
    }

    /// Append one health sample.
    pub async fn save_health_metrics(&self, metric: &DeviceHealthMetric) -> Result<()> {
        let active = device_health_metrics::ActiveModel {
            id: Set(Uuid::new_v4()),
            device_id: Set(metric.device_id),
            device_name: Set(metric.device_name.clone()),
            uptime_seconds: Set(i64::try_from(metric.uptime_seconds).unwrap_or(i64::MAX)),
            cpu_usage: Set(metric.cpu_usage),
            memory_usage: Set(metric.memory_usage),
            temperature: Set(metric.temperature),
            timestamp: Set(metric.timestamp),
        };

        active.insert(&self.db).await.map_err(|e| {
            error!(device_id = %metric.device_id, error = %e, "failed to save health metrics");
            Error::database_with_source("save_health_metrics", e.to_string(), e)
        })?;
        Ok(())
    }

    /// Upsert the device's inventory snapshot: one row per `device_id`.
    pub async fn save_inventory(&self, inventory: &DeviceInventory) -> Result<()> {
        let existing = DeviceInventoryEntity::find()
            .filter(device_inventory::Column::DeviceId.eq(inventory.device_id))
            .one(&self.db)
            .await
            .map_err(|e| Error::database_with_source("save_inventory_lookup", e.to_string(), e))?;

        if let Some(existing) = existing {
            let mut active: device_inventory::ActiveModel = existing.into();
            active.sys_descr = Set(inventory.sys_descr.clone());
            active.serial_number = Set(inventory.serial_number.clone());
            active.firmware_version = Set(inventory.firmware_version.clone());
            active.vendor_model = Set(inventory.vendor_model.clone());
            active.timestamp = Set(inventory.timestamp);
            active.update(&self.db).await.map_err(|e| {
                error!(device_id = %inventory.device_id, error = %e, "failed to update inventory");
                Error::database_with_source("save_inventory_update", e.to_string(), e)
            })?;
        } else {
            let active = device_inventory::ActiveModel {
                id: Set(Uuid::new_v4()),
                device_id: Set(inventory.device_id),
                sys_descr: Set(inventory.sys_descr.clone()),
                serial_number: Set(inventory.serial_number.clone()),
                firmware_version: Set(inventory.firmware_version.clone()),
                vendor_model: Set(inventory.vendor_model.clone()),
                timestamp: Set(inventory.timestamp),
            };
            active.insert(&self.db).await.map_err(|e| {
                error!(device_id = %inventory.device_id, error = %e, "failed to insert inventory");
                Error::database_with_source("save_inventory_insert", e.to_string(), e)
            })?;
        }

        debug!(device_id = %inventory.device_id, "saved device inventory");
        Ok(())
    }

    /// Health samples for a device within the last `hours` hours, newest
    /// first.
    pub async fn get_latest_health(
        &self,
        device_id: Uuid,
        hours: Option<i64>,
    ) -> Result<Vec<DeviceHealthMetric>> {
        let since = Utc::now() - Duration::hours(hours.unwrap_or(24));

        let rows = DeviceHealthMetrics::find()
            .filter(device_health_metrics::Column::DeviceId.eq(device_id))
            .filter(device_health_metrics::Column::Timestamp.gte(since))
            .order_by_desc(device_health_metrics::Column::Timestamp)
            .all(&self.db)
            .await
            .map_err(|e| Error::database_with_source("get_latest_health", e.to_string(), e))?;

        Ok(rows
            .into_iter()
            .map(|row| DeviceHealthMetric {
                device_id: row.device_id,
                device_name: row.device_name,
                uptime_seconds: u64::try_from(row.uptime_seconds).unwrap_or(0),
                cpu_usage: row.cpu_usage,
                memory_usage: row.memory_usage,
                temperature: row.temperature,
                timestamp: row.timestamp,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests;
