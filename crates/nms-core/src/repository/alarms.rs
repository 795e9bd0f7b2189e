//! Alarm persistence: create, acknowledge, resolve, and the active/recent
//! query surfaces the orchestrator and any operator tooling read from.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde_json::Value as JsonValue;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::entities::alarms::{self, Entity as Alarms};
use crate::error::{Error, Result};
use crate::models::{Alarm, AlarmSeverity, AlarmType};

const DEFAULT_ACTIVE_LIMIT: u64 = 100;
const DEFAULT_RECENT_DAYS: i64 = 7;
const DEFAULT_RECENT_LIMIT: u64 = 500;

fn entity_to_alarm(model: alarms::Model) -> Alarm {
    let metadata = match model.alarm_metadata {
        JsonValue::Object(map) => map.into_iter().collect::<HashMap<_, _>>(),
        _ => HashMap::new(),
    };

    Alarm {
        id: model.id,
        device_id: model.device_id,
        device_name: model.device_name,
        alarm_type: AlarmType::from_str(&model.alarm_type).unwrap_or(AlarmType::DeviceUnreachable),
        severity: AlarmSeverity::from_str(&model.severity).unwrap_or(AlarmSeverity::Warning),
        message: model.message,
        acknowledged: model.acknowledged,
        created_at: model.created_at,
        acknowledged_at: model.acknowledged_at,
        resolved_at: model.resolved_at,
        metadata,
    }
}

/// Data access for alarm events.
#[derive(Debug, Clone)]
pub struct AlarmRepository {
    db: DatabaseConnection,
}

impl AlarmRepository {
    /// Build a repository over the given connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new alarm record. On failure the error propagates so the
    /// orchestrator can skip mirroring the alarm upstream.
    pub async fn create(&self, alarm: &Alarm) -> Result<Alarm> {
        let active = alarms::ActiveModel {
            id: Set(alarm.id),
            device_id: Set(alarm.device_id),
            device_name: Set(alarm.device_name.clone()),
            alarm_type: Set(alarm.alarm_type.as_str().to_string()),
            severity: Set(alarm.severity.as_str().to_string()),
            message: Set(alarm.message.clone()),
            acknowledged: Set(alarm.acknowledged),
            acknowledged_by: Set(None),
            resolved: Set(alarm.resolved_at.is_some()),
            alarm_metadata: Set(JsonValue::Object(alarm.metadata.clone().into_iter().collect())),
            created_at: Set(alarm.created_at),
            acknowledged_at: Set(alarm.acknowledged_at),
            resolved_at: Set(alarm.resolved_at),
        };

        let model = active.insert(&self.db).await.map_err(|e| {
            error!(alarm_id = %alarm.id, error = %e, "failed to create alarm");
            Error::database_with_source("create_alarm", e.to_string(), e)
        })?;

        debug!(alarm_id = %model.id, "created alarm");
        Ok(entity_to_alarm(model))
    }

    /// Look up an alarm by primary key.
    pub async fn get_by_id(&self, alarm_id: Uuid) -> Result<Option<Alarm>> {
        Alarms::find_by_id(alarm_id)
            .one(&self.db)
            .await
            .map(|opt| opt.map(entity_to_alarm))
            .map_err(|e| Error::database_with_source("get_alarm_by_id", e.to_string(), e))
    }

    /// Unresolved alarms, optionally filtered by device and/or severity,
    /// newest first.
    pub async fn get_active(
        &self,
        device_id: Option<Uuid>,
        severity: Option<AlarmSeverity>,
        limit: Option<u64>,
    ) -> Result<Vec<Alarm>> {
        let mut condition = Condition::all().add(alarms::Column::Resolved.eq(false));
        if let Some(device_id) = device_id {
            condition = condition.add(alarms::Column::DeviceId.eq(device_id));
        }
        if let Some(severity) = severity {
            condition = condition.add(alarms::Column::Severity.eq(severity.as_str()));
        }

        Alarms::find()
            .filter(condition)
            .order_by_desc(alarms::Column::CreatedAt)
            .limit(limit.unwrap_or(DEFAULT_ACTIVE_LIMIT))
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(entity_to_alarm).collect())
            .map_err(|e| Error::database_with_source("get_active_alarms", e.to_string(), e))
    }

    /// Alarms created within the last `days` days, optionally filtered by
    /// device, newest first.
    pub async fn get_recent(
        &self,
        days: Option<i64>,
        device_id: Option<Uuid>,
        limit: Option<u64>,
    ) -> Result<Vec<Alarm>> {
        let since = Utc::now() - Duration::days(days.unwrap_or(DEFAULT_RECENT_DAYS));
        let mut condition = Condition::all().add(alarms::Column::CreatedAt.gte(since));
        if let Some(device_id) = device_id {
            condition = condition.add(alarms::Column::DeviceId.eq(device_id));
        }

        Alarms::find()
            .filter(condition)
            .order_by_desc(alarms::Column::CreatedAt)
            .limit(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(entity_to_alarm).collect())
            .map_err(|e| Error::database_with_source("get_recent_alarms", e.to_string(), e))
    }

    /// Mark an alarm acknowledged. Returns `false` on any failure or
    /// missing row rather than propagating an error.
    pub async fn acknowledge(&self, alarm_id: Uuid, acknowledged_by: &str) -> bool {
        let Ok(Some(model)) = Alarms::find_by_id(alarm_id).one(&self.db).await else {
            return false;
        };

        let mut active: alarms::ActiveModel = model.into();
        active.acknowledged = Set(true);
        active.acknowledged_at = Set(Some(Utc::now()));
        active.acknowledged_by = Set(Some(acknowledged_by.to_string()));

        match active.update(&self.db).await {
            Ok(_) => {
                debug!(alarm_id = %alarm_id, "acknowledged alarm");
                true
            }
            Err(e) => {
                warn!(alarm_id = %alarm_id, error = %e, "failed to acknowledge alarm");
                false
            }
        }
    }

    /// Mark an alarm resolved. Returns `false` on any failure or missing row.
    pub async fn resolve(&self, alarm_id: Uuid) -> bool {
        let Ok(Some(model)) = Alarms::find_by_id(alarm_id).one(&self.db).await else {
            return false;
        };

        let mut active: alarms::ActiveModel = model.into();
        active.resolved = Set(true);
        active.resolved_at = Set(Some(Utc::now()));

        match active.update(&self.db).await {
            Ok(_) => {
                debug!(alarm_id = %alarm_id, "resolved alarm");
                true
            }
            Err(e) => {
                warn!(alarm_id = %alarm_id, error = %e, "failed to resolve alarm");
                false
            }
        }
    }

    /// All currently-unresolved alarms of a given type.
    pub async fn get_active_by_type(&self, alarm_type: AlarmType) -> Result<Vec<Alarm>> {
        Alarms::find()
            .filter(
                Condition::all()
                    .add(alarms::Column::Resolved.eq(false))
                    .add(alarms::Column::AlarmType.eq(alarm_type.as_str())),
            )
            .all(&self.db)
            .await
            .map(|rows| rows.into_iter().map(entity_to_alarm).collect())
            .map_err(|e| Error::database_with_source("get_active_alarms_by_type", e.to_string(), e))
    }
}

#[cfg(test)]
mod tests;
