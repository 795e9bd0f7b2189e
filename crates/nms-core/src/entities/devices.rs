//! Device registration table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub ip_address: String,
    pub vendor: Option<String>,
    pub community_string: String,
    pub snmp_version: i16,
    pub snmp_port: i32,
    pub polling_enabled: bool,
    /// Last-known reachability, as stamped by `DeviceRepository::update_status`.
    pub connection_status: String,
    pub last_polled: Option<DateTimeUtc>,
    pub last_online: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::alarms::Entity")]
    Alarms,
    #[sea_orm(has_many = "super::interface_metrics::Entity")]
    InterfaceMetrics,
    #[sea_orm(has_many = "super::device_health_metrics::Entity")]
    DeviceHealthMetrics,
    #[sea_orm(has_many = "super::device_inventory::Entity")]
    DeviceInventory,
}

impl Related<super::alarms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alarms.def()
    }
}

impl Related<super::interface_metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterfaceMetrics.def()
    }
}

impl Related<super::device_health_metrics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeviceHealthMetrics.def()
    }
}

impl Related<super::device_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeviceInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
