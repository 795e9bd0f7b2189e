use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_devices_table::Device;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeviceHealthMetric::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceHealthMetric::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeviceHealthMetric::DeviceId).uuid().not_null())
                    .col(
                        ColumnDef::new(DeviceHealthMetric::DeviceName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DeviceHealthMetric::UptimeSeconds)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DeviceHealthMetric::CpuUsage).double())
                    .col(ColumnDef::new(DeviceHealthMetric::MemoryUsage).double())
                    .col(ColumnDef::new(DeviceHealthMetric::Temperature).double())
                    .col(
                        ColumnDef::new(DeviceHealthMetric::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_health_metric_device")
                            .from(DeviceHealthMetric::Table, DeviceHealthMetric::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_device_health_metric_device_collected")
                    .table(DeviceHealthMetric::Table)
                    .col(DeviceHealthMetric::DeviceId)
                    .col(DeviceHealthMetric::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceHealthMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeviceHealthMetric {
    Table,
    Id,
    DeviceId,
    DeviceName,
    UptimeSeconds,
    CpuUsage,
    MemoryUsage,
    Temperature,
    Timestamp,
}
