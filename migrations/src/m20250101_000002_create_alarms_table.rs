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
                    .table(Alarm::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Alarm::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Alarm::DeviceId).uuid().not_null())
                    .col(ColumnDef::new(Alarm::DeviceName).text().not_null())
                    .col(ColumnDef::new(Alarm::AlarmType).text().not_null())
                    .col(ColumnDef::new(Alarm::Severity).text().not_null())
                    .col(ColumnDef::new(Alarm::Message).text().not_null())
                    .col(
                        ColumnDef::new(Alarm::Acknowledged)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Alarm::AcknowledgedBy).text())
                    .col(
                        ColumnDef::new(Alarm::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Alarm::AlarmMetadata)
                            .json()
                            .not_null()
                            .default("{}"),
                    )
                    .col(
                        ColumnDef::new(Alarm::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alarm::AcknowledgedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Alarm::ResolvedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_alarm_device")
                            .from(Alarm::Table, Alarm::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alarm_device_severity_created")
                    .table(Alarm::Table)
                    .col(Alarm::DeviceId)
                    .col(Alarm::Severity)
                    .col(Alarm::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_alarm_resolved")
                    .table(Alarm::Table)
                    .col(Alarm::Resolved)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alarm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Alarm {
    Table,
    Id,
    DeviceId,
    DeviceName,
    AlarmType,
    Severity,
    Message,
    Acknowledged,
    AcknowledgedBy,
    Resolved,
    AlarmMetadata,
    CreatedAt,
    AcknowledgedAt,
    ResolvedAt,
}
