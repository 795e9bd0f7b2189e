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
                    .table(InterfaceMetric::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterfaceMetric::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InterfaceMetric::DeviceId).uuid().not_null())
                    .col(
                        ColumnDef::new(InterfaceMetric::InterfaceIndex)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterfaceMetric::InterfaceName)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterfaceMetric::Description).text().not_null())
                    .col(ColumnDef::new(InterfaceMetric::AdminStatus).text().not_null())
                    .col(ColumnDef::new(InterfaceMetric::OperStatus).text().not_null())
                    .col(ColumnDef::new(InterfaceMetric::Speed).big_integer().not_null())
                    .col(
                        ColumnDef::new(InterfaceMetric::InOctets)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterfaceMetric::OutOctets)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterfaceMetric::InErrors)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterfaceMetric::OutErrors)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InterfaceMetric::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interface_metric_device")
                            .from(InterfaceMetric::Table, InterfaceMetric::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interface_metric_device_index_collected")
                    .table(InterfaceMetric::Table)
                    .col(InterfaceMetric::DeviceId)
                    .col(InterfaceMetric::InterfaceIndex)
                    .col(InterfaceMetric::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InterfaceMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InterfaceMetric {
    Table,
    Id,
    DeviceId,
    InterfaceIndex,
    InterfaceName,
    Description,
    AdminStatus,
    OperStatus,
    Speed,
    InOctets,
    OutOctets,
    InErrors,
    OutErrors,
    Timestamp,
}
