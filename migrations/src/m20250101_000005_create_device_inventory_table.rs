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
                    .table(DeviceInventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DeviceInventory::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DeviceInventory::DeviceId).uuid().not_null())
                    .col(ColumnDef::new(DeviceInventory::SysDescr).text().not_null())
                    .col(ColumnDef::new(DeviceInventory::SerialNumber).text())
                    .col(ColumnDef::new(DeviceInventory::FirmwareVersion).text())
                    .col(ColumnDef::new(DeviceInventory::VendorModel).text())
                    .col(
                        ColumnDef::new(DeviceInventory::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_device_inventory_device")
                            .from(DeviceInventory::Table, DeviceInventory::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_device_inventory_device")
                    .table(DeviceInventory::Table)
                    .col(DeviceInventory::DeviceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeviceInventory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DeviceInventory {
    Table,
    Id,
    DeviceId,
    SysDescr,
    SerialNumber,
    FirmwareVersion,
    VendorModel,
    Timestamp,
}
