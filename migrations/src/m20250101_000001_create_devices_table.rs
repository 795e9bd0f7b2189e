use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Device::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Device::Name).text().not_null())
                    .col(ColumnDef::new(Device::IpAddress).text().not_null())
                    .col(ColumnDef::new(Device::Vendor).text())
                    .col(ColumnDef::new(Device::CommunityString).text().not_null())
                    .col(
                        ColumnDef::new(Device::SnmpVersion)
                            .small_integer()
                            .not_null()
                            .default(2),
                    )
                    .col(
                        ColumnDef::new(Device::SnmpPort)
                            .integer()
                            .not_null()
                            .default(161),
                    )
                    .col(
                        ColumnDef::new(Device::PollingEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Device::ConnectionStatus)
                            .text()
                            .not_null()
                            .default("unknown"),
                    )
                    .col(ColumnDef::new(Device::LastPolled).timestamp_with_time_zone())
                    .col(ColumnDef::new(Device::LastOnline).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Device::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Device::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_device_name")
                    .table(Device::Table)
                    .col(Device::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Device {
    Table,
    Id,
    Name,
    IpAddress,
    Vendor,
    CommunityString,
    SnmpVersion,
    SnmpPort,
    PollingEnabled,
    ConnectionStatus,
    LastPolled,
    LastOnline,
    CreatedAt,
    UpdatedAt,
}
