pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_devices_table;
mod m20250101_000002_create_alarms_table;
mod m20250101_000003_create_interface_metrics_table;
mod m20250101_000004_create_device_health_metrics_table;
mod m20250101_000005_create_device_inventory_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_devices_table::Migration),
            Box::new(m20250101_000002_create_alarms_table::Migration),
            Box::new(m20250101_000003_create_interface_metrics_table::Migration),
            Box::new(m20250101_000004_create_device_health_metrics_table::Migration),
            Box::new(m20250101_000005_create_device_inventory_table::Migration),
        ]
    }
}
