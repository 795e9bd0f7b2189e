//! `sea_orm` entity definitions for the NMS agent's schema.

pub mod alarms;
pub mod device_health_metrics;
pub mod device_inventory;
pub mod devices;
pub mod interface_metrics;

pub use alarms::Entity as Alarms;
pub use device_health_metrics::Entity as DeviceHealthMetrics;
pub use device_inventory::Entity as DeviceInventory;
pub use devices::Entity as Devices;
pub use interface_metrics::Entity as InterfaceMetrics;
