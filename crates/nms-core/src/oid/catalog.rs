//! Built-in OID tables: generic RFC MIBs plus Cisco/Fortinet/Mikrotik
//! vendor extensions. Values are taken from the standard MIB-II and
//! ENTITY-MIB/HOST-RESOURCES-MIB definitions and from each vendor's
//! published enterprise MIBs.

use super::{MetricType, OidMapping, Vendor};

fn mapping(
    oid: &str,
    name: &str,
    description: &str,
    metric_type: MetricType,
    unit: Option<&str>,
    vendor: Option<Vendor>,
    conversion_factor: f64,
) -> OidMapping {
    OidMapping {
        oid: oid.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        metric_type,
        unit: unit.map(str::to_string),
        vendor,
        conversion_factor,
    }
}

/// System-level scalars used for health and reachability checks.
pub fn generic_table() -> Vec<OidMapping> {
    vec![
        mapping(
            "1.3.6.1.2.1.1.1.0",
            "sysDescr",
            "System description",
            MetricType::String,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.1.3.0",
            "sysUpTime",
            "System uptime in hundredths of a second",
            MetricType::Counter,
            Some("seconds"),
            None,
            0.01,
        ),
        mapping(
            "1.3.6.1.2.1.1.5.0",
            "sysName",
            "System name",
            MetricType::String,
            None,
            None,
            1.0,
        ),
    ]
}

/// The ten interface-table leaves under `ifTable` (1.3.6.1.2.1.2.2.1), one
/// column each; the row index is appended at poll time.
pub fn interface_table() -> Vec<OidMapping> {
    vec![
        mapping(
            "1.3.6.1.2.1.2.2.1.1",
            "ifIndex",
            "Interface index",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.2",
            "ifDescr",
            "Interface description",
            MetricType::String,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.3",
            "ifType",
            "Interface type",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.4",
            "ifMtu",
            "Interface MTU",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.5",
            "ifSpeed",
            "Interface speed",
            MetricType::Gauge,
            Some("bps"),
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.7",
            "ifAdminStatus",
            "Interface administrative status",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.8",
            "ifOperStatus",
            "Interface operational status",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.10",
            "ifInOctets",
            "Interface inbound octets",
            MetricType::Counter,
            Some("bytes"),
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.14",
            "ifInErrors",
            "Interface inbound errors",
            MetricType::Counter,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.16",
            "ifOutOctets",
            "Interface outbound octets",
            MetricType::Counter,
            Some("bytes"),
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.2.2.1.20",
            "ifOutErrors",
            "Interface outbound errors",
            MetricType::Counter,
            None,
            None,
            1.0,
        ),
    ]
}

/// Vendor-specific CPU/memory/temperature OIDs.
pub fn health_table() -> Vec<OidMapping> {
    vec![
        // Cisco CPU (primary, fallback, legacy)
        mapping(
            "1.3.6.1.4.1.9.9.109.1.1.1.1.5.1",
            "cisco_cpu_5min_primary",
            "Cisco 5-minute CPU utilization (primary instance)",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.109.1.1.1.1.5",
            "cisco_cpu_5min",
            "Cisco 5-minute CPU utilization",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.2.1.58.0",
            "cisco_cpu_legacy",
            "Cisco legacy CPU utilization",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Cisco),
            1.0,
        ),
        // Cisco memory (used/free pool bytes)
        mapping(
            "1.3.6.1.4.1.9.9.48.1.1.1.5.1",
            "cisco_mem_used",
            "Cisco memory pool used bytes",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.48.1.1.1.5",
            "cisco_mem_used_fallback",
            "Cisco memory pool used bytes (no-instance fallback)",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.48.1.1.1.6.1",
            "cisco_mem_free",
            "Cisco memory pool free bytes",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.48.1.1.1.6",
            "cisco_mem_free_fallback",
            "Cisco memory pool free bytes (no-instance fallback)",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Cisco),
            1.0,
        ),
        // Cisco temperature (direct sensor indices + sensor-type table)
        mapping(
            "1.3.6.1.4.1.9.9.13.1.3.1.3.1",
            "cisco_temp_sensor_1",
            "Cisco temperature sensor (index 1)",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.13.1.3.1.3.1004",
            "cisco_temp_sensor_1004",
            "Cisco temperature sensor (index 1004)",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.13.1.3.1.3.1001",
            "cisco_temp_sensor_1001",
            "Cisco temperature sensor (index 1001)",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.91.1.1.1.1.1",
            "cisco_entity_sensor_type_table",
            "Cisco entity sensor type table (walk; type 8 = celsius)",
            MetricType::Gauge,
            None,
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.91.1.1.1.1.4",
            "cisco_entity_sensor_value_table",
            "Cisco entity sensor value table",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.9.9.13.1.3.1.3",
            "cisco_temp_table",
            "Cisco temperature table (walk fallback)",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Cisco),
            1.0,
        ),
        // Fortinet
        mapping(
            "1.3.6.1.4.1.12356.101.13.2.1.1.2",
            "fortinet_cpu",
            "FortiGate CPU utilization",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Fortinet),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.12356.101.13.2.1.2.1",
            "fortinet_memory",
            "FortiGate memory utilization",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Fortinet),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.12356.101.13.2.1.3.1",
            "fortinet_temperature",
            "FortiGate temperature",
            MetricType::Gauge,
            Some("celsius"),
            Some(Vendor::Fortinet),
            1.0,
        ),
        // Mikrotik
        mapping(
            "1.3.6.1.4.1.14988.1.1.3.2",
            "mikrotik_cpu",
            "MikroTik CPU utilization",
            MetricType::Gauge,
            Some("percent"),
            Some(Vendor::Mikrotik),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.14988.1.1.3.3",
            "mikrotik_mem_total",
            "MikroTik total memory",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Mikrotik),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.14988.1.1.3.4",
            "mikrotik_mem_free",
            "MikroTik free memory",
            MetricType::Gauge,
            Some("bytes"),
            Some(Vendor::Mikrotik),
            1.0,
        ),
        // Generic fallback (HOST-RESOURCES-MIB)
        mapping(
            "1.3.6.1.2.1.25.3.3.1.2",
            "hr_processor_load",
            "HOST-RESOURCES-MIB processor load table",
            MetricType::Gauge,
            Some("percent"),
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.25.2.3.1.2",
            "hr_storage_type",
            "HOST-RESOURCES-MIB storage type column",
            MetricType::String,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.25.2.3.1.6",
            "hr_storage_used",
            "HOST-RESOURCES-MIB storage used units",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.25.2.3.1.5",
            "hr_storage_size",
            "HOST-RESOURCES-MIB storage size units",
            MetricType::Gauge,
            None,
            None,
            1.0,
        ),
    ]
}

/// Vendor-specific inventory OIDs (serial number, model, firmware).
pub fn inventory_table() -> Vec<OidMapping> {
    vec![
        mapping(
            "1.3.6.1.2.1.47.1.1.1.1.11",
            "entity_serial_num",
            "ENTITY-MIB physical serial number (walk)",
            MetricType::String,
            None,
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.2.1.47.1.1.1.1.13",
            "entity_model_name",
            "ENTITY-MIB physical model name (walk)",
            MetricType::String,
            None,
            Some(Vendor::Cisco),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.12356.100.1.1.1.0",
            "fortinet_serial",
            "FortiGate serial number",
            MetricType::String,
            None,
            Some(Vendor::Fortinet),
            1.0,
        ),
        mapping(
            "1.3.6.1.4.1.14988.1.1.4.4.0",
            "mikrotik_firmware_version",
            "MikroTik RouterOS firmware version",
            MetricType::String,
            None,
            Some(Vendor::Mikrotik),
            1.0,
        ),
    ]
}
