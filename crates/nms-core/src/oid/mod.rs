//! OID catalog: bidirectional lookup between numeric object identifiers and
//! semantic names, with filtered views by vendor and by category.
//!
//! The catalog is built once at process start from four static tables
//! (generic RFC MIBs plus Cisco/Fortinet/Mikrotik extensions) and is
//! immutable and freely shared afterward. An optional JSON file can
//! supersede the built-in tables entirely; see [`OidMap::load_override`].

mod catalog;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub use catalog::{generic_table, health_table, interface_table, inventory_table};

use crate::error::{Error, Result};

/// The kind of value a catalog entry resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// An instantaneous measurement (percentages, speeds, temperatures).
    Gauge,
    /// A monotonically increasing counter (octet/packet/error totals).
    Counter,
    /// A textual value (descriptions, names, firmware strings).
    String,
    /// A bitmask value.
    Bits,
}

/// Device vendor family used to select a health/inventory OID strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    /// No vendor-specific match; HOST-RESOURCES-MIB fallback applies.
    Generic,
    /// Cisco IOS/IOS-XE family.
    Cisco,
    /// Fortinet FortiOS family.
    Fortinet,
    /// MikroTik RouterOS family.
    Mikrotik,
}

impl Vendor {
    /// Classify a vendor from a `sysDescr` string by case-insensitive
    /// substring match, falling back to [`Vendor::Generic`].
    #[must_use]
    pub fn classify(sys_descr: &str) -> Self {
        let lower = sys_descr.to_lowercase();
        if lower.contains("cisco") {
            Self::Cisco
        } else if lower.contains("fortinet") || lower.contains("fortigate") {
            Self::Fortinet
        } else if lower.contains("mikrotik") {
            Self::Mikrotik
        } else {
            Self::Generic
        }
    }
}

/// A single catalog entry: a numeric OID paired with its semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OidMapping {
    /// Dotted numeric OID, e.g. `1.3.6.1.2.1.1.1.0`.
    pub oid: String,
    /// Semantic name, e.g. `sysDescr`.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// What kind of value this OID resolves to.
    pub metric_type: MetricType,
    /// Optional unit label (e.g. `celsius`, `bps`).
    #[serde(default)]
    pub unit: Option<String>,
    /// Vendor this mapping applies to; `None` means generic/RFC.
    #[serde(default)]
    pub vendor: Option<Vendor>,
    /// Multiplier applied when normalizing the raw value.
    #[serde(default = "OidMapping::default_conversion_factor")]
    pub conversion_factor: f64,
}

impl OidMapping {
    const fn default_conversion_factor() -> f64 {
        1.0
    }
}

/// The OID catalog: bidirectional `oid <-> name` lookup plus filtered views.
#[derive(Debug, Clone, Default)]
pub struct OidMap {
    by_oid: HashMap<String, OidMapping>,
    by_name: HashMap<String, String>,
}

impl OidMap {
    /// Build the catalog from the built-in generic and vendor tables.
    #[must_use]
    pub fn new() -> Self {
        let mut map = Self::default();
        for mapping in catalog::generic_table()
            .into_iter()
            .chain(catalog::interface_table())
            .chain(catalog::health_table())
            .chain(catalog::inventory_table())
        {
            map.insert(mapping);
        }
        map
    }

    fn insert(&mut self, mapping: OidMapping) {
        self.by_name.insert(mapping.name.clone(), mapping.oid.clone());
        self.by_oid.insert(mapping.oid.clone(), mapping);
    }

    /// Replace the entire catalog with the contents of a JSON override file.
    ///
    /// The file must contain an object mapping OID string to mapping fields;
    /// see the module docs. This *supersedes*, it does not merge with, the
    /// built-in tables.
    pub fn load_override(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config_with_source(format!("reading OID override {}", path.display()), e))?;
        Self::import_json(&text)
    }

    /// Serialize the catalog to the same `oid -> mapping` JSON shape
    /// [`OidMap::load_override`] and [`OidMap::import_json`] read.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.by_oid)?)
    }

    /// Rebuild a catalog from JSON previously produced by
    /// [`OidMap::export_json`].
    pub fn import_json(text: &str) -> Result<Self> {
        let raw: HashMap<String, OidMapping> = serde_json::from_str(text)?;
        let mut map = Self::default();
        for mapping in raw.into_values() {
            map.insert(mapping);
        }
        Ok(map)
    }

    /// Look up a mapping by its numeric OID.
    #[must_use]
    pub fn by_oid(&self, oid: &str) -> Option<&OidMapping> {
        self.by_oid.get(oid)
    }

    /// Look up the numeric OID for a semantic name.
    #[must_use]
    pub fn oid_for_name(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// Look up a mapping by its semantic name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&OidMapping> {
        self.oid_for_name(name).and_then(|oid| self.by_oid(oid))
    }

    /// All mappings belonging to the ten interface-table leaves.
    #[must_use]
    pub fn interface_mappings(&self) -> Vec<&OidMapping> {
        catalog::interface_table()
            .iter()
            .filter_map(|m| self.by_oid(&m.oid))
            .collect()
    }

    /// All health mappings for a given vendor (CPU/memory/temperature).
    #[must_use]
    pub fn health_mappings_for(&self, vendor: Vendor) -> Vec<&OidMapping> {
        self.by_oid
            .values()
            .filter(|m| m.vendor == Some(vendor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_bijective_for_generic_table() {
        let map = OidMap::new();
        for mapping in catalog::generic_table() {
            let by_oid = map.by_oid(&mapping.oid).expect("oid present");
            assert_eq!(by_oid.name, mapping.name);
            let by_name = map.by_name(&mapping.name).expect("name present");
            assert_eq!(by_name.oid, mapping.oid);
        }
    }

    #[test]
    fn export_then_import_reconstructs_an_equal_catalog() {
        let map = OidMap::new();
        let json = map.export_json().expect("export");
        let reloaded = OidMap::import_json(&json).expect("import");

        assert_eq!(reloaded.by_oid.len(), map.by_oid.len());
        for mapping in catalog::generic_table()
            .into_iter()
            .chain(catalog::interface_table())
            .chain(catalog::health_table())
            .chain(catalog::inventory_table())
        {
            assert_eq!(reloaded.by_oid(&mapping.oid), map.by_oid(&mapping.oid));
            assert_eq!(reloaded.by_name(&mapping.name), map.by_name(&mapping.name));
        }
    }

    #[test]
    fn vendor_classification() {
        assert_eq!(Vendor::classify("Cisco IOS Software"), Vendor::Cisco);
        assert_eq!(Vendor::classify("FortiGate-60F"), Vendor::Fortinet);
        assert_eq!(Vendor::classify("Fortinet product"), Vendor::Fortinet);
        assert_eq!(Vendor::classify("MikroTik RouterOS"), Vendor::Mikrotik);
        assert_eq!(Vendor::classify("Linux server 5.10"), Vendor::Generic);
    }

    #[test]
    fn override_supersedes_built_ins() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("oids.json");
        std::fs::write(
            &path,
            r#"{"1.2.3.4": {"oid": "1.2.3.4", "name": "custom", "description": "d", "metric_type": "gauge"}}"#,
        )
        .unwrap();
        let map = OidMap::load_override(&path).expect("override loads");
        assert!(map.by_name("custom").is_some());
        assert!(map.by_name("sysDescr").is_none());
    }
}
