//! NMS Core Library
//!
//! Core functionality for the network monitoring agent: the OID catalog, SNMP
//! session/client layer, the device poller with vendor dispatch, the
//! stateful alarm engine, the repository layer over `sea_orm`, and the
//! upstream API client.
//!
//! # Architecture
//!
//! - [`oid`] - OID catalog (C1)
//! - [`snmp`] - SNMP session and client (C2)
//! - [`poller`] - Device poller with vendor dispatch (C3)
//! - [`alarm`] - Stateful alarm engine (C4)
//! - [`repository`] - Repository layer over `entities` (C5)
//! - [`api_client`] - Upstream HTTP API client (C6)
//! - [`models`] - Shared domain types (alarms, metrics, inventory)
//! - [`config`] - Configuration management
//! - [`error`] - Unified error types
//! - [`logging`] - Tracing/logging initialization
//! - [`database`] - Database connection management
//! - [`entities`] - `sea_orm` entity definitions

pub mod alarm;
pub mod api_client;
pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod logging;
pub mod models;
pub mod oid;
pub mod poller;
pub mod repository;
pub mod snmp;

pub use error::{Error, Result};

/// Prelude module for commonly used types.
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::config::Config;
    pub use crate::logging::init_tracing;

    pub use crate::models::{
        Alarm, AlarmSeverity, AlarmType, DeviceHealthMetric, DeviceInventory, DeviceStatus,
        InterfaceMetric, PreviousState,
    };

    pub use crate::oid::{MetricType, OidMap, OidMapping};

    pub use crate::snmp::{
        SessionConfig, SessionOutcome, SnmpCredentials, SnmpError, SnmpResult, SnmpSession,
        SnmpValue,
    };

    pub use crate::poller::{DeviceConfig, DevicePoller, Vendor};

    pub use crate::alarm::AlarmEngine;

    pub use crate::repository::{AlarmRepository, DeviceRepository, MetricsRepository};

    pub use crate::api_client::ApiClient;
}
