//! Repository layer: three narrow repositories over [`crate::entities`], each
//! scoped to one database session per polling cycle rather than per device
//! or per call.

mod alarms;
mod devices;
mod metrics;

#[cfg(test)]
mod test_support;

pub use alarms::AlarmRepository;
pub use devices::DeviceRepository;
pub use metrics::MetricsRepository;
