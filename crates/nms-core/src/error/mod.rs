//! Error types for the NMS agent
//!
//! A single error hierarchy carrying enough structured context (component,
//! target, operation) to log usefully at the point an error crosses a
//! module boundary, without a bespoke error type per module.

use thiserror::Error;

mod constructors;
mod conversions;

#[cfg(test)]
mod tests;

/// NMS agent error type with structured context
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error with details
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Database error with operation context
    #[error("Database error during {operation}: {message}")]
    Database {
        /// The database operation that failed
        operation: String,
        /// Human-readable error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// SNMP error with target context
    #[error("SNMP error for target {target}: {message}")]
    Snmp {
        /// The SNMP target that failed
        target: String,
        /// Human-readable error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation error with field context
    #[error("Validation error for field '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
        /// The invalid value (optional)
        value: Option<String>,
    },

    /// Network error with connectivity context
    #[error("Network error connecting to '{endpoint}': {message}")]
    Network {
        /// The network endpoint
        endpoint: String,
        /// Human-readable error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error with file context
    #[error("I/O error with file '{path}': {message}")]
    Io {
        /// The file path involved
        path: String,
        /// Human-readable error message
        message: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization error with format context
    #[error("Serialization error for {format}: {message}")]
    Serialization {
        /// The serialization format (JSON, YAML, etc.)
        format: String,
        /// Human-readable error message
        message: String,
        /// The underlying serialization error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other error with context
    #[error("Error in {context}: {message}")]
    Other {
        /// The operation context
        context: String,
        /// Human-readable error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type for NMS agent operations
pub type Result<T> = std::result::Result<T, Error>;
