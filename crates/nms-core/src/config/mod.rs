//! Configuration management for the agent.
//!
//! TOML-based configuration with a layered environment-variable override,
//! matching the flat, non-nested variable names the service expects.

// Re-export submodules
pub mod core;
pub mod defaults;
pub mod network;
pub mod types;
pub mod utils;

#[cfg(test)]
mod core_tests;

// Re-export the main Config struct and commonly used items
pub use core::Config;
pub use types::*;
