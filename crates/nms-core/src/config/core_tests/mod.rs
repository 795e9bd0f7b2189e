//! Configuration core tests module
//!
//! This module contains all tests for the configuration system,
//! organized by functionality area.

mod creation_tests;
mod environment_tests;
mod file_tests;
mod network_tests;
mod validation_tests;
