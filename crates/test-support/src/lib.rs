//! Shared test utilities for the NMS agent: an in-memory SQLite schema built
//! from the `sea_orm` entities, savepoint-scoped test isolation, and a
//! one-time tracing subscriber for test output.

pub mod logging;
pub mod sqlite;
