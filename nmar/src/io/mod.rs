//! I/O helpers for nmar commands.

pub mod config;
pub mod snapshot;
pub mod tracing_log;
