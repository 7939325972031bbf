//! Deterministic, pure logic shared by the module runner.
//!
//! Core modules must be free of I/O side effects. Logging goes through the
//! [`events::ModuleLog`] seam so callers decide where events end up.

pub mod events;
pub mod invariants;
pub mod kind;
pub mod module;
pub mod state;
pub mod types;
