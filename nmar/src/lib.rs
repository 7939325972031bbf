//! Runner for the five fixed NMAR modules.
//!
//! Each module kind (AdaptiveEngine, MemoryAnchor, MetaReasoning,
//! ModalityFusion, TopologyMesh) owns a small state mapping that `execute`
//! fills with a fixed shape. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (kinds, state, module behavior,
//!   report invariants). Logging goes through the [`core::events::ModuleLog`]
//!   trait; no I/O.
//! - **[`io`]**: Side-effecting operations (config, snapshots, the `tracing`
//!   log backend).
//!
//! [`run`] coordinates the two to implement `nmar run`.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
