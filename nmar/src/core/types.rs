//! Shared report types produced by module runs.
//!
//! These types define the stable contract between the runner, the CLI and
//! on-disk snapshots. They must remain deterministic across runs.

use serde::{Deserialize, Serialize};

use crate::core::events::ModuleLog;
use crate::core::kind::ModuleKind;
use crate::core::module::Module;
use crate::core::state::ModuleState;

/// Outcome of executing one module instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleReport {
    pub kind: ModuleKind,
    pub state: ModuleState,
    /// How many times `adjust` ran on the instance.
    pub adjustments: u32,
}

impl<L: ModuleLog> From<&Module<L>> for ModuleReport {
    fn from(module: &Module<L>) -> Self {
        Self {
            kind: module.kind(),
            state: module.state().clone(),
            adjustments: module.adjustments(),
        }
    }
}
