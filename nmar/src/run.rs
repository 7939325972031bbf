//! Orchestration for `nmar run`: one fresh module per requested kind.

use tracing::{debug, instrument};

use crate::core::events::ModuleLog;
use crate::core::kind::ModuleKind;
use crate::core::module::Module;
use crate::core::types::ModuleReport;

/// Construct a module of `kind`, execute it once, and report the result.
#[instrument(skip(log))]
pub fn run_module<L: ModuleLog>(kind: ModuleKind, log: L) -> ModuleReport {
    let mut module = Module::new(kind, log);
    module.execute();
    let report = ModuleReport::from(&module);
    debug!(adjustments = report.adjustments, "module finished");
    report
}

/// Run each kind in the given order. Instances share nothing but the log.
pub fn run_modules<L: ModuleLog>(kinds: &[ModuleKind], log: &L) -> Vec<ModuleReport> {
    kinds.iter().map(|kind| run_module(*kind, log)).collect()
}
