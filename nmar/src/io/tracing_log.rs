//! Module log backed by `tracing`.

use tracing::{debug, info};

use crate::core::events::{ModuleEvent, ModuleLog};
use crate::core::kind::ModuleKind;
use crate::core::module::Module;

/// Forwards module events to the active `tracing` subscriber.
///
/// Lifecycle events and state reports go out at `info`; adjustments at
/// `debug`. Each event carries a `module` field naming the kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ModuleLog for TracingLog {
    fn record(&self, event: &ModuleEvent) {
        let module = event.kind().name();
        match event {
            ModuleEvent::Adjusting { .. } => debug!(module, "{}", event),
            ModuleEvent::StateReported { state, .. } => {
                info!(module, keys = state.len(), "{}", event);
            }
            ModuleEvent::Initialized { .. } | ModuleEvent::Executing { .. } => {
                info!(module, "{}", event);
            }
        }
    }
}

impl Module<TracingLog> {
    /// Construct a module that logs through `tracing`.
    pub fn traced(kind: ModuleKind) -> Self {
        Module::new(kind, TracingLog)
    }
}
