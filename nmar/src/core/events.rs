//! Lifecycle events emitted by modules and the log seam that receives them.
//!
//! Modules never write to an output stream directly. Every observable side
//! effect goes through a [`ModuleLog`], so core logic stays free of I/O and
//! tests can assert on the exact event sequence.

use std::fmt;

use crate::core::kind::ModuleKind;
use crate::core::state::ModuleState;

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleEvent {
    Initialized { kind: ModuleKind },
    Executing { kind: ModuleKind },
    Adjusting { kind: ModuleKind },
    StateReported { kind: ModuleKind, state: ModuleState },
}

impl ModuleEvent {
    pub fn kind(&self) -> ModuleKind {
        match self {
            ModuleEvent::Initialized { kind }
            | ModuleEvent::Executing { kind }
            | ModuleEvent::Adjusting { kind }
            | ModuleEvent::StateReported { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for ModuleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleEvent::Initialized { kind } => write!(f, "Initializing {} module...", kind),
            ModuleEvent::Executing { kind } => write!(f, "Executing {} logic...", kind),
            ModuleEvent::Adjusting { .. } => f.write_str("Adjusting internal weights and mesh..."),
            ModuleEvent::StateReported { state, .. } => write!(f, "State: {}", state),
        }
    }
}

/// Sink for module events.
pub trait ModuleLog {
    fn record(&self, event: &ModuleEvent);
}

impl<T: ModuleLog + ?Sized> ModuleLog for &T {
    fn record(&self, event: &ModuleEvent) {
        (**self).record(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl ModuleLog for NullLog {
    fn record(&self, _event: &ModuleEvent) {}
}
