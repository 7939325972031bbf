//! A single module instance and its fixed per-kind behavior.

use crate::core::events::{ModuleEvent, ModuleLog};
use crate::core::kind::ModuleKind;
use crate::core::state::{ModuleState, StateValue};

/// Constant returned by [`Module::evaluate`].
pub const EVALUATION_SCORE: f64 = 0.42;
/// Scores strictly below this trigger [`Module::adjust`] during execution.
pub const ADJUST_THRESHOLD: f64 = 0.5;

pub const FUSION_SUMMARY: &str = "Text + Image + Audio → Unified Embedding";
pub const LEARNING_SUMMARY: &str = "Few-shot adaptation triggered";

/// One module instance. Owns its state; shares nothing with other instances.
#[derive(Debug)]
pub struct Module<L: ModuleLog> {
    kind: ModuleKind,
    state: ModuleState,
    adjustments: u32,
    log: L,
}

impl<L: ModuleLog> Module<L> {
    pub fn new(kind: ModuleKind, log: L) -> Self {
        log.record(&ModuleEvent::Initialized { kind });
        Self {
            kind,
            state: ModuleState::new(),
            adjustments: 0,
            log,
        }
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    /// Number of times [`Module::adjust`] has run on this instance.
    pub fn adjustments(&self) -> u32 {
        self.adjustments
    }

    /// Apply this kind's fixed behavior to the state, then report it.
    ///
    /// Values are overwritten on every call, so repeated calls leave the
    /// state unchanged after the first.
    pub fn execute(&mut self) {
        self.log.record(&ModuleEvent::Executing { kind: self.kind });
        match self.kind {
            ModuleKind::TopologyMesh => {
                self.state
                    .set("nodes", StateValue::list(&["input", "context", "output"]));
                self.state.set(
                    "edges",
                    StateValue::pairs(&[("input", "context"), ("context", "output")]),
                );
            }
            ModuleKind::ModalityFusion => {
                self.state.set("fusion", StateValue::text(FUSION_SUMMARY));
            }
            ModuleKind::MetaReasoning => {
                let score = self.evaluate();
                self.state.set("score", StateValue::Score(score));
                if score < ADJUST_THRESHOLD {
                    self.adjust();
                }
            }
            ModuleKind::MemoryAnchor => {
                self.state.set(
                    "memory",
                    StateValue::map(&[("2025", "climate data"), ("2024", "policy logs")]),
                );
            }
            ModuleKind::AdaptiveEngine => {
                self.state.set("learning", StateValue::text(LEARNING_SUMMARY));
            }
        }
        self.log.record(&ModuleEvent::StateReported {
            kind: self.kind,
            state: self.state.clone(),
        });
    }

    pub fn evaluate(&self) -> f64 {
        EVALUATION_SCORE
    }

    /// Log an adjustment. Never touches state.
    pub fn adjust(&mut self) {
        self.adjustments += 1;
        self.log.record(&ModuleEvent::Adjusting { kind: self.kind });
    }
}
