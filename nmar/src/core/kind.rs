//! The closed set of module kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five module kinds.
///
/// Variant order is the canonical order used by `nmar list` and by the
/// default config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    AdaptiveEngine,
    MemoryAnchor,
    MetaReasoning,
    ModalityFusion,
    TopologyMesh,
}

impl ModuleKind {
    /// All kinds in canonical order.
    pub const ALL: [ModuleKind; 5] = [
        ModuleKind::AdaptiveEngine,
        ModuleKind::MemoryAnchor,
        ModuleKind::MetaReasoning,
        ModuleKind::ModalityFusion,
        ModuleKind::TopologyMesh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::AdaptiveEngine => "AdaptiveEngine",
            ModuleKind::MemoryAnchor => "MemoryAnchor",
            ModuleKind::MetaReasoning => "MetaReasoning",
            ModuleKind::ModalityFusion => "ModalityFusion",
            ModuleKind::TopologyMesh => "TopologyMesh",
        }
    }

    /// State keys populated by `execute` for this kind, sorted.
    pub fn state_keys(self) -> &'static [&'static str] {
        match self {
            ModuleKind::AdaptiveEngine => &["learning"],
            ModuleKind::MemoryAnchor => &["memory"],
            ModuleKind::MetaReasoning => &["score"],
            ModuleKind::ModalityFusion => &["fusion"],
            ModuleKind::TopologyMesh => &["edges", "nodes"],
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical name in any ASCII case, or its kebab-case form.
impl FromStr for ModuleKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let folded: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        ModuleKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| {
                let names: Vec<&str> = ModuleKind::ALL.iter().map(|kind| kind.name()).collect();
                format!(
                    "unknown module kind '{}' (expected one of: {})",
                    raw,
                    names.join(", ")
                )
            })
    }
}
