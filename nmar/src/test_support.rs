//! Test-only helpers for observing modules and staging files.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::core::events::{ModuleEvent, ModuleLog, NullLog};
use crate::core::kind::ModuleKind;
use crate::core::module::Module;
use crate::core::types::ModuleReport;

/// Log that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingLog {
    events: Mutex<Vec<ModuleEvent>>,
}

impl RecordingLog {
    pub fn events(&self) -> Vec<ModuleEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count<F: Fn(&ModuleEvent) -> bool>(&self, predicate: F) -> usize {
        self.events().iter().filter(|event| predicate(event)).count()
    }
}

impl ModuleLog for RecordingLog {
    fn record(&self, event: &ModuleEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

/// Create a module of `kind` and execute it once.
pub fn executed<L: ModuleLog>(kind: ModuleKind, log: L) -> Module<L> {
    let mut module = Module::new(kind, log);
    module.execute();
    module
}

/// Report for a freshly executed module of `kind`.
pub fn report(kind: ModuleKind) -> ModuleReport {
    ModuleReport::from(&executed(kind, NullLog))
}

/// Temporary directory holding config and snapshot files for a test.
pub struct TestDir {
    dir: tempfile::TempDir,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("nmar.toml")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.path().join("out").join("snapshot.json")
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path().join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
