//! Snapshot load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::Draft;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::validate_reports;
use crate::core::types::ModuleReport;
use crate::io::config::write_atomic;

pub const SNAPSHOT_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/snapshot.schema.json"
));
pub const SNAPSHOT_VERSION: u32 = 1;

/// Reports from one `nmar run`, as persisted by `--out`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub reports: Vec<ModuleReport>,
}

impl Snapshot {
    pub fn new(reports: Vec<ModuleReport>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            reports,
        }
    }
}

/// Atomically write a snapshot as pretty JSON with a trailing newline.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    debug!(path = %path.display(), reports = snapshot.reports.len(), "writing snapshot");
    let mut buf = serde_json::to_string_pretty(snapshot).context("serialize snapshot")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Read and validate a snapshot from disk.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read snapshot {}", path.display()))?;
    validate_snapshot(&raw).with_context(|| format!("validate snapshot {}", path.display()))
}

/// Parse and validate snapshot text: schema conformance + report invariants.
pub fn validate_snapshot(raw: &str) -> Result<Snapshot> {
    let instance: Value = serde_json::from_str(raw).context("parse snapshot json")?;
    validate_schema(&instance)?;
    let snapshot: Snapshot =
        serde_json::from_value(instance).context("deserialize snapshot")?;
    let errors = validate_reports(&snapshot.reports);
    if !errors.is_empty() {
        bail!("invariant violations:\n- {}", errors.join("\n- "));
    }
    Ok(snapshot)
}

/// Validate against the embedded schema (Draft 2020-12).
fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(SNAPSHOT_SCHEMA).context("parse embedded snapshot schema")?;
    let compiled = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| anyhow!("invalid snapshot schema: {}", err))?;
    let messages: Vec<String> = compiled
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect();
    if !messages.is_empty() {
        bail!("schema validation failed:\n- {}", messages.join("\n- "));
    }
    Ok(())
}
