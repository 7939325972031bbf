//! Runner configuration stored in `nmar.toml`.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::kind::ModuleKind;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "nmar.toml";

/// How `nmar run` prints reports to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Pretty,
    Compact,
}

/// Runner configuration (TOML).
///
/// Missing fields default to running every module with `info` logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NmarConfig {
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub output: OutputFormat,

    /// Kinds run by `nmar run` when none are given on the command line.
    pub modules: Vec<ModuleKind>,
}

impl Default for NmarConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            output: OutputFormat::Pretty,
            modules: ModuleKind::ALL.to_vec(),
        }
    }
}

impl NmarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be non-empty"));
        }
        if self.modules.is_empty() {
            return Err(anyhow!("modules must list at least one kind"));
        }
        let mut seen = HashSet::new();
        for kind in &self.modules {
            if !seen.insert(*kind) {
                return Err(anyhow!("modules lists {} more than once", kind));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `NmarConfig::default()`.
pub fn load_config(path: &Path) -> Result<NmarConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = NmarConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: NmarConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &NmarConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write the default config unless `path` exists. Returns whether it wrote.
pub fn init_config(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        return Ok(false);
    }
    write_config(path, &NmarConfig::default())?;
    Ok(true)
}

/// Write through `<file name>.tmp` next to `path`, then rename over it.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = temp_path(path)?;
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace {}", path.display()));
    }
    Ok(())
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("path has no file name {}", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
