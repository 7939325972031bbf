//! Command-line entry point for the NMAR module runner.
//!
//! Runs one or more fixed modules, prints their reports as JSON, and can
//! persist or re-check them as snapshot files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use nmar::core::kind::ModuleKind;
use nmar::core::types::ModuleReport;
use nmar::exit_codes;
use nmar::io::config::{DEFAULT_CONFIG_PATH, NmarConfig, OutputFormat, init_config, load_config};
use nmar::io::snapshot::{Snapshot, load_snapshot, write_snapshot};
use nmar::io::tracing_log::TracingLog;
use nmar::logging;
use nmar::run::run_modules;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nmar",
    version,
    about = "Run the fixed NMAR modules and report their state"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print every module kind in canonical order.
    List,
    /// Execute modules and print their reports as JSON.
    Run {
        /// Kinds to run (defaults to `modules` from the config).
        kinds: Vec<ModuleKind>,
        /// Also write the reports to this snapshot file.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check a snapshot file against the schema and report invariants.
    Validate {
        /// Snapshot written by `nmar run --out`.
        path: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(exit_codes::INVALID);
            }
        },
    };
    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

/// Only `run` reads the config; other commands log with the default filter.
fn run(cli: Cli) -> Result<()> {
    let cfg = match &cli.command {
        Command::Run { .. } => load_config(&cli.config)?,
        _ => NmarConfig::default(),
    };
    logging::init(&cfg.log_filter);

    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::List => cmd_list(),
        Command::Run { kinds, out } => cmd_run(&cfg, &kinds, out.as_deref()),
        Command::Validate { path } => cmd_validate(&path),
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if init_config(path, force)? {
        println!("wrote {}", path.display());
    } else {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Ok(())
}

fn cmd_list() -> Result<()> {
    for kind in ModuleKind::ALL {
        println!("{}", kind);
    }
    Ok(())
}

fn cmd_run(cfg: &NmarConfig, kinds: &[ModuleKind], out: Option<&Path>) -> Result<()> {
    let kinds = select_kinds(cfg, kinds)?;
    info!(count = kinds.len(), "running modules");
    let reports = run_modules(&kinds, &TracingLog);
    println!("{}", render_reports(&reports, cfg.output)?);

    if let Some(path) = out {
        write_snapshot(path, &Snapshot::new(reports))
            .with_context(|| format!("write snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }
    Ok(())
}

fn cmd_validate(path: &Path) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    println!(
        "{}: {} report(s) valid",
        path.display(),
        snapshot.reports.len()
    );
    Ok(())
}

/// Kinds from the command line, falling back to the config. Rejects repeats.
fn select_kinds(cfg: &NmarConfig, requested: &[ModuleKind]) -> Result<Vec<ModuleKind>> {
    if requested.is_empty() {
        return Ok(cfg.modules.clone());
    }
    let mut seen = HashSet::new();
    for kind in requested {
        if !seen.insert(*kind) {
            bail!("module kind {} given more than once", kind);
        }
    }
    Ok(requested.to_vec())
}

fn render_reports(reports: &[ModuleReport], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(reports),
        OutputFormat::Compact => serde_json::to_string(reports),
    };
    rendered.context("serialize reports")
}
