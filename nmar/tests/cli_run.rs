//! CLI tests for the `nmar` binary.
//!
//! Spawns the binary in a temp directory and checks stdout, snapshot files,
//! and exit codes.

use std::fs;
use std::process::{Command, Output};

use nmar::exit_codes;
use nmar::io::snapshot::load_snapshot;
use nmar::test_support::TestDir;
use serde_json::Value;

fn nmar(dir: &TestDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nmar"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("spawn nmar")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout json")
}

#[test]
fn list_prints_kinds_in_canonical_order() {
    let dir = TestDir::new().expect("dir");
    let output = nmar(&dir, &["list"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        names,
        vec![
            "AdaptiveEngine",
            "MemoryAnchor",
            "MetaReasoning",
            "ModalityFusion",
            "TopologyMesh"
        ]
    );
}

#[test]
fn run_without_config_runs_all_kinds() {
    let dir = TestDir::new().expect("dir");
    let output = nmar(&dir, &["run"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let reports = stdout_json(&output);
    let reports = reports.as_array().expect("array");
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[2]["kind"], "MetaReasoning");
    assert_eq!(reports[2]["state"]["score"], 0.42);
    assert_eq!(reports[2]["adjustments"], 1);
}

#[test]
fn run_selected_kind_writes_snapshot() {
    let dir = TestDir::new().expect("dir");
    let out = dir.snapshot_path();
    let out_arg = out.to_str().expect("utf8 path");
    let output = nmar(&dir, &["run", "topology-mesh", "--out", out_arg]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let reports = stdout_json(&output);
    assert_eq!(
        reports[0]["state"]["edges"],
        serde_json::json!([["input", "context"], ["context", "output"]])
    );

    let snapshot = load_snapshot(&out).expect("snapshot");
    assert_eq!(snapshot.reports.len(), 1);

    let validated = nmar(&dir, &["validate", out_arg]);
    assert_eq!(validated.status.code(), Some(exit_codes::OK));
}

#[test]
fn run_uses_config_modules_and_compact_output() {
    let dir = TestDir::new().expect("dir");
    dir.write(
        "nmar.toml",
        "output = \"compact\"\nmodules = [\"AdaptiveEngine\"]\n",
    )
    .expect("config");

    let output = nmar(&dir, &["run"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert_eq!(
        stdout.trim_end(),
        r#"[{"kind":"AdaptiveEngine","state":{"learning":"Few-shot adaptation triggered"},"adjustments":0}]"#
    );
}

#[test]
fn init_writes_default_config_once() {
    let dir = TestDir::new().expect("dir");
    let first = nmar(&dir, &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let written = fs::read_to_string(dir.config_path()).expect("config");
    assert!(written.contains("log_filter = \"info\""));

    dir.write("nmar.toml", "log_filter = \"warn\"\n").expect("overwrite");
    let second = nmar(&dir, &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::OK));
    let kept = fs::read_to_string(dir.config_path()).expect("config");
    assert_eq!(kept, "log_filter = \"warn\"\n");
}

#[test]
fn invalid_config_exits_invalid() {
    let dir = TestDir::new().expect("dir");
    dir.write("nmar.toml", "modules = []\n").expect("config");
    let output = nmar(&dir, &["run"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("modules must list at least one kind"));
}

#[test]
fn validate_rejects_tampered_snapshot() {
    let dir = TestDir::new().expect("dir");
    let path = dir
        .write(
            "tampered.json",
            r#"{"version":1,"reports":[{"kind":"MetaReasoning","state":{"score":0.9},"adjustments":0}]}"#,
        )
        .expect("snapshot");
    let output = nmar(&dir, &["validate", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invariant violations"));
    assert!(stderr.contains("adjustments must be >= 1"));
}

#[test]
fn unknown_kind_is_rejected() {
    let dir = TestDir::new().expect("dir");
    let output = nmar(&dir, &["run", "NeuroMesh"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("unknown module kind 'NeuroMesh'"));
}

#[test]
fn missing_subcommand_exits_invalid() {
    let dir = TestDir::new().expect("dir");
    let output = nmar(&dir, &[]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn help_and_version_exit_ok() {
    let dir = TestDir::new().expect("dir");
    let help = nmar(&dir, &["--help"]);
    assert_eq!(help.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8(help.stdout).expect("utf8").contains("Usage"));
    let version = nmar(&dir, &["--version"]);
    assert_eq!(version.status.code(), Some(exit_codes::OK));
}

#[test]
fn list_and_validate_ignore_broken_config() {
    let dir = TestDir::new().expect("dir");
    dir.write("nmar.toml", "modules = []\n").expect("config");
    let snapshot = dir
        .write("empty.json", r#"{"version":1,"reports":[]}"#)
        .expect("snapshot");

    let listed = nmar(&dir, &["list"]);
    assert_eq!(listed.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8(listed.stdout).expect("utf8").lines().count(), 5);

    let validated = nmar(&dir, &["validate", snapshot.to_str().expect("utf8 path")]);
    assert_eq!(validated.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(validated.stdout).expect("utf8");
    assert!(stdout.contains("0 report(s) valid"));
}
