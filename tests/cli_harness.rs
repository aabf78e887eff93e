//! `bpv` process-level integration harness.
//!
//! # What this covers
//!
//! This harness exercises `bpv` as a compiled binary via
//! [`std::process::Command`], with configuration supplied the way CI would:
//! through `BPV_*` environment variables.
//!
//! - **Catalogue**: `bpv list` prints every scenario id.
//! - **Selection errors**: unknown scenarios and suites exit non-zero.
//! - **Run + JSON report**: a passing run exits 0 and reports `passed`; a
//!   failing one exits 1.
//! - **Fixture commands**: materialize, status, teardown.
//!
//! # Running
//!
//! ```sh
//! cargo test --test cli_harness
//! ```

mod common;
use common::*;

use std::process::{Command, Output};

fn bpv(sandbox: &Sandbox, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bpv"))
        .args(args)
        .env("XDG_CONFIG_HOME", sandbox.scratch().with_file_name("xdg"))
        .env("BPV_RUNNER__BINARY", sandbox.tool_path())
        .env("BPV_RUNNER__ARGS", "{prompt}")
        .env("BPV_FIXTURE__SCRATCH_DIR", sandbox.scratch())
        .env("RUST_LOG", "warn")
        .output()
        .expect("bpv binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Catalogue and selection
// ---------------------------------------------------------------------------

#[test]
fn list_prints_every_scenario() {
    let sandbox = Sandbox::new(FakeTool::replying(""));
    let output = bpv(&sandbox, &["list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for scenario in bpv::scenarios::catalogue() {
        assert!(text.contains(&scenario.id()), "missing {}", scenario.id());
    }
}

#[test]
fn unknown_scenario_exits_nonzero() {
    let sandbox = Sandbox::new(FakeTool::replying(""));
    let output = bpv(&sandbox, &["run", "--scenario", "does_not_exist"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown scenario"));
}

#[test]
fn unknown_suite_is_a_usage_error() {
    let sandbox = Sandbox::new(FakeTool::replying(""));
    let output = bpv(&sandbox, &["run", "--suite", "performance"]);
    assert_eq!(output.status.code(), Some(2));
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

#[test]
fn passing_run_emits_json_and_exits_zero() {
    let sandbox = Sandbox::new(FakeTool::replying("hardcoded api_key found"));
    let output = bpv(
        &sandbox,
        &["run", "--scenario", "security_review", "--format", "json"],
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["summary"]["passed"], 1);
    assert_eq!(report["scenarios"][0]["name"], "security_review");
    assert_eq!(report["scenarios"][0]["outcome"]["status"], "passed");
}

#[test]
fn failing_run_exits_one() {
    let sandbox = Sandbox::new(FakeTool::replying("nothing to report"));
    let output = bpv(&sandbox, &["run", "--suite", "review"]);

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("0 passed, 3 failed, 0 skipped"), "{text}");
    assert_eq!(text.matches("output contained none of").count(), 3, "{text}");
    assert!(!text.contains("failed to launch"), "{text}");
}

// ---------------------------------------------------------------------------
// Fixture commands
// ---------------------------------------------------------------------------

#[test]
fn fixture_lifecycle_commands() {
    let sandbox = Sandbox::new(FakeTool::replying(""));

    assert!(bpv(&sandbox, &["fixture", "materialize"]).status.success());
    assert!(sandbox.scratch().join("src/api/handlers.rs").exists());

    std::fs::write(sandbox.scratch().join("README.md"), "# changed\n").unwrap();
    let status = bpv(&sandbox, &["fixture", "status"]);
    assert!(stdout(&status).contains("modified: README.md"));

    assert!(bpv(&sandbox, &["fixture", "reset"]).status.success());
    assert!(stdout(&bpv(&sandbox, &["fixture", "status"])).contains("clean"));

    assert!(bpv(&sandbox, &["fixture", "teardown"]).status.success());
    assert!(!sandbox.scratch().exists());
}
