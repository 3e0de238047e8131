//! End-to-end tests for the reprobe CLI: rank, run, report, exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn reprobe_cmd() -> Command {
    Command::cargo_bin("reprobe").unwrap()
}

fn create_plan(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("plan.json");
    fs::write(
        &path,
        r#"[
  {"id": "t001", "priority": "low",  "steps": [{"action": "click", "selector": "button"}]},
  {"id": "t002", "priority": "low",  "steps": [{"action": "click"}, {"action": "wait"}]},
  {"id": "t003", "priority": "high", "steps": [{"action": "click"}, {"action": "type"}, {"action": "wait"}]}
]"#,
    )
    .unwrap();
    path
}

#[test]
fn missing_plan_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    reprobe_cmd()
        .args(["run", "--plan"])
        .arg(dir.path().join("nope.json"))
        .arg("--out")
        .arg(dir.path().join("run"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("setup error"));
}

#[test]
fn malformed_plan_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    let plan = dir.path().join("plan.json");
    fs::write(&plan, "{broken").unwrap();
    reprobe_cmd()
        .args(["rank", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(dir.path().join("top.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to parse plan"));
}

#[test]
fn rank_writes_scored_top_k_in_order() {
    let dir = TempDir::new().unwrap();
    let plan = create_plan(&dir);
    let out = dir.path().join("top.json");

    reprobe_cmd()
        .args(["rank", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(&out)
        .args(["--top-k", "2"])
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let top = v["top_k"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["case"]["id"], "t003");
    assert_eq!(top[0]["score"], 9.0);
    assert_eq!(top[1]["case"]["id"], "t002");
}

#[test]
fn failing_cases_still_exit_zero_and_produce_a_full_report() {
    // No urls and no base url: every case ends in an ERROR verdict, which
    // is an analysis outcome, not a tooling error.
    let dir = TempDir::new().unwrap();
    let plan = create_plan(&dir);
    let run_dir = dir.path().join("run");

    reprobe_cmd()
        .args(["run", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(&run_dir)
        .args(["--repeats", "0"])
        .env_remove("REPROBE_BASE_URL")
        .assert()
        .success()
        .stdout(predicate::str::contains("report:"));

    for file in ["raw_results.json", "analyzed.json", "report.json"] {
        assert!(run_dir.join(file).is_file(), "missing {file}");
    }
    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(run_dir.join("report.json")).unwrap()).unwrap();
    let cases = report["cases"].as_array().unwrap();
    assert_eq!(cases.len(), 3);
    for case in cases {
        assert_eq!(case["verdict"], "ERROR");
    }
}

#[test]
fn report_rebuilds_from_persisted_results() {
    let dir = TempDir::new().unwrap();
    let plan = create_plan(&dir);
    let run_dir = dir.path().join("run");

    reprobe_cmd()
        .args(["run", "--plan"])
        .arg(&plan)
        .arg("--out")
        .arg(&run_dir)
        .args(["--repeats", "0"])
        .assert()
        .success();

    let out = dir.path().join("rebuilt.json");
    reprobe_cmd()
        .args(["report", "--run-dir"])
        .arg(&run_dir)
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let rebuilt: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(rebuilt["cases"].as_array().unwrap().len(), 3);
}

#[test]
fn report_on_empty_dir_is_a_setup_error() {
    let dir = TempDir::new().unwrap();
    reprobe_cmd()
        .args(["report", "--run-dir"])
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no raw results"));
}
