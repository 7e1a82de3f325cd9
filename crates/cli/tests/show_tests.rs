//! Integration tests for `envcascade show`.
//!
//! Responsibilities:
//! - Prove the precedence order end to end: environment, baseline, selector file, local file.
//! - Prove the exit codes for unreadable defaults and unreadable override files.
//! - Prove error output never contains variable values.

mod common;

use common::{Project, envcascade_cmd};
use predicates::prelude::*;
use serde_json::Value;

fn standard_project() -> Project {
    let project = Project::new();
    project
        .write("defaults.env", "ECT_A=1\nECT_B=2\n# comment\nECT_KEEP=baseline\n")
        .write(".env.dev.local", "ECT_B=20\nECT_C=3\n")
        .write(".env.qa.local", "ECT_B=qa\n")
        .write(".env.local", "ECT_C=30\nECT_D=\"quoted value\"\n");
    project
}

fn show_json(cmd: &mut assert_cmd::Command) -> Value {
    let output = cmd.args(["show", "--output", "json"]).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn row<'a>(json: &'a Value, key: &str) -> &'a Value {
    json["variables"]
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["key"] == key)
        .unwrap_or_else(|| panic!("{key} not reported"))
}

#[test]
fn test_show_applies_sources_in_priority_order() {
    let project = standard_project();

    let json = show_json(&mut project.cmd());

    assert_eq!(json["selector"], "dev");
    assert_eq!(row(&json, "ECT_A")["value"], "1");
    assert_eq!(row(&json, "ECT_B")["value"], "2");
    assert_eq!(row(&json, "ECT_B")["source"], "baseline");
    assert_eq!(row(&json, "ECT_C")["value"], "3");
    assert_eq!(row(&json, "ECT_C")["source"], "selector_local");
    assert_eq!(row(&json, "ECT_D")["value"], "quoted value");
    assert_eq!(row(&json, "ECT_D")["source"], "generic_local");
}

#[test]
fn test_show_keeps_preexisting_variables() {
    let project = standard_project();

    let json = show_json(project.cmd().env("ECT_KEEP", "from-shell"));

    assert!(
        json["variables"]
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["key"] != "ECT_KEEP")
    );
    assert!(
        json["preexisting"]
            .as_array()
            .unwrap()
            .contains(&Value::from("ECT_KEEP"))
    );
}

#[test]
fn test_show_selector_from_env_variable() {
    let project = standard_project();

    let json = show_json(project.cmd().env("ENV", "qa"));

    assert_eq!(json["selector"], "qa");
    assert_eq!(row(&json, "ECT_B")["value"], "2");
    assert_eq!(row(&json, "ECT_C")["value"], "30");
    assert_eq!(row(&json, "ECT_C")["source"], "generic_local");
}

#[test]
fn test_show_selector_flag_overrides_env_variable() {
    let project = standard_project();

    let json = show_json(project.cmd().env("ENV", "dev").args(["--selector", "qa"]));

    assert_eq!(json["selector"], "qa");
}

#[test]
fn test_show_baseline_cannot_select_override_file() {
    let project = Project::new();
    project
        .write("defaults.env", "ENV=staging\n")
        .write(".env.staging.local", "ECT_STAGE=yes\n");

    let json = show_json(&mut project.cmd());

    assert_eq!(json["selector"], "dev");
    assert!(
        json["variables"]
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["key"] != "ECT_STAGE")
    );
}

#[test]
fn test_show_dir_option_resolves_override_files() {
    let project = standard_project();

    let mut cmd = envcascade_cmd();
    cmd.arg("--dir").arg(project.path());
    let json = show_json(&mut cmd);

    assert_eq!(json["selector"], "dev");
    assert_eq!(row(&json, "ECT_B")["value"], "20");
    assert_eq!(row(&json, "ECT_B")["source"], "selector_local");
}

#[test]
fn test_show_table_output() {
    let project = standard_project();

    project
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Selector: dev\n"))
        .stdout(predicate::str::contains("KEY\tSOURCE\tVALUE"))
        .stdout(predicate::str::contains("ECT_A\tbaseline\t1"));
}

#[test]
fn test_show_keys_only_hides_values() {
    let project = standard_project();

    project
        .cmd()
        .args(["show", "--keys-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ECT_D\tgeneric_local\n"))
        .stdout(predicate::str::contains("quoted value").not());
}

#[test]
fn test_show_without_any_sources() {
    let project = Project::new();

    envcascade_cmd()
        .current_dir(project.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No variables set."));
}

#[test]
fn test_missing_defaults_file_is_general_error() {
    let project = Project::new();

    project
        .cmd()
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read defaults file"));
}

#[test]
fn test_invalid_output_format_is_general_error() {
    let project = standard_project();

    project
        .cmd()
        .args(["show", "--output", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_unreadable_override_file_is_cascade_error() {
    let project = Project::new();
    project.write("defaults.env", "ECT_A=1\n").block(".env.dev.local");

    project
        .cmd()
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".env.dev.local"));
}

#[test]
fn test_rejected_key_does_not_leak_values() {
    let secret = "supersecret_value_12345";
    let project = Project::new();
    project
        .write("defaults.env", "")
        .write(".env.local", &format!("ECT_OK={secret}\nECT\0BAD={secret}\n"));

    let output = project.cmd().arg("show").output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("line 2"), "stderr: {stderr}");
    assert!(!stderr.contains(secret), "stderr leaked a value: {stderr}");
}
