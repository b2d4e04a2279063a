//! Tests for `buildpanel config` and `buildpanel list`.

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{SHELL_BUILDERS, TestEnv};

#[test]
fn init_writes_defaults() {
  let env = TestEnv::empty();

  env.cmd().args(["config", "init"]).assert().success();

  let content = std::fs::read_to_string(&env.config_path).unwrap();
  let builders: Value = serde_json::from_str(&content).unwrap();
  assert!(builders.as_array().unwrap().iter().any(|b| b["name"] == "Python"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
  let env = TestEnv::with_config(SHELL_BUILDERS);

  env
    .cmd()
    .args(["config", "init"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

  assert_eq!(std::fs::read_to_string(&env.config_path).unwrap(), SHELL_BUILDERS);
}

#[test]
fn init_force_overwrites() {
  let env = TestEnv::with_config(SHELL_BUILDERS);

  env.cmd().args(["config", "init", "--force"]).assert().success();

  assert_ne!(std::fs::read_to_string(&env.config_path).unwrap(), SHELL_BUILDERS);
}

#[test]
fn path_prints_config_location() {
  let env = TestEnv::empty();

  env
    .cmd()
    .args(["config", "path"])
    .assert()
    .success()
    .stdout(predicate::str::contains(env.config_path.to_string_lossy().as_ref()));
}

#[test]
fn check_reports_broken_pattern() {
  let env = TestEnv::with_config(SHELL_BUILDERS);

  env
    .cmd()
    .args(["config", "check"])
    .assert()
    .failure()
    .stdout(predicate::str::contains("Bash"))
    .stderr(predicate::str::contains("builder 'Broken' has an invalid line pattern"));
}

#[test]
fn check_passes_for_defaults() {
  let env = TestEnv::empty();
  env.cmd().args(["config", "init"]).assert().success();

  env.cmd().args(["config", "check"]).assert().success();
}

#[test]
fn check_warns_about_duplicates() {
  let env = TestEnv::with_config(
    r#"[
      {"name": "Python", "cmd": "python3 $FILE", "linereg": "line (\\d+)"},
      {"name": "python", "cmd": "python2 $FILE", "linereg": "line (\\d+)"}
    ]"#,
  );

  env
    .cmd()
    .args(["config", "check"])
    .assert()
    .success()
    .stderr(predicate::str::contains("defined more than once"));
}

#[test]
fn check_warns_about_missing_placeholder() {
  let env = TestEnv::with_config(r#"[{"name": "Make", "cmd": "make all", "linereg": ":(\\d+):"}]"#);

  env
    .cmd()
    .args(["config", "check"])
    .assert()
    .success()
    .stderr(predicate::str::contains("'Make' never references $FILE"));
}

#[test]
#[cfg(unix)]
fn edit_opens_configured_editor() {
  let env = TestEnv::empty();

  env
    .cmd()
    .args(["config", "edit"])
    .env("VISUAL", "")
    .env("EDITOR", "true")
    .assert()
    .success()
    .stdout(predicate::str::contains("next build"));

  assert!(env.config_path.exists());
}

#[test]
fn list_json() {
  let env = TestEnv::with_config(SHELL_BUILDERS);

  let output = env.cmd().args(["list", "--output", "json"]).output().unwrap();

  assert!(output.status.success());
  let builders: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(builders.as_array().unwrap().len(), 2);
  assert_eq!(builders[0]["cmd"], "/bin/sh $FILE");
}
