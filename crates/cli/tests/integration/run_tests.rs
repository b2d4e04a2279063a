//! Tests for `buildpanel run`.

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{SHELL_BUILDERS, TestEnv};

#[test]
#[cfg(unix)]
fn successful_build_shows_output() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file("ok.sh", "echo hello from build\n");

  env
    .cmd()
    .arg("run")
    .arg(&script)
    .assert()
    .success()
    .stdout(predicate::str::contains("hello from build"))
    .stdout(predicate::str::contains("Build succeeded"));
}

#[test]
#[cfg(unix)]
fn failed_build_marks_lines() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file(
    "fail.sh",
    "first=1\nsecond=2\necho 'error on line 2' >&2\nexit 3\n",
  );

  env
    .cmd()
    .arg("run")
    .arg(&script)
    .assert()
    .failure()
    .stderr(predicate::str::contains("error on line 2"))
    .stderr(predicate::str::contains("exit code 3"))
    .stdout(predicate::str::contains("second=2"))
    .stdout(predicate::str::contains("●●●"));
}

#[test]
#[cfg(unix)]
fn failure_without_matching_lines_warns() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file("fail.sh", "echo nothing useful >&2\nexit 1\n");

  env
    .cmd()
    .arg("run")
    .arg(&script)
    .assert()
    .failure()
    .stderr(predicate::str::contains("No output line matched"));
}

#[test]
#[cfg(unix)]
fn json_report_for_failure() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file("fail.sh", "echo 'line 1: bad' >&2\nexit 1\n");

  let output = env
    .cmd()
    .args(["run", "--output", "json"])
    .arg(&script)
    .output()
    .unwrap();

  assert!(!output.status.success());
  let report: Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(report["status"], "failed");
  assert_eq!(report["code"], 1);
  assert_eq!(report["annotations"][0]["line"], 0);
  assert_eq!(report["annotations"][0]["message"], "line 1: bad");
}

#[test]
#[cfg(unix)]
fn html_output_uses_panel_rendering() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file("ok.sh", "echo one\necho '\"two\"'\n");

  env
    .cmd()
    .args(["run", "--output", "html"])
    .arg(&script)
    .assert()
    .success()
    .stdout("one<br />two<br />\n");
}

#[test]
#[cfg(unix)]
fn path_with_spaces_is_passed_intact() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let script = env.write_file("my dir/say hi.sh", "echo spaced ok\n");

  env
    .cmd()
    .arg("run")
    .arg(&script)
    .assert()
    .success()
    .stdout(predicate::str::contains("spaced ok"));
}

#[test]
fn unsupported_language_runs_nothing() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let file = env.write_file("app.ex", "IO.puts(\"hi\")\n");

  env
    .cmd()
    .arg("run")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("no builder configured for language 'Elixir'"));
}

#[test]
fn explicit_language_overrides_detection() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let file = env.write_file("notes.txt", "whatever\n");

  env
    .cmd()
    .args(["run", "--lang", "Broken"])
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid line pattern"));
}

#[test]
fn unknown_extension_needs_language() {
  let env = TestEnv::with_config(SHELL_BUILDERS);
  let file = env.write_file("notes.txt", "whatever\n");

  env
    .cmd()
    .arg("run")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot determine the language"));
}

#[test]
fn missing_program_is_reported() {
  let env = TestEnv::with_config(
    r#"[{"name": "Python", "cmd": "buildpanel-no-such-interpreter $FILE", "linereg": "line (\\d+)"}]"#,
  );
  let file = env.write_file("a.py", "print(1)\n");

  env
    .cmd()
    .arg("run")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to start 'buildpanel-no-such-interpreter'"));
}

#[test]
fn malformed_config_is_fatal() {
  let env = TestEnv::with_config(r#"{"name": "Python"}"#);
  let file = env.write_file("a.py", "print(1)\n");

  env
    .cmd()
    .arg("run")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to load builders config"));
}

#[test]
fn explicit_missing_config_is_an_error() {
  let env = TestEnv::empty();
  let file = env.write_file("a.py", "print(1)\n");

  env
    .cmd()
    .arg("run")
    .arg(&file)
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to read config"));
}
