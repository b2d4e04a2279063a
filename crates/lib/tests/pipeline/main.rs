//! End-to-end tests of the build pipeline through the public API.

use std::cell::Cell;
use std::path::Path;

use buildpanel_lib::annotations::NullView;
use buildpanel_lib::context::BuildContext;
use buildpanel_lib::format::format;
use buildpanel_lib::parser::parse;
use buildpanel_lib::registry::BuilderRegistry;
use buildpanel_lib::resolve::{ResolvedCommand, resolve_for};
use buildpanel_lib::runner::{Executor, ProcessResult, RunError};
use buildpanel_lib::session::{BuildError, BuildOutcome, BuildSession};

const CONFIG: &str = r#"[
  {"name": "python", "cmd": "python $FILE", "linereg": "line (\\d+)"},
  {"name": "Ruby", "cmd": "ruby -w $FILE", "linereg": ":(\\d+):"}
]"#;

struct Canned {
  result: ProcessResult,
  calls: Cell<usize>,
}

impl Canned {
  fn new(success: bool, stdout: &str, stderr: &str) -> Self {
    Self {
      result: ProcessResult {
        success,
        code: Some(if success { 0 } else { 1 }),
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
      },
      calls: Cell::new(0),
    }
  }
}

impl Executor for Canned {
  async fn execute(&self, _command: &ResolvedCommand, _working_directory: &Path) -> Result<ProcessResult, RunError> {
    self.calls.set(self.calls.get() + 1);
    Ok(self.result.clone())
  }
}

#[test]
fn python_scenario_resolves_and_parses() {
  let registry = BuilderRegistry::load(CONFIG).unwrap();
  let context = BuildContext::new("/tmp", "/tmp/a.py", "Python");

  let command = resolve_for(&registry, &context).unwrap();
  assert_eq!(command.command_line(), "python /tmp/a.py");

  let matches = parse("File a.py, line 5\nSyntaxError", &command.line_regex);
  assert_eq!(matches.len(), 1);
  assert_eq!(matches[0].line, 4);
}

#[test]
fn lookup_ignores_case_for_every_entry() {
  let registry = BuilderRegistry::load(CONFIG).unwrap();
  assert_eq!(registry.len(), 2);
  for name in ["python", "PYTHON", "Python", "ruby", "RUBY"] {
    assert!(registry.find_by_language(name).is_some(), "{name}");
  }
}

#[test]
fn synthetic_output_round_trip() {
  let registry = BuilderRegistry::load(CONFIG).unwrap();
  let command = resolve_for(&registry, &BuildContext::new("/w", "/w/x.rb", "ruby")).unwrap();

  let text = (1..=10).map(|i| format!("x.rb:{i}: warning")).collect::<Vec<_>>().join("\n");
  let lines: Vec<usize> = parse(&text, &command.line_regex).iter().map(|m| m.line).collect();

  assert_eq!(lines, (0..10).collect::<Vec<_>>());
}

#[tokio::test]
async fn session_scenarios() {
  let session = BuildSession::new(BuilderRegistry::load(CONFIG).unwrap(), NullView);
  let context = BuildContext::new("/tmp", "/tmp/a.py", "Python");

  let failing = Canned::new(false, "", "File a.py, line 5\nSyntaxError");
  let outcome = session.build(&context, &failing).await.unwrap();
  assert!(matches!(outcome, BuildOutcome::Failed { ref annotations, .. } if annotations[0].line == 4));

  let succeeding = Canned::new(true, r"Hello\nWorld", "");
  let outcome = session.build(&context, &succeeding).await.unwrap();
  assert_eq!(outcome.display(), format(r"Hello\nWorld"));
  assert_eq!(outcome.display(), "Hello<br />World");
  assert!(session.annotations().is_empty());

  let elixir = BuildContext::new("/tmp", "/tmp/a.ex", "Elixir");
  let untouched = Canned::new(true, "", "");
  let result = session.build(&elixir, &untouched).await;
  assert!(matches!(result, Err(BuildError::Resolve(_))));
  assert_eq!(untouched.calls.get(), 0);
}
