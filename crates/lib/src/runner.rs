//! Running a resolved command as a subprocess.
//!
//! The command is spawned directly from its argument vector, never through a
//! shell. There is no timeout: a build that never exits keeps its session busy
//! until it does.

use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::resolve::ResolvedCommand;

/// The process could not be run at all.
#[derive(Debug, Error)]
pub enum RunError {
  #[error("failed to start '{program}' in {}: {source}", working_directory.display())]
  Spawn {
    program: String,
    working_directory: std::path::PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// Captured result of one build process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
  pub success: bool,
  /// Exit code, `None` when terminated by a signal.
  pub code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
}

impl ProcessResult {
  /// Text produced by a successful build.
  pub fn success_text(&self) -> &str {
    &self.stdout
  }

  /// Text produced by a failed build: stderr followed by stdout.
  pub fn failure_text(&self) -> String {
    match (self.stderr.is_empty(), self.stdout.is_empty()) {
      (_, true) => self.stderr.clone(),
      (true, false) => self.stdout.clone(),
      (false, false) => {
        let mut text = self.stderr.clone();
        if !text.ends_with('\n') {
          text.push('\n');
        }
        text.push_str(&self.stdout);
        text
      }
    }
  }
}

/// Something that can run a resolved command.
#[allow(async_fn_in_trait)]
pub trait Executor {
  async fn execute(&self, command: &ResolvedCommand, working_directory: &Path) -> Result<ProcessResult, RunError>;
}

/// Runs commands as OS subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl Executor for ProcessRunner {
  async fn execute(&self, command: &ResolvedCommand, working_directory: &Path) -> Result<ProcessResult, RunError> {
    info!(cmd = %command, cwd = %working_directory.display(), "running build");

    let output = Command::new(&command.program)
      .args(&command.args)
      .current_dir(working_directory)
      .stdin(Stdio::null())
      .kill_on_drop(true)
      .output()
      .await
      .map_err(|source| RunError::Spawn {
        program: command.program.to_string_lossy().into_owned(),
        working_directory: working_directory.to_path_buf(),
        source,
      })?;

    let result = ProcessResult {
      success: output.status.success(),
      code: output.status.code(),
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    if !result.stderr.is_empty() {
      debug!(stderr = %result.stderr, "command stderr");
    }
    if !result.stdout.is_empty() {
      debug!(stdout = %result.stdout, "command stdout");
    }
    debug!(success = result.success, code = ?result.code, "build process exited");

    Ok(result)
  }
}
