//! Implementation of the `buildpanel run` command.
//!
//! Builds the given file with the builder configured for its language and
//! shows the result the way the editor panel would.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use buildpanel_lib::context::BuildContext;
use buildpanel_lib::runner::ProcessRunner;
use buildpanel_lib::session::{BuildOutcome, BuildSession};

use crate::cmd::ConfigSource;
use crate::output::{OutputFormat, print_error, print_info, print_json, print_success, print_warning};
use crate::view::TerminalView;

/// Execute the run command.
///
/// Returns whether the build succeeded. A failed build is not an error; errors
/// are reserved for builds that could not be started.
pub fn cmd_run(file: &Path, language: Option<&str>, config: &ConfigSource, format: OutputFormat) -> Result<bool> {
  let registry = config.load()?;
  let context = BuildContext::from_file(file, language).context("Cannot build this file")?;

  let source = std::fs::read_to_string(&context.file_path).unwrap_or_else(|e| {
    debug!(error = %e, "source not readable as text, markers shown without excerpt");
    String::new()
  });
  let session = BuildSession::new(registry, TerminalView::new(&source));

  if matches!(format, OutputFormat::Text) {
    print_info(&format!(
      "Building {} ({})",
      context.file_path.display(),
      context.language_name
    ));
  }

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  let outcome = rt
    .block_on(session.build(&context, &ProcessRunner))
    .context("Build could not run")?;

  match format {
    OutputFormat::Json => print_json(&outcome)?,
    OutputFormat::Html => println!("{}", outcome.display()),
    OutputFormat::Text => print_text(&outcome, &session.tracker().view().render(), &context),
  }

  Ok(outcome.is_success())
}

fn print_text(outcome: &BuildOutcome, markers: &str, context: &BuildContext) {
  match outcome {
    BuildOutcome::Succeeded { command, output, .. } => {
      print_info(command);
      print!("{}", output);
      if !output.is_empty() && !output.ends_with('\n') {
        println!();
      }
      print_success("Build succeeded");
    }
    BuildOutcome::Failed {
      command,
      code,
      output,
      annotations,
      ..
    } => {
      print_info(command);
      eprint!("{}", output);
      if !output.is_empty() && !output.ends_with('\n') {
        eprintln!();
      }
      match code {
        Some(code) => print_error(&format!("Build failed (exit code {code})")),
        None => print_error("Build failed (terminated by signal)"),
      }
      if annotations.is_empty() {
        print_warning(&format!(
          "No output line matched the {} line pattern",
          context.language_name
        ));
      } else {
        println!();
        print!("{}", markers);
      }
    }
  }
}
