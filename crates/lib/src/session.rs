//! The build session: explicit owner of everything a build touches.
//!
//! A session is created once at startup with the loaded registry and the view
//! markers are drawn on. Builds run on a single thread; the session refuses a
//! new build while an earlier one is still outstanding instead of queueing or
//! cancelling it.
//!
//! # Build cycle
//!
//! 1. Clear all markers, whatever the build's eventual result.
//! 2. Resolve the command for the context's language. Nothing is spawned if
//!    this fails.
//! 3. Run the command.
//! 4. On success, render stdout for the panel. On failure, render the failure
//!    text and mark every line the builder's pattern finds in it.

use std::cell::{Cell, Ref, RefCell};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::annotations::{Annotation, AnnotationTracker, MarkerView};
use crate::context::BuildContext;
use crate::format::{format, format_failure};
use crate::parser::parse;
use crate::registry::BuilderRegistry;
use crate::resolve::{ResolveError, resolve_for};
use crate::runner::{Executor, RunError};

#[derive(Debug, Error)]
pub enum BuildError {
  #[error("a build is already in progress")]
  Busy,

  #[error(transparent)]
  Resolve(#[from] ResolveError),

  #[error(transparent)]
  Connection(#[from] RunError),
}

/// What a completed build produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BuildOutcome {
  Succeeded {
    command: String,
    output: String,
    display: String,
  },
  /// The process reported failure. `annotations` may be empty when no output
  /// line matched the builder's pattern.
  Failed {
    command: String,
    code: Option<i32>,
    output: String,
    display: String,
    annotations: Vec<Annotation>,
  },
}

impl BuildOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, BuildOutcome::Succeeded { .. })
  }

  /// Raw captured output.
  pub fn output(&self) -> &str {
    match self {
      BuildOutcome::Succeeded { output, .. } | BuildOutcome::Failed { output, .. } => output,
    }
  }

  /// Panel rendering of the output.
  pub fn display(&self) -> &str {
    match self {
      BuildOutcome::Succeeded { display, .. } | BuildOutcome::Failed { display, .. } => display,
    }
  }
}

pub struct BuildSession<V> {
  registry: BuilderRegistry,
  tracker: RefCell<AnnotationTracker<V>>,
  busy: Cell<bool>,
}

struct BusyGuard<'a>(&'a Cell<bool>);

impl<'a> BusyGuard<'a> {
  fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
    if flag.replace(true) {
      return None;
    }
    Some(Self(flag))
  }
}

impl Drop for BusyGuard<'_> {
  fn drop(&mut self) {
    self.0.set(false);
  }
}

impl<V: MarkerView> BuildSession<V> {
  pub fn new(registry: BuilderRegistry, view: V) -> Self {
    Self {
      registry,
      tracker: RefCell::new(AnnotationTracker::new(view)),
      busy: Cell::new(false),
    }
  }

  pub fn is_busy(&self) -> bool {
    self.busy.get()
  }

  /// Lines currently marked.
  pub fn annotations(&self) -> Vec<Annotation> {
    self.tracker.borrow().annotations().to_vec()
  }

  pub fn tracker(&self) -> Ref<'_, AnnotationTracker<V>> {
    self.tracker.borrow()
  }

  /// Run one build cycle for `context`.
  ///
  /// A failing process is a normal outcome ([`BuildOutcome::Failed`]); errors
  /// are reserved for builds that could not run at all.
  pub async fn build(&self, context: &BuildContext, executor: &impl Executor) -> Result<BuildOutcome, BuildError> {
    let Some(_guard) = BusyGuard::acquire(&self.busy) else {
      warn!(file = %context.file_path.display(), "build rejected, another build is in progress");
      return Err(BuildError::Busy);
    };

    self.tracker.borrow_mut().clear();

    let command = resolve_for(&self.registry, context)?;
    info!(
      language = %context.language_name,
      file = %context.file_path.display(),
      "building"
    );

    let result = executor
      .execute(&command, &context.working_directory)
      .await
      .inspect_err(|e| warn!(error = %e, cmd = %command, "build process could not start"))?;
    let command_line = command.command_line();

    if result.success {
      let output = result.success_text().to_string();
      return Ok(BuildOutcome::Succeeded {
        command: command_line,
        display: format(&output),
        output,
      });
    }

    let output = result.failure_text();
    let matches = parse(&output, &command.line_regex);
    info!(code = ?result.code, marked = matches.len(), "build failed");

    let mut tracker = self.tracker.borrow_mut();
    tracker.add_all(matches);

    Ok(BuildOutcome::Failed {
      command: command_line,
      code: result.code,
      display: format_failure(&output),
      annotations: tracker.annotations().to_vec(),
      output,
    })
  }
}
