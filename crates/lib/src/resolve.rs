//! Turning a builder entry and a build context into a runnable command.

use std::ffi::OsString;
use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::context::BuildContext;
use crate::registry::{BuilderEntry, BuilderRegistry};
use crate::template::{Template, TemplateError};

#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("no builder configured for language '{0}'")]
  UnsupportedLanguage(String),

  #[error("builder '{name}' has an invalid line pattern: {source}")]
  Pattern {
    name: String,
    #[source]
    source: regex::Error,
  },

  #[error("builder '{name}' has an invalid command: {source}")]
  Template {
    name: String,
    #[source]
    source: TemplateError,
  },

  #[error("builder '{name}' has an empty command")]
  EmptyCommand { name: String },
}

/// A concrete command: program, argument slots and the compiled line pattern.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
  pub program: OsString,
  pub args: Vec<OsString>,
  pub line_regex: Regex,
}

impl ResolvedCommand {
  /// The command rendered for display, arguments joined by single spaces.
  ///
  /// This is not shell-quoted and must not be fed back to a shell. Bytes
  /// that are not valid UTF-8 are shown as U+FFFD here only.
  pub fn command_line(&self) -> String {
    std::iter::once(&self.program)
      .chain(&self.args)
      .map(|arg| arg.to_string_lossy())
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl fmt::Display for ResolvedCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.command_line())
  }
}

/// Resolve an entry against a context.
///
/// The first `$FILE` in the template is replaced by the context's file path
/// inside its own argument slot. The entry's `linereg` is compiled here, so a
/// broken pattern only affects builds for that entry.
pub fn resolve(entry: &BuilderEntry, context: &BuildContext) -> Result<ResolvedCommand, ResolveError> {
  let template = Template::parse(&entry.cmd).map_err(|source| ResolveError::Template {
    name: entry.name.clone(),
    source,
  })?;

  let line_regex = Regex::new(&entry.linereg).map_err(|source| ResolveError::Pattern {
    name: entry.name.clone(),
    source,
  })?;

  let mut argv = template.render(&context.file_path).into_iter();
  let program = argv.next().ok_or_else(|| ResolveError::EmptyCommand {
    name: entry.name.clone(),
  })?;

  Ok(ResolvedCommand {
    program,
    args: argv.collect(),
    line_regex,
  })
}

/// Look up the builder for the context's language and resolve it.
pub fn resolve_for(registry: &BuilderRegistry, context: &BuildContext) -> Result<ResolvedCommand, ResolveError> {
  let entry = registry
    .find_by_language(&context.language_name)
    .ok_or_else(|| ResolveError::UnsupportedLanguage(context.language_name.clone()))?;
  resolve(entry, context)
}

/// Check that an entry would resolve, without a real file.
pub fn validate(entry: &BuilderEntry) -> Result<(), ResolveError> {
  resolve(entry, &BuildContext::new(".", "file", &entry.name)).map(|_| ())
}
