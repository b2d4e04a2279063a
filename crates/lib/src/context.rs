//! The build context: what the active document looks like at trigger time.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::language::detect_language;

#[derive(Debug, Error)]
pub enum ContextError {
  #[error("cannot open {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },

  #[error("{} is not a file", path.display())]
  NotAFile { path: PathBuf },

  #[error("cannot determine the language of {}, pass it explicitly", path.display())]
  UnknownLanguage { path: PathBuf },
}

/// Captured fresh for every build from the active document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
  /// Directory the command runs in (the file's parent).
  pub working_directory: PathBuf,
  /// Absolute path substituted for the placeholder.
  pub file_path: PathBuf,
  /// Declared language of the document.
  pub language_name: String,
}

impl BuildContext {
  pub fn new(working_directory: impl Into<PathBuf>, file_path: impl Into<PathBuf>, language_name: &str) -> Self {
    Self {
      working_directory: working_directory.into(),
      file_path: file_path.into(),
      language_name: language_name.to_string(),
    }
  }

  /// Capture the context for a file on disk.
  ///
  /// The path is canonicalized, its parent becomes the working directory and
  /// the language is taken from `language` or detected from the extension.
  pub fn from_file(path: &Path, language: Option<&str>) -> Result<Self, ContextError> {
    let file_path = dunce::canonicalize(path).map_err(|source| ContextError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    if !file_path.is_file() {
      return Err(ContextError::NotAFile { path: file_path });
    }

    let language_name = match language {
      Some(language) => language.to_string(),
      None => detect_language(&file_path)
        .ok_or_else(|| ContextError::UnknownLanguage { path: file_path.clone() })?
        .to_string(),
    };

    let working_directory = file_path
      .parent()
      .map(Path::to_path_buf)
      .unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      working_directory,
      file_path,
      language_name,
    })
  }
}
