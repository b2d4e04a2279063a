//! Builder registry: language → command mappings loaded from configuration.
//!
//! The configuration is a JSON array of builder entries:
//!
//! ```json
//! [{ "name": "Python", "cmd": "python3 $FILE", "linereg": "line (\\d+)" }]
//! ```
//!
//! Lookups are case-insensitive on `name`. When several entries share a name
//! the first one in load order is authoritative; the rest stay in
//! [`BuilderRegistry::entries`] but are never selected.

mod defaults;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use defaults::DEFAULT_BUILDERS_JSON;

/// A configured mapping from a language to a command template and an
/// error-line pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderEntry {
  /// Language identifier, matched case-insensitively.
  pub name: String,
  /// Command template containing the `$FILE` placeholder.
  pub cmd: String,
  /// Regular expression whose first capture group is a 1-based line number.
  pub linereg: String,
}

/// Errors raised while loading the builders configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("malformed builders config: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("builder #{index}: field '{field}' must not be empty")]
  EmptyField { index: usize, field: &'static str },
}

/// The loaded set of builders. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct BuilderRegistry {
  entries: Vec<BuilderEntry>,
  by_language: HashMap<String, usize>,
}

impl BuilderRegistry {
  /// Parse a JSON builders configuration.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError`] when the input is not an array of objects with
  /// non-empty `name`, `cmd` and `linereg` strings. Nothing is loaded in that
  /// case.
  pub fn load(raw: &str) -> Result<Self, ConfigError> {
    let entries: Vec<BuilderEntry> = serde_json::from_str(raw)?;
    Self::from_entries(entries)
  }

  /// Read and parse a builders configuration file.
  pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    debug!(path = %path.display(), "loading builders config");
    Self::load(&raw)
  }

  /// The built-in builders.
  pub fn defaults() -> Result<Self, ConfigError> {
    Self::load(DEFAULT_BUILDERS_JSON)
  }

  /// Build a registry from already-deserialized entries.
  pub fn from_entries(entries: Vec<BuilderEntry>) -> Result<Self, ConfigError> {
    let mut by_language = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
      for (field, value) in [("name", &entry.name), ("cmd", &entry.cmd), ("linereg", &entry.linereg)] {
        if value.trim().is_empty() {
          return Err(ConfigError::EmptyField { index, field });
        }
      }

      let key = normalize(&entry.name);
      if by_language.contains_key(&key) {
        warn!(name = %entry.name, index, "duplicate builder ignored, first entry wins");
        continue;
      }
      by_language.insert(key, index);
    }

    Ok(Self { entries, by_language })
  }

  /// Find the builder for a language, ignoring case.
  pub fn find_by_language(&self, language: &str) -> Option<&BuilderEntry> {
    self
      .by_language
      .get(&normalize(language))
      .map(|&index| &self.entries[index])
  }

  /// All entries in load order, shadowed duplicates included.
  pub fn entries(&self) -> &[BuilderEntry] {
    &self.entries
  }

  /// Entries shadowed by an earlier entry with the same name.
  pub fn duplicates(&self) -> Vec<&BuilderEntry> {
    self
      .entries
      .iter()
      .enumerate()
      .filter(|(index, entry)| self.by_language.get(&normalize(&entry.name)) != Some(index))
      .map(|(_, entry)| entry)
      .collect()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn normalize(language: &str) -> String {
  language.trim().to_lowercase()
}
