mod config;
mod list;
mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use buildpanel_lib::platform::paths;
use buildpanel_lib::registry::BuilderRegistry;

pub use config::{cmd_config_check, cmd_config_edit, cmd_config_init, cmd_config_path};
pub use list::cmd_list;
pub use run::cmd_run;

/// Where the builders configuration comes from.
pub struct ConfigSource {
  pub path: PathBuf,
  /// Given on the command line or through the environment.
  pub explicit: bool,
}

impl ConfigSource {
  pub fn new(flag: Option<PathBuf>) -> Self {
    match flag {
      Some(path) => Self { path, explicit: true },
      None => Self {
        path: paths::config_file(),
        explicit: false,
      },
    }
  }

  /// Load the registry.
  ///
  /// A missing default config falls back to the built-in builders; a missing
  /// explicit config is an error.
  pub fn load(&self) -> Result<BuilderRegistry> {
    if !self.explicit && !self.path.exists() {
      debug!(path = %self.path.display(), "no builders config, using defaults");
      return BuilderRegistry::defaults().context("Built-in builders are invalid");
    }
    load_file(&self.path)
  }
}

fn load_file(path: &Path) -> Result<BuilderRegistry> {
  BuilderRegistry::load_file(path).with_context(|| format!("Failed to load builders config: {}", path.display()))
}
