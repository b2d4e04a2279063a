use std::path::PathBuf;

use crate::consts::{APP_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME};

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("USERPROFILE").map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").map(PathBuf::from)
}

/// Returns the directory for configuration files for the application
#[cfg(windows)]
pub fn config_dir() -> Option<PathBuf> {
  std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_NAME))
}

/// Returns the directory for configuration files for the application
#[cfg(not(windows))]
pub fn config_dir() -> Option<PathBuf> {
  let config_home = std::env::var_os("XDG_CONFIG_HOME")
    .filter(|dir| !dir.is_empty())
    .map(PathBuf::from)
    .or_else(|| home_dir().map(|home| home.join(".config")))?;
  Some(config_home.join(APP_NAME))
}

/// Returns the builders configuration file.
///
/// `BUILDPANEL_CONFIG` wins over the platform config directory. Falls back to
/// a file in the working directory when neither is available.
pub fn config_file() -> PathBuf {
  if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
    return PathBuf::from(path);
  }
  config_dir()
    .map(|dir| dir.join(CONFIG_FILE_NAME))
    .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}
