/// Application name, used for config directory names.
pub const APP_NAME: &str = "buildpanel";

/// Placeholder token in a command template that stands for the active file.
pub const FILE_PLACEHOLDER: &str = "$FILE";

/// File name of the builders configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "builders.json";

/// Environment variable overriding the builders configuration path.
pub const CONFIG_ENV_VAR: &str = "BUILDPANEL_CONFIG";

/// Prefix the output panel puts in front of failed build output.
pub const FAILURE_PREFIX: &str = ":::";
