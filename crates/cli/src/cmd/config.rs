//! Implementation of the `buildpanel config` commands.
//!
//! The builders file is read once per invocation, so edits take effect on the
//! next build.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

use buildpanel_lib::registry::DEFAULT_BUILDERS_JSON;
use buildpanel_lib::resolve::validate;
use buildpanel_lib::template::Template;

use crate::cmd::ConfigSource;
use crate::output::{print_error, print_info, print_success, print_warning};
use crate::prompts::confirm_overwrite;

pub fn cmd_config_path(config: &ConfigSource) {
  println!("{}", config.path.display());
}

/// Write the default builders file.
pub fn cmd_config_init(config: &ConfigSource, force: bool) -> Result<()> {
  if config.path.exists() && !confirm_overwrite(&config.path, force)? {
    print_info("Left existing config untouched");
    return Ok(());
  }

  write_defaults(&config.path)?;
  print_success(&format!("Wrote default builders to {}", config.path.display()));
  Ok(())
}

/// Open the builders file in the user's editor, creating it first if needed.
pub fn cmd_config_edit(config: &ConfigSource) -> Result<()> {
  if !config.path.exists() {
    write_defaults(&config.path)?;
  }

  let editor = editor_command();
  info!(editor = %editor, path = %config.path.display(), "opening config");

  // $EDITOR may carry flags, e.g. "code --wait"
  let argv = Template::parse(&editor)
    .with_context(|| format!("Cannot parse editor command '{}'", editor))?
    .render("");
  let Some((program, args)) = argv.split_first() else {
    bail!("Editor command is empty");
  };

  let status = Command::new(program)
    .args(args)
    .arg(&config.path)
    .status()
    .with_context(|| format!("Failed to launch editor '{}'", editor))?;

  if !status.success() {
    bail!("Editor '{}' exited with {}", editor, status);
  }

  print_info("Changes take effect on the next build");
  Ok(())
}

/// Validate every builder. Returns whether all of them are usable.
pub fn cmd_config_check(config: &ConfigSource) -> Result<bool> {
  let registry = config.load()?;
  let mut ok = true;

  for entry in registry.entries() {
    match validate(entry) {
      Ok(()) => {
        print_success(&entry.name);
        if Template::parse(&entry.cmd).is_ok_and(|template| !template.has_placeholder()) {
          print_warning(&format!(
            "'{}' never references $FILE, the command runs without the file path",
            entry.name
          ));
        }
      }
      Err(e) => {
        ok = false;
        print_error(&e.to_string());
      }
    }
  }

  for shadowed in registry.duplicates() {
    print_warning(&format!(
      "'{}' is defined more than once, the first definition is used",
      shadowed.name
    ));
  }

  if registry.is_empty() {
    print_warning("No builders configured");
  }

  Ok(ok)
}

fn write_defaults(path: &Path) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create directory: {}", parent.display()))?;
  }
  fs::write(path, DEFAULT_BUILDERS_JSON).with_context(|| format!("Failed to write config: {}", path.display()))
}

fn editor_command() -> String {
  ["VISUAL", "EDITOR"]
    .iter()
    .filter_map(|var| std::env::var(var).ok())
    .find(|value| !value.trim().is_empty())
    .unwrap_or_else(|| default_editor().to_string())
}

#[cfg(windows)]
fn default_editor() -> &'static str {
  "notepad"
}

#[cfg(not(windows))]
fn default_editor() -> &'static str {
  "vi"
}
