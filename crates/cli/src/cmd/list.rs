//! Implementation of the `buildpanel list` command.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};

use crate::cmd::ConfigSource;
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_warning};

pub fn cmd_list(config: &ConfigSource, format: OutputFormat) -> Result<()> {
  let registry = config.load()?;

  if format.is_json() {
    return print_json(&registry.entries());
  }

  if registry.is_empty() {
    print_warning("No builders configured");
    return Ok(());
  }

  let origin = if config.path.exists() {
    config.path.display().to_string()
  } else {
    "built-in defaults".to_string()
  };
  print_info(&format!("{} builder(s) from {}", registry.len(), origin));
  for entry in registry.entries() {
    println!();
    println!("{}", entry.name.if_supports_color(Stream::Stdout, |s| s.bold()));
    print_stat("cmd", &entry.cmd);
    print_stat("linereg", &entry.linereg);
  }

  for shadowed in registry.duplicates() {
    print_warning(&format!("'{}' is shadowed by an earlier builder", shadowed.name));
  }

  Ok(())
}
