use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Result, bail};

/// Ask before replacing an existing file. `force` skips the question.
pub fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
  if force {
    return Ok(true);
  }

  if !io::stdin().is_terminal() || !io::stderr().is_terminal() {
    bail!(
      "{} already exists. Use --force to overwrite it in non-interactive mode.",
      path.display()
    );
  }

  write!(io::stderr(), "Overwrite {}? [y/N] ", path.display())?;
  io::stderr().flush()?;

  let mut input = String::new();
  io::stdin().read_line(&mut input)?;

  Ok(matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
