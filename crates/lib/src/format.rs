//! Rendering captured output for the output panel.
//!
//! The result is lossy and meant for display only: line parsing always works
//! on the raw text.

use crate::consts::FAILURE_PREFIX;

const LINE_BREAK: &str = "<br />";

/// Flatten raw output into a display string.
///
/// Newlines (real ones and literal `\n` escape sequences) become `<br />`,
/// tabs (real and literal `\t`) and `"` characters are dropped, and the
/// remaining HTML metacharacters are escaped.
pub fn format(raw: &str) -> String {
  let text = raw
    .replace("\r\n", "\n")
    .replace("\\n", "\n")
    .replace("\\t", "")
    .replace(['\t', '"'], "");

  text
    .split('\n')
    .map(escape_html)
    .collect::<Vec<_>>()
    .join(LINE_BREAK)
}

/// Display string for a failed build, flagged with the failure prefix.
pub fn format_failure(raw: &str) -> String {
  format!("{FAILURE_PREFIX}{}", format(raw))
}

fn escape_html(line: &str) -> String {
  let mut escaped = String::with_capacity(line.len());
  for ch in line.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      _ => escaped.push(ch),
    }
  }
  escaped
}
