//! Mapping build output lines to editor lines.

use regex::Regex;
use tracing::debug;

/// One output line that names a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
  /// 0-based editor line.
  pub line: usize,
  /// The full output line.
  pub message: String,
}

/// Scan raw output for lines matching `line_regex`.
///
/// The first capture group is read as a 1-based line number. Lines whose
/// capture is missing, non-numeric or zero are skipped; the scan continues.
/// Results keep output order.
pub fn parse(raw: &str, line_regex: &Regex) -> Vec<LineMatch> {
  raw
    .lines()
    .enumerate()
    .filter_map(|(index, text)| {
      let captures = line_regex.captures(text)?;
      let Some(number) = captures.get(1) else {
        debug!(output_line = index, "pattern matched without a line capture");
        return None;
      };
      match number.as_str().parse::<usize>() {
        Ok(line) if line > 0 => Some(LineMatch {
          line: line - 1,
          message: text.to_string(),
        }),
        _ => {
          debug!(output_line = index, capture = number.as_str(), "line capture is not a line number");
          None
        }
      }
    })
    .collect()
}
