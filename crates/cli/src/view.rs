//! Terminal rendering of gutter markers.
//!
//! Marked lines are shown as a source excerpt: line number, a red marker in
//! the gutter, the highlighted source line and the output line that
//! produced it.

use std::collections::BTreeMap;

use owo_colors::{OwoColorize, Stream};

use buildpanel_lib::annotations::{Annotation, MarkerView};

use crate::output::{symbols, truncate};

const MAX_MESSAGE_CHARS: usize = 120;

pub struct TerminalView {
  source: Vec<String>,
  marked: BTreeMap<usize, Vec<String>>,
}

impl TerminalView {
  pub fn new(source: &str) -> Self {
    Self {
      source: source.lines().map(str::to_string).collect(),
      marked: BTreeMap::new(),
    }
  }

  /// Render marked lines in source order.
  pub fn render(&self) -> String {
    let width = self
      .marked
      .keys()
      .next_back()
      .map(|line| (line + 1).to_string().len())
      .unwrap_or(1);

    let mut out = String::new();
    for (line, messages) in &self.marked {
      let number = format!("{:>width$}", line + 1);
      let text = match self.source.get(*line) {
        Some(text) => text.as_str(),
        None => "<beyond end of file>",
      };
      out.push_str(&format!(
        "{} {} │ {}\n",
        number.if_supports_color(Stream::Stdout, |s| s.dimmed()),
        symbols::MARKER.if_supports_color(Stream::Stdout, |s| s.red()),
        text.if_supports_color(Stream::Stdout, |s| s.on_red())
      ));
      for message in messages {
        out.push_str(&format!(
          "{:width$}     │   {}\n",
          "",
          truncate(message.trim(), MAX_MESSAGE_CHARS).if_supports_color(Stream::Stdout, |s| s.dimmed())
        ));
      }
    }
    out
  }
}

impl MarkerView for TerminalView {
  fn clear_markers(&mut self, _annotations: &[Annotation]) {
    self.marked.clear();
  }

  fn set_marker(&mut self, annotation: &Annotation) {
    self
      .marked
      .entry(annotation.line)
      .or_default()
      .push(annotation.message.clone());
  }
}
