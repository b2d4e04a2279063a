//! Tracking the error markers currently shown in the editor.
//!
//! The tracker owns the set of annotated lines. The [`MarkerView`] it draws on
//! is only a rendering target: markers are cleared all at once, never one by
//! one.

use serde::Serialize;

use crate::parser::LineMatch;

/// A marked editor line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
  /// 0-based editor line.
  pub line: usize,
  pub message: String,
}

impl From<LineMatch> for Annotation {
  fn from(m: LineMatch) -> Self {
    Self {
      line: m.line,
      message: m.message,
    }
  }
}

/// Where gutter markers are drawn.
pub trait MarkerView {
  /// Make sure the marker gutter exists before the first marker is set.
  fn ensure_gutter(&mut self) {}

  /// Remove every marker and line highlight previously set.
  fn clear_markers(&mut self, annotations: &[Annotation]);

  /// Draw a gutter marker and background highlight for one line.
  fn set_marker(&mut self, annotation: &Annotation);
}

/// A view that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl MarkerView for NullView {
  fn clear_markers(&mut self, _annotations: &[Annotation]) {}

  fn set_marker(&mut self, _annotation: &Annotation) {}
}

#[derive(Debug, Default)]
pub struct AnnotationTracker<V> {
  annotations: Vec<Annotation>,
  view: V,
}

impl<V: MarkerView> AnnotationTracker<V> {
  pub fn new(view: V) -> Self {
    Self {
      annotations: Vec::new(),
      view,
    }
  }

  /// Remove all markers. A no-op when nothing is annotated.
  pub fn clear(&mut self) {
    if self.annotations.is_empty() {
      return;
    }
    self.view.clear_markers(&self.annotations);
    self.annotations.clear();
  }

  /// Mark every matched line and remember it for the next clear.
  pub fn add_all(&mut self, matches: impl IntoIterator<Item = LineMatch>) {
    let mut matches = matches.into_iter().peekable();
    if matches.peek().is_none() {
      return;
    }

    self.view.ensure_gutter();
    for m in matches {
      let annotation = Annotation::from(m);
      self.view.set_marker(&annotation);
      self.annotations.push(annotation);
    }
  }

  pub fn annotations(&self) -> &[Annotation] {
    &self.annotations
  }

  pub fn view(&self) -> &V {
    &self.view
  }
}
