//! Command template parsing.
//!
//! A builder's `cmd` is split into argument slots the way a shell would split
//! a simple command line, but nothing is ever handed to a shell. The first
//! `$FILE` placeholder becomes a dedicated segment that is substituted into
//! its slot verbatim, so a path with spaces or shell metacharacters stays a
//! single argument.
//!
//! # Quoting
//!
//! - Whitespace separates arguments.
//! - `'...'` and `"..."` group words into one argument.
//! - `\` escapes the next character, except inside single quotes.
//!
//! # Example
//!
//! ```
//! use buildpanel_lib::template::Template;
//!
//! let template = Template::parse("python -u $FILE").unwrap();
//! assert_eq!(template.render("/tmp/my file.py"), vec!["python", "-u", "/tmp/my file.py"]);
//! ```

use std::ffi::{OsStr, OsString};

use thiserror::Error;

use crate::consts::FILE_PLACEHOLDER;

/// A piece of a single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
  /// Literal text
  Literal(String),

  /// The active file's path
  File,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
  #[error("unclosed {quote} quote starting at position {position}")]
  Unclosed { quote: char, position: usize },
}

/// A parsed command template: one segment list per argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
  args: Vec<Vec<Segment>>,
}

impl Template {
  /// Parse a command template into argument slots.
  ///
  /// Only the first `$FILE` is a placeholder; later occurrences are kept as
  /// literal text.
  pub fn parse(input: &str) -> Result<Self, TemplateError> {
    let mut args = Vec::new();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut in_arg = false;
    let mut quote: Option<(char, usize)> = None;
    let mut seen_file = false;
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
      match (ch, quote) {
        (c, None) if c.is_whitespace() => {
          if in_arg {
            flush_literal(&mut segments, &mut literal);
            args.push(std::mem::take(&mut segments));
            in_arg = false;
          }
        }
        ('\'' | '"', None) => {
          quote = Some((ch, pos));
          in_arg = true;
        }
        (c, Some((open, _))) if c == open => {
          quote = None;
        }
        ('\\', q) if !matches!(q, Some(('\'', _))) => {
          in_arg = true;
          match chars.next() {
            Some((_, escaped)) => literal.push(escaped),
            None => literal.push('\\'),
          }
        }
        ('$', _) if !seen_file && input[pos..].starts_with(FILE_PLACEHOLDER) => {
          // consume the rest of the token
          for _ in 1..FILE_PLACEHOLDER.len() {
            chars.next();
          }
          flush_literal(&mut segments, &mut literal);
          segments.push(Segment::File);
          seen_file = true;
          in_arg = true;
        }
        _ => {
          literal.push(ch);
          in_arg = true;
        }
      }
    }

    if let Some((quote, position)) = quote {
      return Err(TemplateError::Unclosed { quote, position });
    }

    if in_arg {
      flush_literal(&mut segments, &mut literal);
      args.push(segments);
    }

    Ok(Self { args })
  }

  /// Whether the template references the active file.
  pub fn has_placeholder(&self) -> bool {
    self.args.iter().flatten().any(|segment| *segment == Segment::File)
  }

  pub fn is_empty(&self) -> bool {
    self.args.is_empty()
  }

  pub fn args(&self) -> &[Vec<Segment>] {
    &self.args
  }

  /// Substitute the file path and return the argument vector.
  ///
  /// The path is passed through as an `OsStr`, so paths that are not valid
  /// UTF-8 reach the process unchanged.
  pub fn render(&self, file: impl AsRef<OsStr>) -> Vec<OsString> {
    let file = file.as_ref();
    self
      .args
      .iter()
      .map(|segments| {
        let mut arg = OsString::new();
        for segment in segments {
          match segment {
            Segment::Literal(text) => arg.push(text),
            Segment::File => arg.push(file),
          }
        }
        arg
      })
      .collect()
  }
}

fn flush_literal(segments: &mut Vec<Segment>, literal: &mut String) {
  if !literal.is_empty() {
    segments.push(Segment::Literal(std::mem::take(literal)));
  }
}
