//! File extension → language name detection.
//!
//! Editors report a language name for the active document; when the front end
//! only has a path, the extension is mapped to the same names.

use std::path::Path;

const LANGUAGES: &[(&str, &[&str])] = &[
  ("Python", &["py", "pyw"]),
  ("Ruby", &["rb", "rake"]),
  ("JavaScript", &["js", "mjs", "cjs"]),
  ("TypeScript", &["ts", "mts", "cts"]),
  ("PHP", &["php", "phtml"]),
  ("Perl", &["pl", "pm"]),
  ("Bash", &["sh", "bash"]),
  ("Lua", &["lua"]),
  ("Go", &["go"]),
  ("C", &["c", "h"]),
  ("C++", &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]),
  ("Java", &["java"]),
  ("Rust", &["rs"]),
  ("CoffeeScript", &["coffee"]),
  ("Elixir", &["ex", "exs"]),
  ("Haskell", &["hs"]),
];

/// Detect the language of a file from its extension.
pub fn detect_language(path: &Path) -> Option<&'static str> {
  let ext = path.extension()?.to_str()?.to_ascii_lowercase();
  LANGUAGES
    .iter()
    .find(|(_, extensions)| extensions.iter().any(|e| *e == ext))
    .map(|(name, _)| *name)
}
