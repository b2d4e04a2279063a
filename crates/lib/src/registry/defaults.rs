//! Built-in builders used when no configuration file exists.

/// Default builders file written by `config init`.
pub const DEFAULT_BUILDERS_JSON: &str = r#"[
  {
    "name": "Python",
    "cmd": "python3 $FILE",
    "linereg": "line (\\d+)"
  },
  {
    "name": "Ruby",
    "cmd": "ruby $FILE",
    "linereg": ":(\\d+):"
  },
  {
    "name": "JavaScript",
    "cmd": "node $FILE",
    "linereg": "\\.js:(\\d+)"
  },
  {
    "name": "PHP",
    "cmd": "php -l $FILE",
    "linereg": "on line (\\d+)"
  },
  {
    "name": "Perl",
    "cmd": "perl $FILE",
    "linereg": "line (\\d+)"
  },
  {
    "name": "Bash",
    "cmd": "bash $FILE",
    "linereg": "line (\\d+)"
  },
  {
    "name": "Lua",
    "cmd": "lua $FILE",
    "linereg": "\\.lua:(\\d+):"
  },
  {
    "name": "Go",
    "cmd": "go run $FILE",
    "linereg": "\\.go:(\\d+)"
  },
  {
    "name": "C",
    "cmd": "gcc -fsyntax-only -Wall $FILE",
    "linereg": "\\.[ch]:(\\d+):"
  },
  {
    "name": "C++",
    "cmd": "g++ -fsyntax-only -Wall $FILE",
    "linereg": "\\.(?:cpp|cc|cxx|hpp|h):(\\d+):"
  },
  {
    "name": "Java",
    "cmd": "java $FILE",
    "linereg": "\\.java:(\\d+)"
  },
  {
    "name": "Rust",
    "cmd": "rustc --edition 2021 --emit=metadata $FILE",
    "linereg": "--> .*:(\\d+):\\d+"
  }
]
"#;
