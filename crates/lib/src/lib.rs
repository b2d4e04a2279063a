//! buildpanel-lib: run a build command for the file being edited and map its
//! errors back onto source lines.
//!
//! The pipeline, leaf first:
//! - `registry`: language → command template + line pattern, from JSON config
//! - `resolve`: entry + build context → program and argument vector
//! - `runner`: run the command as a subprocess and capture its output
//! - `format`: flatten output for the output panel
//! - `parser`: find output lines that name a source line
//! - `annotations`: the set of marked editor lines
//! - `session`: the build cycle tying them together

pub mod annotations;
pub mod consts;
pub mod context;
pub mod format;
pub mod language;
pub mod parser;
pub mod platform;
pub mod registry;
pub mod resolve;
pub mod runner;
pub mod session;
pub mod template;
