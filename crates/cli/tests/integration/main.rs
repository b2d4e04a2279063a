//! CLI integration tests.

mod config_tests;
mod run_tests;
