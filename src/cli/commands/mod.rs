//! CLI command handlers for `coursegraph`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
pub mod scrape;
pub mod tokenize;
