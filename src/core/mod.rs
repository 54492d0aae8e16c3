//! Core module: extraction, scraping, export and configuration

pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;
pub mod scrape;

/// Returns the current version of the `course-graph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
