//! Scrape command handler

use course_graph::config::Config;
use course_graph::core::export::{write_graph, ExportFormat};
use course_graph::core::scrape::scrape_sources;
use course_graph::error;
use std::path::{Path, PathBuf};

/// Run the scrape command
///
/// # Arguments
/// * `urls` - Calendar pages to fetch (falls back to config `scrape.urls`)
/// * `html_files` - Saved calendar pages to read
/// * `output` - Optional output path; defaults to `<out_dir>/courses.<ext>`
/// * `format` - Export format
/// * `config` - Effective configuration
pub fn run(
    urls: &[String],
    html_files: &[PathBuf],
    output: Option<&Path>,
    format: ExportFormat,
    config: &Config,
) {
    let outcome = match scrape_sources(urls, html_files, &config.scrape) {
        Ok(outcome) => outcome,
        Err(e) => fail(&format!("Scrape failed: {e}")),
    };
    for failure in &outcome.failures {
        eprintln!("✗ {failure}");
    }

    let output_path = output.map_or_else(
        || config.out_dir_path().join(format!("courses.{}", format.extension())),
        Path::to_path_buf,
    );
    if let Err(e) = write_graph(&outcome.graph, format, &output_path) {
        fail(&e.to_string());
    }

    println!(
        "✓ Course graph ({} courses, {} edges) written to: {}",
        outcome.graph.len(),
        outcome.graph.edge_count(),
        output_path.display()
    );
}

fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}
