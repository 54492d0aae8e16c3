//! Calendar scraping: HTML extraction, page fetching and graph ingestion

pub mod fetch;
pub mod html;

pub use fetch::Fetcher;
pub use html::{extract_entries, CourseEntry, Selectors};

use crate::core::config::ScrapeConfig;
use crate::core::error::{CourseGraphError, Result};
use crate::core::models::CourseGraph;
use crate::{debug, error, info, verbose, warn};
use std::path::{Path, PathBuf};

/// Graph built from a batch of sources, plus the sources that failed
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Every course scraped from the sources that succeeded
    pub graph: CourseGraph,
    /// One message per source that could not be fetched or read
    pub failures: Vec<String>,
}

/// Extract all course blocks from `html` and insert them into `graph`
///
/// Blocks with malformed titles are logged and skipped.
///
/// # Returns
/// The number of courses inserted
pub fn scrape_into_graph(graph: &mut CourseGraph, html: &str, selectors: &Selectors) -> usize {
    let mut ingested = 0;
    for entry in extract_entries(html, selectors) {
        match graph.ingest(&entry.title, &entry.body) {
            Ok(key) => {
                ingested += 1;
                if let Some(record) = graph.get(&key) {
                    debug!("{key}: {record}");
                }
            }
            Err(e) => warn!("Skipping course block: {e}"),
        }
    }
    ingested
}

/// Fetch `url` and scrape it into `graph`
///
/// # Errors
/// Returns an error if the page cannot be downloaded.
pub fn scrape_url(
    graph: &mut CourseGraph,
    fetcher: &Fetcher,
    url: &str,
    selectors: &Selectors,
) -> Result<usize> {
    let html = fetcher.fetch(url)?;
    Ok(scrape_into_graph(graph, &html, selectors))
}

/// Read a saved HTML page and scrape it into `graph`
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn scrape_file(graph: &mut CourseGraph, path: &Path, selectors: &Selectors) -> Result<usize> {
    let html = std::fs::read_to_string(path).map_err(|e| CourseGraphError::io(path, e))?;
    Ok(scrape_into_graph(graph, &html, selectors))
}

impl ScrapeOutcome {
    fn note(&mut self, source: &str, result: Result<usize>) {
        match result {
            Ok(count) => {
                info!("Scraped {count} courses from {source}");
                verbose!("✓ {source}: {count} courses");
            }
            Err(e) => {
                error!("{e}");
                self.failures.push(e.to_string());
            }
        }
    }
}

/// Scrape URLs and saved pages into one graph
///
/// With no URLs and no files, the configured `urls` are scraped instead. A
/// failing source is logged and skipped.
///
/// # Errors
/// Returns [`CourseGraphError::NoSources`] when there is nothing to scrape,
/// a selector error for an invalid configured selector, and
/// [`CourseGraphError::AllSourcesFailed`] when nothing was scraped and at
/// least one source failed.
pub fn scrape_sources(
    urls: &[String],
    html_files: &[PathBuf],
    config: &ScrapeConfig,
) -> Result<ScrapeOutcome> {
    let urls = if urls.is_empty() && html_files.is_empty() {
        config.urls.as_slice()
    } else {
        urls
    };
    if urls.is_empty() && html_files.is_empty() {
        return Err(CourseGraphError::NoSources);
    }

    let selectors = Selectors::from_config(config)?;
    let mut outcome = ScrapeOutcome::default();

    if !urls.is_empty() {
        let fetcher = Fetcher::new(config.timeout_secs)?;
        for url in urls {
            let result = scrape_url(&mut outcome.graph, &fetcher, url, &selectors);
            outcome.note(url, result);
        }
    }
    for path in html_files {
        let result = scrape_file(&mut outcome.graph, path, &selectors);
        outcome.note(&path.display().to_string(), result);
    }

    if outcome.graph.is_empty() && !outcome.failures.is_empty() {
        return Err(CourseGraphError::AllSourcesFailed {
            failures: outcome.failures,
        });
    }
    Ok(outcome)
}
