//! Course block extraction from calendar HTML

use crate::core::config::ScrapeConfig;
use crate::core::error::{CourseGraphError, Result};
use scraper::{ElementRef, Html, Selector};

/// Raw title and description text of one course block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    /// Text of the title element
    pub title: String,
    /// Text of every body element, joined by single spaces
    pub body: String,
}

/// Compiled CSS selectors describing the calendar layout
#[derive(Debug, Clone)]
pub struct Selectors {
    block: Selector,
    title: Selector,
    body: Selector,
}

impl Selectors {
    /// Layout of the UBC Okanagan course-description pages
    pub const DEFAULT_BLOCK: &'static str = ".node__content";
    /// Title element inside a block
    pub const DEFAULT_TITLE: &'static str = "h3";
    /// Description elements inside a block
    pub const DEFAULT_BODY: &'static str = "p";

    /// Compile the three selectors
    ///
    /// # Errors
    /// Returns [`CourseGraphError::Selector`] naming the first selector that fails to parse.
    pub fn new(block: &str, title: &str, body: &str) -> Result<Self> {
        Ok(Self {
            block: parse_selector(block)?,
            title: parse_selector(title)?,
            body: parse_selector(body)?,
        })
    }

    /// Compile the selectors from config, using the defaults for empty entries
    ///
    /// # Errors
    /// Returns an error if a configured selector is invalid.
    pub fn from_config(config: &ScrapeConfig) -> Result<Self> {
        let or_default = |value: &str, default: &str| {
            if value.trim().is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self::new(
            &or_default(&config.block_selector, Self::DEFAULT_BLOCK),
            &or_default(&config.title_selector, Self::DEFAULT_TITLE),
            &or_default(&config.body_selector, Self::DEFAULT_BODY),
        )
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            block: Selector::parse(Self::DEFAULT_BLOCK).expect("default block selector is valid"),
            title: Selector::parse(Self::DEFAULT_TITLE).expect("default title selector is valid"),
            body: Selector::parse(Self::DEFAULT_BODY).expect("default body selector is valid"),
        }
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| CourseGraphError::Selector {
        selector: selector.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Extract every course block from an HTML document
///
/// Blocks without a title element (or with an empty one) are skipped.
#[must_use]
pub fn extract_entries(html: &str, selectors: &Selectors) -> Vec<CourseEntry> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.block)
        .filter_map(|block| {
            let title = block
                .select(&selectors.title)
                .next()
                .map(element_text)?
                .trim()
                .to_string();
            if title.is_empty() {
                return None;
            }
            let body = block
                .select(&selectors.body)
                .map(element_text)
                .collect::<Vec<_>>()
                .join(" ");
            Some(CourseEntry { title, body })
        })
        .collect()
}
