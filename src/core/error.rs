//! Error type shared by the scraping, title and export layers.
//!
//! The tokenizer and classifier are total and never produce errors.

use std::path::PathBuf;

/// Errors raised around the extraction core.
#[derive(Debug, thiserror::Error)]
pub enum CourseGraphError {
    /// A course title did not have the `<SUBJECT> <NUMBER> <...> <description>` shape.
    #[error("invalid course title format: '{title}'")]
    InvalidTitleFormat {
        /// The offending title text
        title: String,
    },

    /// The HTTP request itself failed (DNS, TLS, timeout, ...).
    #[error("failed to fetch {url}: {source}")]
    Http {
        /// Requested URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be initialized.
    #[error("failed to initialize HTTP client: {source}")]
    HttpClient {
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Reading or writing a local file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Neither the command line nor the config named a page to scrape.
    #[error("no sources given and `scrape.urls` is empty in the config")]
    NoSources,

    /// Every requested source failed, so there is nothing to export.
    #[error("every source failed: {}", .failures.join("; "))]
    AllSourcesFailed {
        /// One message per failed source
        failures: Vec<String>,
    },

    /// A configured CSS selector could not be parsed.
    #[error("invalid CSS selector: '{selector}'")]
    Selector {
        /// The selector text as configured
        selector: String,
    },
}

impl CourseGraphError {
    /// Build an [`CourseGraphError::Io`] for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CourseGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_title_message() {
        let err = CourseGraphError::InvalidTitleFormat {
            title: "COSC".to_string(),
        };
        assert_eq!(err.to_string(), "invalid course title format: 'COSC'");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = CourseGraphError::io(
            "/tmp/missing.html",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.html"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_all_sources_failed_lists_each_failure() {
        let err = CourseGraphError::AllSourcesFailed {
            failures: vec!["a.html: gone".to_string(), "b.html: gone".to_string()],
        };
        assert_eq!(err.to_string(), "every source failed: a.html: gone; b.html: gone");
    }
}
