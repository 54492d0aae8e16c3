//! Extraction core: tokenizer, dependency classifier and title parsing

pub mod classifier;
pub mod title;
pub mod tokenizer;

pub use classifier::{classify, Classifier};
pub use title::CourseTitle;
pub use tokenizer::{tokenize, Tokenizer};

use crate::core::error::Result;
use crate::core::models::{CourseGraph, DependencyRecord};

/// Extract the `(key, record)` pair for one course from its title and body
///
/// # Errors
/// Returns [`crate::core::error::CourseGraphError::InvalidTitleFormat`] if the
/// title cannot be split into a key and description.
pub fn extract_course(title: &str, body: &str) -> Result<(String, DependencyRecord)> {
    let CourseTitle { key, description } = CourseTitle::parse(title)?;
    let record = classify(tokenize(body), description);
    Ok((key, record))
}

impl CourseGraph {
    /// Extract one course and insert it, replacing any earlier record for the same key
    ///
    /// # Returns
    /// The key the course was stored under
    ///
    /// # Errors
    /// Returns an error if the title is malformed; the graph is left untouched.
    pub fn ingest(&mut self, title: &str, body: &str) -> Result<String> {
        let (key, record) = extract_course(title, body)?;
        self.insert(key.clone(), record);
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DependencyKind;

    #[test]
    fn test_extract_course() {
        let (key, record) = extract_course(
            "COSC_O 121 (3) Computer Programming II",
            "Advanced programming. Prerequisite: One of COSC 111, COSC 123.",
        )
        .unwrap();

        assert_eq!(key, "cosc_121");
        assert_eq!(record.description, "Computer Programming II");
        assert_eq!(record.kind, DependencyKind::Any);
        assert_eq!(record.edges, vec!["cosc_111", "cosc_123"]);
    }

    #[test]
    fn test_ingest_overwrites() {
        let mut graph = CourseGraph::new();
        graph
            .ingest("COSC 121 (3) Old", "Prerequisite: COSC 111.")
            .unwrap();
        graph.ingest("COSC 121 (3) New", "No prerequisites.").unwrap();

        assert_eq!(graph.len(), 1);
        let record = graph.get("cosc_121").unwrap();
        assert_eq!(record.description, "New");
        assert_eq!(record.kind, DependencyKind::None);
    }

    #[test]
    fn test_ingest_bad_title_leaves_graph_untouched() {
        let mut graph = CourseGraph::new();
        assert!(graph.ingest("COSC", "Prerequisite: COSC 111.").is_err());
        assert!(graph.is_empty());
    }
}
