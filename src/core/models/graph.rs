//! Course graph keyed by course key

use super::DependencyRecord;
use std::collections::BTreeMap;

/// Mapping from course key to the dependency record scraped for it
///
/// Keys are kept sorted so exports are stable across runs. Inserting a key that
/// already exists replaces the previous record; records are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseGraph {
    courses: BTreeMap<String, DependencyRecord>,
}

impl CourseGraph {
    /// Create a new empty graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: BTreeMap::new(),
        }
    }

    /// Insert or replace the record for `key`
    ///
    /// # Returns
    /// The record previously stored under `key`, if any
    pub fn insert(&mut self, key: String, record: DependencyRecord) -> Option<DependencyRecord> {
        self.courses.insert(key, record)
    }

    /// Get the record for a course
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DependencyRecord> {
        self.courses.get(key)
    }

    /// Check if a course exists in the graph
    #[must_use]
    pub fn contains_course(&self, key: &str) -> bool {
        self.courses.contains_key(key)
    }

    /// Number of courses in the graph
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if no course has been inserted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterate over `(key, record)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DependencyRecord)> {
        self.courses.iter()
    }

    /// Total number of prerequisite edges across all courses
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.courses.values().map(|r| r.edges.len()).sum()
    }

    /// Courses that list `key` as a prerequisite, in key order
    #[must_use]
    pub fn dependents_of(&self, key: &str) -> Vec<&str> {
        self.courses
            .iter()
            .filter(|(_, record)| record.edges.iter().any(|e| e == key))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a CourseGraph {
    type Item = (&'a String, &'a DependencyRecord);
    type IntoIter = std::collections::btree_map::Iter<'a, String, DependencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

impl std::fmt::Display for CourseGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Course graph ({} courses):", self.courses.len())?;
        writeln!(f)?;

        for (key, record) in &self.courses {
            if record.edges.is_empty() {
                writeln!(f, "  {key} → (no prerequisites)")?;
            } else {
                writeln!(f, "  {key} → {} of {}", record.kind, record.edges.join(", "))?;
            }
        }

        Ok(())
    }
}
