//! Per-course dependency record

use std::fmt;

/// How the prerequisite edges of a course combine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DependencyKind {
    /// No prerequisites were found
    #[default]
    None,
    /// Every listed prerequisite is required
    All,
    /// Any one of the listed prerequisites suffices
    Any,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::None => "none",
            Self::All => "all",
            Self::Any => "any",
        };
        write!(f, "{as_str}")
    }
}

/// The dependency information extracted for a single course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    /// Human-readable description taken from the course title
    pub description: String,

    /// Combination kind for `edges`
    pub kind: DependencyKind,

    /// Prerequisite course keys in order of mention (duplicates kept)
    pub edges: Vec<String>,
}

impl DependencyRecord {
    /// Create a record with no prerequisites
    #[must_use]
    pub const fn new(description: String) -> Self {
        Self {
            description,
            kind: DependencyKind::None,
            edges: Vec::new(),
        }
    }

    /// Returns true when the course has at least one prerequisite edge
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.edges.is_empty()
    }
}

impl fmt::Display for DependencyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edges.is_empty() {
            write!(f, "{} ({})", self.description, self.kind)
        } else {
            write!(
                f,
                "{} ({} of: {})",
                self.description,
                self.kind,
                self.edges.join(", ")
            )
        }
    }
}
