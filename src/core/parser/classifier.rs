//! Dependency classification over a token stream

use crate::core::models::{DependencyKind, DependencyRecord, Token};

/// Single-pass state machine turning a token stream into a [`DependencyRecord`]
///
/// Course codes only count as edges inside the prerequisite zone, which opens
/// at a prerequisite marker and closes at a corequisite marker. The first edge
/// defaults the kind to [`DependencyKind::All`]; a `one of` inside the zone
/// switches it to [`DependencyKind::Any`]. The kind never returns to `None`.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    in_prerequisites: bool,
    kind: DependencyKind,
    edges: Vec<String>,
}

impl Classifier {
    /// Create a classifier in its initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one token
    pub fn feed(&mut self, token: Token) {
        match token {
            Token::Prerequisite => self.in_prerequisites = true,
            Token::Corequisite => self.in_prerequisites = false,
            Token::CourseCode(key) if self.in_prerequisites => {
                if self.kind == DependencyKind::None {
                    self.kind = DependencyKind::All;
                }
                self.edges.push(key);
            }
            Token::AnyOf if self.in_prerequisites => self.kind = DependencyKind::Any,
            Token::AllOf if self.in_prerequisites => self.kind = DependencyKind::All,
            Token::CourseCode(_) | Token::AnyOf | Token::AllOf => {}
        }
    }

    /// Finish classification and produce the record
    #[must_use]
    pub fn finish(self, description: String) -> DependencyRecord {
        DependencyRecord {
            description,
            kind: self.kind,
            edges: self.edges,
        }
    }
}

/// Classify a full token stream for one course body
///
/// Total over every input: an empty stream yields a record with kind `None`
/// and no edges.
pub fn classify<I>(tokens: I, description: impl Into<String>) -> DependencyRecord
where
    I: IntoIterator<Item = Token>,
{
    let mut classifier = Classifier::new();
    for token in tokens {
        classifier.feed(token);
    }
    classifier.finish(description.into())
}
