//! Tokens produced by the course-description tokenizer

use std::fmt;

/// A classified word (or word pair) from a course description.
///
/// Tokens carry no position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A course mention, holding its normalized key (e.g. `cosc_111`)
    CourseCode(String),
    /// `prerequisite:` marker, opens the prerequisite zone
    Prerequisite,
    /// Corequisite marker, closes the prerequisite zone
    Corequisite,
    /// `one of` marker
    AnyOf,
    /// `all of` marker
    AllOf,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CourseCode(key) => write!(f, "CourseCode({key})"),
            Self::Prerequisite => write!(f, "Prerequisite"),
            Self::Corequisite => write!(f, "Corequisite"),
            Self::AnyOf => write!(f, "AnyOf"),
            Self::AllOf => write!(f, "AllOf"),
        }
    }
}
