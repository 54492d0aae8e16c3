//! Data models for course dependency extraction

pub mod graph;
pub mod record;
pub mod token;

pub use graph::CourseGraph;
pub use record::{DependencyKind, DependencyRecord};
pub use token::Token;
