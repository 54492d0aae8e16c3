//! Prerequisite graph extraction from course-description prose
//!
//! The core is [`crate::core::parser`]: a word-level tokenizer and a dependency
//! classifier. Scraping, export and configuration sit around it.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::error::{CourseGraphError, Result};
pub use crate::core::get_version;
pub use crate::core::models::{CourseGraph, DependencyKind, DependencyRecord, Token};
pub use crate::core::parser::{classify, extract_course, tokenize};
