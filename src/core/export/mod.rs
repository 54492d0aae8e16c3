//! Course graph export formats

pub mod dot;
pub mod mermaid;

pub use dot::to_dot;
pub use mermaid::MermaidGenerator;

use crate::core::error::{CourseGraphError, Result};
use crate::core::models::CourseGraph;
use std::fs;
use std::path::Path;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// Mermaid flowchart wrapped in a Markdown code fence
    Mermaid,
}

impl ExportFormat {
    /// Default file extension for the format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Mermaid => "md",
        }
    }

    /// Render `graph` in this format
    #[must_use]
    pub fn render(self, graph: &CourseGraph) -> String {
        match self {
            Self::Dot => to_dot(graph),
            Self::Mermaid => MermaidGenerator::generate(graph),
        }
    }
}

/// Render `graph` and write it to `path`, creating parent directories
///
/// # Errors
/// Returns [`CourseGraphError::Io`] if the directory or file cannot be written.
pub fn write_graph(graph: &CourseGraph, format: ExportFormat, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CourseGraphError::io(parent, e))?;
    }
    fs::write(path, format.render(graph)).map_err(|e| CourseGraphError::io(path, e))
}
