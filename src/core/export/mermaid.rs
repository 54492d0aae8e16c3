//! Mermaid flowchart export
//!
//! Produces flowchart syntax that renders inline in Markdown viewers such as
//! GitHub and GitLab.

use crate::core::models::{CourseGraph, DependencyKind};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a left-to-right flowchart of the course graph
    ///
    /// "All" prerequisites are drawn as solid arrows, "Any" prerequisites as
    /// dashed arrows.
    #[must_use]
    pub fn generate(graph: &CourseGraph) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");

        for (key, record) in graph {
            let label = Self::node_label(key, &record.description);
            let _ = writeln!(output, "    {}[\"{label}\"]", Self::sanitize_id(key));
        }

        output.push('\n');

        for (key, record) in graph {
            let course_id = Self::sanitize_id(key);
            let arrow = if record.kind == DependencyKind::Any {
                "-.->"
            } else {
                "-->"
            };
            for prereq in &record.edges {
                let prereq_id = Self::sanitize_id(prereq);
                let _ = writeln!(output, "    {prereq_id} {arrow} {course_id}");
            }
        }

        output.push_str("```\n");
        output
    }

    fn node_label(key: &str, description: &str) -> String {
        let description = description.replace('"', "#quot;");
        if description.is_empty() {
            key.to_string()
        } else {
            format!("{key}<br/>{description}")
        }
    }

    /// Sanitize a course key for use as a Mermaid node ID
    fn sanitize_id(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DependencyRecord;

    #[test]
    fn test_mermaid_generation() {
        let mut graph = CourseGraph::new();
        graph.insert(
            "cosc_111".to_string(),
            DependencyRecord::new("Intro".to_string()),
        );
        graph.insert(
            "cosc_121".to_string(),
            DependencyRecord {
                description: "Next".to_string(),
                kind: DependencyKind::All,
                edges: vec!["cosc_111".to_string()],
            },
        );
        graph.insert(
            "cosc_222".to_string(),
            DependencyRecord {
                description: String::new(),
                kind: DependencyKind::Any,
                edges: vec!["cosc_121".to_string()],
            },
        );

        let diagram = MermaidGenerator::generate(&graph);

        assert!(diagram.starts_with("```mermaid\nflowchart LR\n"));
        assert!(diagram.contains("    cosc_111[\"cosc_111<br/>Intro\"]"));
        assert!(diagram.contains("    cosc_222[\"cosc_222\"]"));
        assert!(diagram.contains("    cosc_111 --> cosc_121"));
        assert!(diagram.contains("    cosc_121 -.-> cosc_222"));
        assert!(diagram.ends_with("```\n"));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(MermaidGenerator::sanitize_id("cosc 111"), "cosc_111");
        assert_eq!(MermaidGenerator::sanitize_id("math-100"), "math_100");
    }
}
