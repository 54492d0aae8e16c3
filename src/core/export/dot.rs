//! Graphviz DOT export
//!
//! Edges are inverted on output: they point from the prerequisite to the course
//! that requires it, so the rendered graph reads in the order courses are taken.

use crate::core::models::{CourseGraph, DependencyKind};
use std::fmt::Write;

const ALL_COLOR: &str = "black";
const ANY_COLOR: &str = "indigo";

/// Escape a string for use inside a double-quoted DOT string
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render the graph as a `digraph courses { ... }` document
#[must_use]
pub fn to_dot(graph: &CourseGraph) -> String {
    let mut output = String::from("digraph courses {\n");

    for (key, record) in graph {
        let _ = writeln!(
            output,
            "  \"{key}\" [label=\"{key}\\n{}\"];",
            escape(&record.description)
        );
    }

    for (key, record) in graph {
        let color = if record.kind == DependencyKind::Any {
            ANY_COLOR
        } else {
            ALL_COLOR
        };
        for prereq in &record.edges {
            let _ = writeln!(output, "  \"{prereq}\" -> \"{key}\" [color={color}];");
        }
    }

    output.push_str("}\n");
    output
}
