//! Integration tests for prerequisite extraction, end to end

use course_graph::core::export::{ExportFormat, MermaidGenerator};
use course_graph::core::parser::CourseTitle;
use course_graph::core::scrape::{scrape_into_graph, Selectors};
use course_graph::{classify, extract_course, tokenize, CourseGraph, CourseGraphError};
use course_graph::{DependencyKind, Token};

const CALENDAR: &str = r#"
<html><body>
  <div class="node__content">
    <h3>COSC_O 111 (3) Computer Programming I</h3>
    <p>Introduction to the design, implementation, and understanding of computer programs.</p>
  </div>
  <div class="node__content">
    <h3>COSC_O 121 (3) Computer Programming II</h3>
    <p>Advanced programming in the object-oriented paradigm.</p>
    <p>Prerequisite: COSC 111.</p>
  </div>
  <div class="node__content">
    <h3>COSC_O 222 (3) Data Structures</h3>
    <p>Introduction to COSC 222 topics.</p>
    <p>Prerequisite: One of COSC 121, COSC 123 and all of MATH 101, MATH 103.</p>
  </div>
  <div class="node__content">
    <h3>COSC_O 304 (3) Introduction to Databases</h3>
    <p>Prerequisite: All of COSC 221, COSC 222. Correquisite: COSC 310.</p>
  </div>
</body></html>
"#;

fn scraped() -> CourseGraph {
    let mut graph = CourseGraph::new();
    let count = scrape_into_graph(&mut graph, CALENDAR, &Selectors::default());
    assert_eq!(count, 4);
    graph
}

#[test]
fn course_code_normalization_for_every_subject() {
    for subject in ["cosc", "engl", "math", "phys"] {
        for word in ["7", "101", "101,", "101.", "101)", "101;)"] {
            let tokens: Vec<Token> = tokenize(&format!("{subject} {word}")).collect();
            let digits: String = word.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(
                tokens,
                vec![Token::CourseCode(format!("{subject}_{digits}"))],
                "{subject} {word}"
            );
        }
    }
}

#[test]
fn false_positive_guard() {
    assert_eq!(tokenize("cosc abcdef").count(), 0);
}

#[test]
fn zone_gating_excludes_earlier_mentions() {
    let record = classify(tokenize("cosc 111 prerequisite: cosc 100"), "");
    assert!(!record.edges.contains(&"cosc_111".to_string()));
    assert!(record.edges.contains(&"cosc_100".to_string()));
}

#[test]
fn default_all_and_any_override() {
    let all = classify(tokenize("Prerequisite: COSC 111, COSC 121"), "");
    assert_eq!(all.kind, DependencyKind::All);
    assert_eq!(all.edges, vec!["cosc_111", "cosc_121"]);

    let any = classify(tokenize("Prerequisite: One of COSC 111, COSC 121"), "");
    assert_eq!(any.kind, DependencyKind::Any);
    assert_eq!(any.edges, vec!["cosc_111", "cosc_121"]);
}

#[test]
fn trailing_one_is_safe() {
    let tokens: Vec<Token> = tokenize("Prerequisite: COSC 111 or one").collect();
    assert!(!tokens.contains(&Token::AnyOf));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn extraction_is_repeatable() {
    let title = "MATH_O 200 (3) Calculus III";
    let body = "Prerequisite: One of MATH 101, MATH 103.";
    assert_eq!(
        extract_course(title, body).unwrap(),
        extract_course(title, body).unwrap()
    );
}

#[test]
fn graph_overwrite_keeps_last() {
    let mut graph = CourseGraph::new();
    graph.ingest("PHYS 111 (3) Old Title", "Prerequisite: MATH 100.").unwrap();
    graph.ingest("PHYS 111 (3) New Title", "Prerequisite: MATH 101.").unwrap();

    assert_eq!(graph.len(), 1);
    let record = graph.get("phys_111").unwrap();
    assert_eq!(record.description, "New Title");
    assert_eq!(record.edges, vec!["math_101"]);
}

#[test]
fn malformed_title_is_rejected() {
    assert!(matches!(
        CourseTitle::parse("COSC 111"),
        Err(CourseGraphError::InvalidTitleFormat { .. })
    ));
}

#[test]
fn scraped_calendar_records() {
    let graph = scraped();

    let intro = graph.get("cosc_111").unwrap();
    assert_eq!(intro.kind, DependencyKind::None);
    assert!(intro.edges.is_empty());

    let next = graph.get("cosc_121").unwrap();
    assert_eq!(next.kind, DependencyKind::All);
    assert_eq!(next.edges, vec!["cosc_111"]);

    // "COSC 222" in the first paragraph precedes the marker and is not an edge;
    // the later "all of" overrides the earlier "one of"
    let data = graph.get("cosc_222").unwrap();
    assert_eq!(data.kind, DependencyKind::All);
    assert_eq!(data.edges, vec!["cosc_121", "cosc_123", "math_101", "math_103"]);

    // Corequisite markers do not close the prerequisite zone
    let db = graph.get("cosc_304").unwrap();
    assert_eq!(db.edges, vec!["cosc_221", "cosc_222", "cosc_310"]);
}

#[test]
fn scraped_calendar_exports() {
    let graph = scraped();

    let dot = ExportFormat::Dot.render(&graph);
    assert!(dot.contains("\"cosc_121\" [label=\"cosc_121\\nComputer Programming II\"];"));
    assert!(dot.contains("\"cosc_111\" -> \"cosc_121\" [color=black];"));
    assert_eq!(dot.matches("->").count(), graph.edge_count());

    let mermaid = MermaidGenerator::generate(&graph);
    assert!(mermaid.contains("cosc_111 --> cosc_121"));
    assert_eq!(ExportFormat::Mermaid.render(&graph), mermaid);
}
