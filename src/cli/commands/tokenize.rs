//! Tokenize command handler

use course_graph::{classify, tokenize};

/// Print the token stream for `text`, then the record it classifies to
pub fn run(text: &str) {
    println!("Tokens:");
    let mut count = 0usize;
    for token in tokenize(text) {
        println!("  {token}");
        count += 1;
    }
    if count == 0 {
        println!("  (none)");
    }

    let record = classify(tokenize(text), "");
    println!("\nKind: {}", record.kind);
    if record.edges.is_empty() {
        println!("Edges: (none)");
    } else {
        println!("Edges: {}", record.edges.join(", "));
    }
}
