// src/output/dot.rs
// =============================================================================
// This module renders the fact store as a DOT graph for GraphViz.
//
// One edge per fact, subject -> object, labelled with the predicate:
//
//   digraph {
//       "http://h/root" -> "http://h/a" [label="hasResource"];
//   }
//
// An empty store renders as nothing at all (not an empty digraph).
// =============================================================================

use crate::crawl::FactStore;

// Renders the whole store as one DOT digraph, or an empty string if there
// are no facts
pub fn render_dot(store: &FactStore) -> String {
    if store.is_empty() {
        return String::new();
    }

    let mut out = String::from("digraph {\n");
    for fact in store.facts() {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
            fact.subject, fact.object, fact.predicate
        ));
    }
    out.push_str("}\n");
    out
}
