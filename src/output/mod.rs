// src/output/mod.rs
// =============================================================================
// This module renders the finished fact store.
//
// Two formats:
// - dot: a GraphViz digraph, one labelled edge per fact (the default)
// - nquads: flat quads, one per line, for RDF tooling
//
// Both take the store read-only and return the full dump as a String; main
// prints it to stdout in one go once the crawl is over.
// =============================================================================

mod dot;
mod nquads;

pub use dot::render_dot;
pub use nquads::render_nquads;
