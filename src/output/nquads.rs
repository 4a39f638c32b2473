// src/output/nquads.rs
// =============================================================================
// This module renders the fact store as N-Quads: one line per fact, four
// terms separated by spaces, terminated by " .".
//
// Each term is rendered by a literal-vs-reference heuristic: strings that
// look like URIs get angle brackets, everything else gets double quotes.
// "Looks like a URI" means it starts with one of the prefixes in
// URI_PREFIXES - the same rough check for every position (subject,
// predicate, object and context alike).
// =============================================================================

use crate::crawl::FactStore;

// Prefixes that make a term render as <reference> instead of "literal".
// Kept exactly as the crawl's consumers expect them; do not extend.
const URI_PREFIXES: [&str; 4] = ["http", "mqtt", "urn:", "/"];

// Renders one term as either an angle-bracketed reference or a quoted
// literal
fn render_term(s: &str) -> String {
    if URI_PREFIXES.iter().any(|prefix| s.starts_with(prefix)) {
        format!("<{}>", s)
    } else {
        format!("\"{}\"", s)
    }
}

// Renders the whole store, one quad per line
pub fn render_nquads(store: &FactStore) -> String {
    let mut out = String::new();
    for fact in store.facts() {
        out.push_str(&format!(
            "{} {} {} {} .\n",
            render_term(&fact.subject),
            render_term(&fact.predicate),
            render_term(&fact.object),
            render_term(&fact.context)
        ));
    }
    out
}
