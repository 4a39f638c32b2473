// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Pieces:
// - session: the crawl state (fact store + frontier), no globals
// - driver: the loop that empties the frontier one fetch at a time
//
// Traversal is depth-first (the frontier is a stack) and strictly
// sequential: expansion of one catalogue always finishes before the next
// URL is taken.
// =============================================================================

mod driver;
mod session;

pub use driver::crawl;
pub use session::{CrawlSession, Fact, FactStore, Frontier};
