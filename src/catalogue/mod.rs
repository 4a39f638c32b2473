// src/catalogue/mod.rs
// =============================================================================
// This module handles catalogue documents.
//
// Pieces:
// - doc: the wire shape (metadata / items) and the well-known rel strings
// - fetch: the Fetcher contract plus the real HTTP implementation
// - expand: turning one document into facts and new frontier entries
// =============================================================================

mod doc;
mod expand;
mod fetch;

pub use doc::CatalogueDocument;
pub use expand::expand_catalogue;
pub use fetch::{Fetcher, HttpFetcher};
