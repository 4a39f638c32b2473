// src/catalogue/doc.rs
// =============================================================================
// This module defines the wire shape of a catalogue document.
//
// A catalogue is a JSON object like:
//
//   {
//     "metadata": [ { "rel": "urn:name", "val": "My catalogue" }, ... ],
//     "items": [
//       {
//         "href": "some/item",
//         "metadata": [ { "rel": "...", "val": "..." }, ... ]
//       },
//       ...
//     ]
//   }
//
// The fetcher hands us the parsed JSON as a serde_json::Value; the expander
// pulls the typed records below out of it one pass at a time, so a malformed
// "items" array can't stop us extracting a well-formed "metadata" array
// (and vice versa).
// =============================================================================

use serde::Deserialize;

// The parsed catalogue body, before either extraction pass has looked at it.
// Kept as raw JSON deliberately - shape validation happens per pass.
pub type CatalogueDocument = serde_json::Value;

// One rel/val pair describing a catalogue or an item
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataEntry {
    pub rel: String,
    pub val: String,
}

// One linked entity inside a catalogue.
// href may be relative; the expander resolves it against the catalogue URL.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueItem {
    pub href: String,
    pub metadata: Vec<MetadataEntry>,
}

// Predicate asserting that a catalogue links to an item
pub const REL_HAS_RESOURCE: &str = "hasResource";

// The rel that declares an item's content type
pub const REL_IS_CONTENT_TYPE: &str = "urn:X-tsbiot:rels:isContentType";

// Items with this content type are themselves catalogues and get crawled.
// This is the only thing that triggers link-following.
pub const CATALOGUE_CONTENT_TYPE: &str = "application/vnd.tsbiot.catalogue+json";
