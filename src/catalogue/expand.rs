// src/catalogue/expand.rs
// =============================================================================
// This module turns one fetched catalogue document into facts and new
// frontier entries.
//
// Two independent extraction passes:
// 1. Catalogue metadata pass: each {rel, val} in doc.metadata becomes the
//    fact (url, rel, val) with the catalogue URL as context
// 2. Item pass: each item gets its href resolved to an absolute URL, a
//    "hasResource" fact linking the catalogue to it, one fact per item
//    metadata entry, and - if the metadata says the item is itself a
//    catalogue - a spot on the frontier
//
// A malformed shape fails only its own pass: the error is logged to stderr
// and the other pass (and the rest of the crawl) carries on.
// =============================================================================

use anyhow::{Context, Result};
use url::Url;

use super::doc::{
    CatalogueDocument, CatalogueItem, MetadataEntry, CATALOGUE_CONTENT_TYPE,
    REL_HAS_RESOURCE, REL_IS_CONTENT_TYPE,
};
use crate::crawl::{CrawlSession, Fact};

// Expands one catalogue into the session's fact store and frontier.
//
// Parameters:
//   session: crawl state to append facts / pending URLs to
//   url: the absolute URL this document was fetched from
//   doc: the parsed JSON body
pub fn expand_catalogue(session: &mut CrawlSession, url: &str, doc: &CatalogueDocument) {
    // Pass 1: metadata describing the catalogue itself
    if let Err(e) = expand_metadata(session, url, doc) {
        eprintln!("Warning: bad metadata in {}: {:#}", url, e);
    }

    // Pass 2: the items the catalogue links to
    if let Err(e) = expand_items(session, url, doc) {
        eprintln!("Warning: bad items in {}: {:#}", url, e);
    }
}

fn expand_metadata(session: &mut CrawlSession, url: &str, doc: &CatalogueDocument) -> Result<()> {
    let entries: Vec<MetadataEntry> = serde_json::from_value(
        doc.get("metadata")
            .context("missing 'metadata'")?
            .clone(),
    )
    .context("'metadata' is not a list of {rel, val}")?;

    for entry in entries {
        session.facts.store(Fact {
            subject: url.to_string(),
            predicate: entry.rel,
            object: entry.val,
            context: url.to_string(),
        });
    }

    Ok(())
}

fn expand_items(session: &mut CrawlSession, url: &str, doc: &CatalogueDocument) -> Result<()> {
    let items: Vec<CatalogueItem> = serde_json::from_value(
        doc.get("items")
            .context("missing 'items'")?
            .clone(),
    )
    .context("'items' is not a list of {href, metadata}")?;

    let base = Url::parse(url).with_context(|| format!("invalid base URL {}", url))?;

    for item in items {
        // Fix up relative hrefs against the catalogue's own URL
        let href = base
            .join(&item.href)
            .with_context(|| format!("cannot resolve href {:?}", item.href))?
            .to_string();

        // The catalogue asserts that it links to this item
        session.facts.store(Fact {
            subject: url.to_string(),
            predicate: REL_HAS_RESOURCE.to_string(),
            object: href.clone(),
            context: url.to_string(),
        });

        for entry in &item.metadata {
            session.facts.store(Fact {
                subject: href.clone(),
                predicate: entry.rel.clone(),
                object: entry.val.clone(),
                context: url.to_string(),
            });

            // An item declared to be a catalogue gets crawled too.
            // This is the sole link-following rule.
            if entry.rel == REL_IS_CONTENT_TYPE && entry.val == CATALOGUE_CONTENT_TYPE {
                session.frontier.enqueue(href.clone());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_pass_stores_catalogue_facts() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [{"rel": "urn:name", "val": "Root"}],
            "items": []
        });

        expand_catalogue(&mut session, "http://h/root", &doc);

        assert_eq!(session.facts.len(), 1);
        let fact = &session.facts.facts()[0];
        assert_eq!(fact.subject, "http://h/root");
        assert_eq!(fact.predicate, "urn:name");
        assert_eq!(fact.object, "Root");
        assert_eq!(fact.context, "http://h/root");
    }

    #[test]
    fn test_item_pass_resolves_relative_href() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [],
            "items": [{"href": "child", "metadata": []}]
        });

        expand_catalogue(&mut session, "http://h/cat/", &doc);

        assert_eq!(session.facts.len(), 1);
        let fact = &session.facts.facts()[0];
        assert_eq!(fact.predicate, "hasResource");
        assert_eq!(fact.object, "http://h/cat/child");
    }

    #[test]
    fn test_item_metadata_becomes_facts_about_item() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [],
            "items": [{
                "href": "http://h/thing",
                "metadata": [{"rel": "urn:kind", "val": "sensor"}]
            }]
        });

        expand_catalogue(&mut session, "http://h/root", &doc);

        let facts = session.facts.facts();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[1].subject, "http://h/thing");
        assert_eq!(facts[1].predicate, "urn:kind");
        assert_eq!(facts[1].object, "sensor");
        // Nothing looked like a nested catalogue
        assert!(!session.frontier.has_work());
    }

    #[test]
    fn test_nested_catalogue_is_enqueued() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [],
            "items": [{
                "href": "sub",
                "metadata": [{
                    "rel": "urn:X-tsbiot:rels:isContentType",
                    "val": "application/vnd.tsbiot.catalogue+json"
                }]
            }]
        });

        expand_catalogue(&mut session, "http://h/root/", &doc);

        assert_eq!(
            session.frontier.take_next().as_deref(),
            Some("http://h/root/sub")
        );
    }

    #[test]
    fn test_other_content_types_are_not_followed() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [],
            "items": [{
                "href": "feed",
                "metadata": [{
                    "rel": "urn:X-tsbiot:rels:isContentType",
                    "val": "application/json"
                }]
            }]
        });

        expand_catalogue(&mut session, "http://h/root/", &doc);
        assert!(!session.frontier.has_work());
    }

    #[test]
    fn test_bad_metadata_does_not_suppress_item_pass() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": "not a list",
            "items": [{"href": "http://h/a", "metadata": []}]
        });

        expand_catalogue(&mut session, "http://h/root", &doc);

        // Metadata pass failed, item pass still produced its fact
        assert_eq!(session.facts.len(), 1);
        assert_eq!(session.facts.facts()[0].predicate, "hasResource");
    }

    #[test]
    fn test_bad_items_does_not_suppress_metadata_pass() {
        let mut session = CrawlSession::default();
        let doc = json!({
            "metadata": [{"rel": "urn:name", "val": "Root"}],
            "items": {"oops": true}
        });

        expand_catalogue(&mut session, "http://h/root", &doc);

        assert_eq!(session.facts.len(), 1);
        assert_eq!(session.facts.facts()[0].predicate, "urn:name");
    }

    #[test]
    fn test_missing_both_sections_stores_nothing() {
        let mut session = CrawlSession::default();
        let doc = json!({"unrelated": 1});

        expand_catalogue(&mut session, "http://h/root", &doc);

        assert!(session.facts.is_empty());
        assert!(!session.frontier.has_work());
    }
}
