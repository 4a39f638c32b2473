// src/crawl/driver.rs
// =============================================================================
// This module runs the crawl loop: pop a URL, fetch it, expand it, repeat
// until the frontier is empty.
//
// Rules the loop enforces:
// - A URL popped twice (it can be enqueued twice) is only fetched once
// - A URL whose fetch failed is marked explored anyway, so broken links are
//   never retried
// - Exactly one fetch is in flight at a time, and expansion finishes before
//   the next pop - new discoveries always land on the frontier before we
//   take the next URL
// =============================================================================

use crate::catalogue::{expand_catalogue, Fetcher};

use super::session::CrawlSession;

// Drives the crawl to completion.
//
// Generic over the Fetcher so tests can run the loop against canned
// documents. Returns when the frontier is empty; every failure along the
// way is logged and survived.
pub async fn crawl<F: Fetcher>(session: &mut CrawlSession, fetcher: &F) {
    while let Some(url) = session.frontier.take_next() {
        // Seen before (possibly enqueued from two catalogues) - skip
        if session.frontier.is_explored(&url) {
            continue;
        }

        match fetcher.fetch(&url).await {
            Ok(doc) => {
                session.frontier.mark_explored(&url);
                expand_catalogue(session, &url, &doc);
            }
            Err(e) => {
                // Was bad, but explored - never fetched again
                eprintln!("Error in {} ({:#})", url, e);
                session.frontier.mark_explored(&url);
            }
        }
    }
}
