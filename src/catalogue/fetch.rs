// src/catalogue/fetch.rs
// =============================================================================
// This module fetches catalogue documents over HTTP.
//
// The crawl driver only cares about the contract, not the transport, so the
// contract is a trait:
//
//   fetch(url) -> Ok(parsed JSON body)   on a success status with JSON body
//   fetch(url) -> Err(readable cause)    on transport error, non-success
//                                        status, or a body that isn't JSON
//
// HttpFetcher is the real implementation (reqwest). Tests implement the
// trait over a HashMap of canned documents so no test touches the network.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::doc::CatalogueDocument;

// The fetch contract the crawl driver runs against
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<CatalogueDocument>;
}

// Fetches catalogues with a shared reqwest client
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        // Reuse one client for all requests (connection pooling)
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<CatalogueDocument> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("fetch error for {}", url))?;

        if !response.status().is_success() {
            return Err(anyhow!("status code {}", response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("error reading body of {}", url))?;

        let doc: CatalogueDocument = serde_json::from_str(&body)
            .with_context(|| format!("error parsing {}", url))?;

        Ok(doc)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly in the driver?
//    - The driver's logic (visit once, never retry, keep going on failure)
//      is worth testing without a web server
//    - A trait is the seam: tests swap in a fake fetcher, main swaps in
//      this real one
//
// 2. What does .context() / .with_context() do?
//    - Wraps an error with a human-readable message
//    - with_context takes a closure so the message is only built on failure
//    - The original cause stays attached underneath
//
// 3. Why not inspect the status code beyond is_success()?
//    - The crawl treats every failure the same way: log it, mark the URL
//      explored, move on. No retries, no special cases.
// -----------------------------------------------------------------------------
