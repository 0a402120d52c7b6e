// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages.
//
// The crawler only knows about the Fetcher trait, so tests can hand it an
// in-memory website instead of the network. HttpFetcher is the real thing,
// built on reqwest.
//
// What counts as a failed fetch:
// - Anything that is not http:// or https:// (mailto:, tel:, javascript:)
// - Connection, DNS, TLS and timeout errors
// - Any non-2xx HTTP status
//
// Rust concepts:
// - Traits: An interface the crawler programs against
// - async-trait: Lets a trait have async methods and still be used as
//   `&dyn Fetcher`
// - Send + Sync: The fetcher may be shared across tasks
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::crawl::CrawlerConfig;
use crate::error::FetchError;

/// Something that can download the content of a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Fetches pages over HTTP(S) with reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates the HTTP client once; it is reused for every page
    // (reqwest keeps a connection pool inside the client)
    pub fn new(config: &CrawlerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        if !is_fetchable(url) {
            return Err(FetchError::UnsupportedScheme(url.to_string()));
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("{} -> HTTP {}", url, status.as_u16());

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

// Only HTTP/HTTPS pages can be crawled
//
// The scheme is compared after parsing, so "HTTP://host/" is accepted too.
fn is_fetchable(url: &str) -> bool {
    Url::parse(url).is_ok_and(|parsed| matches!(parsed.scheme(), "http" | "https"))
}
