// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Depth-first crawling starting from a seed URL
// - Configurable depth limit (0 = only the seed page)
// - Never fetches the same URL twice in one crawl, even with link cycles
// - A broken page never stops the crawl; it just contributes no words
// - Optional overall deadline and Ctrl-C cancellation
//
// Submodules:
// - config: CrawlerConfig and its builder
// - fetch: The Fetcher trait and the reqwest-based HttpFetcher
// - cancel: A cancellation signal shared with the Ctrl-C handler
// - traversal: The crawl loop itself
// =============================================================================

mod cancel;
mod config;
mod fetch;
mod traversal;

pub use cancel::{cancel_pair, CancelSignal};
pub use config::CrawlerConfig;
pub use fetch::{Fetcher, HttpFetcher};
pub use traversal::Crawler;
