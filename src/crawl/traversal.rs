// src/crawl/traversal.rs
// =============================================================================
// This module implements website crawling with a depth-first approach.
//
// How it works:
// 1. Put the seed URL on a stack at depth 0
// 2. Pop a (url, depth) pair; skip it if it is too deep or already visited
//    (this check happens BEFORE any network access)
// 3. Mark it visited, fetch it, extract its text and append its words
// 4. If depth < max_depth, push its links at depth + 1
// 5. Repeat until the stack is empty
//
// Links are pushed in reverse, so the first link on a page is explored
// first (and fully, including its own links) before the second one. The
// order of the collected words therefore matches a recursive depth-first
// walk of the site, which the frequency ranking relies on for tie-breaks.
//
// Failure isolation:
// - A page that fails to download or parse contributes no words
// - It still counts as visited, and the crawl moves on to the next entry
// - Only cancellation or the crawl deadline stop the loop early, and even
//   then the words collected so far are returned
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - Vec as a stack: push() and pop() work on the end of the vector
// - tokio::select!: Race a fetch against the cancellation signal
// =============================================================================

use std::collections::HashSet;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::crawl::{CancelSignal, CrawlerConfig, Fetcher};
use crate::error::{BranchError, FetchError};
use crate::extract::{self, ExtractedPage};
use crate::words::tokenize;

// Represents a page waiting on the crawl stack
#[derive(Debug, Clone)]
struct CrawlItem {
    url: String,
    depth: usize, // How many link hops from the seed
}

/// A page that was visited but contributed no words
#[derive(Debug)]
pub struct FailedPage {
    pub url: String,
    pub depth: usize,
    pub error: BranchError,
}

/// Everything one crawl produced
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Words from every successfully processed page, in visit order
    pub words: Vec<String>,

    /// Every URL that was dequeued for fetching, in visit order
    pub visited: Vec<String>,

    /// Pages that failed to download or parse
    pub failures: Vec<FailedPage>,

    /// True if cancellation or the crawl deadline cut the crawl short
    pub interrupted: bool,
}

/// Depth-first crawler over any Fetcher
pub struct Crawler<'a> {
    fetcher: &'a dyn Fetcher,
    config: CrawlerConfig,
    cancel: CancelSignal,
}

impl<'a> Crawler<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, config: CrawlerConfig) -> Self {
        Self {
            fetcher,
            config,
            cancel: CancelSignal::never(),
        }
    }

    /// Lets the crawl be stopped early from elsewhere (e.g. Ctrl-C)
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = cancel;
        self
    }

    // Crawls a website starting from `seed`
    //
    // Never fails: a broken seed simply yields an outcome with no words and
    // one entry in `failures`.
    pub async fn crawl(&self, seed: &str) -> CrawlOutcome {
        let max_depth = self.config.max_depth;
        let deadline = self.config.crawl_timeout.map(|timeout| Instant::now() + timeout);
        let mut cancel = self.cancel.clone();

        info!("Starting crawl for {} (max depth {})", seed, max_depth);

        let mut stack = vec![CrawlItem {
            url: seed.to_string(),
            depth: 0,
        }];
        let mut visited = HashSet::new();
        let mut outcome = CrawlOutcome::default();

        while let Some(item) = stack.pop() {
            // The only depth and cycle guard, checked before touching the network
            if item.depth > max_depth || visited.contains(&item.url) {
                debug!("Skipping {} (depth {})", item.url, item.depth);
                continue;
            }

            visited.insert(item.url.clone());
            outcome.visited.push(item.url.clone());

            info!("Crawling {} (depth {})", item.url, item.depth);

            match self.visit(&item.url, deadline, &mut cancel).await {
                Ok(page) => {
                    outcome.words.extend(tokenize(&page.text));

                    if item.depth < max_depth {
                        let children = resolve_links(&item.url, &page.links);
                        // Reverse so the first link ends up on top of the stack
                        stack.extend(children.into_iter().rev().map(|url| CrawlItem {
                            url,
                            depth: item.depth + 1,
                        }));
                    }
                }
                Err(error) => {
                    warn!("Error crawling {}: {}", item.url, error);
                    let interrupted = error.is_interruption();
                    outcome.failures.push(FailedPage {
                        url: item.url,
                        depth: item.depth,
                        error,
                    });

                    if interrupted {
                        outcome.interrupted = true;
                        break;
                    }
                }
            }
        }

        info!(
            "Crawl finished: {} page(s) visited, {} failed, {} word(s) collected",
            outcome.visited.len(),
            outcome.failures.len(),
            outcome.words.len()
        );

        outcome
    }

    // Fetches one page and extracts its text and links
    async fn visit(
        &self,
        url: &str,
        deadline: Option<Instant>,
        cancel: &mut CancelSignal,
    ) -> Result<ExtractedPage, BranchError> {
        let content = self.fetch(url, deadline, cancel).await?;
        Ok(extract::extract_page(&content)?)
    }

    // Runs the fetch, giving up if the deadline passes or the crawl is cancelled
    async fn fetch(
        &self,
        url: &str,
        deadline: Option<Instant>,
        cancel: &mut CancelSignal,
    ) -> Result<Vec<u8>, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled(url.to_string()));
        }
        // timeout_at polls the fetch once before looking at the clock
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(FetchError::DeadlineExpired(url.to_string()));
        }

        let limited = async {
            match deadline {
                Some(deadline) => match tokio::time::timeout_at(deadline, self.fetcher.fetch(url)).await {
                    Ok(result) => result,
                    Err(_) => Err(FetchError::DeadlineExpired(url.to_string())),
                },
                None => self.fetcher.fetch(url).await,
            }
        };

        tokio::select! {
            result = limited => result,
            _ = cancel.cancelled() => Err(FetchError::Cancelled(url.to_string())),
        }
    }
}

// Resolves every href on a page against the page's URL, in document order
//
// Links that cannot be resolved are logged and dropped.
fn resolve_links(page_url: &str, hrefs: &[String]) -> Vec<String> {
    hrefs
        .iter()
        .filter_map(|href| match extract::resolve(page_url, href) {
            Ok(url) => Some(url),
            Err(e) => {
                debug!("Skipping link '{}' on {}: {}", href, page_url, e);
                None
            }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a stack and not recursion?
//    - Recursion uses the call stack, which has a fixed size
//    - A Vec grows on the heap, so very deep sites can't overflow it
//    - It also makes it easy to stop the loop early on cancellation
//
// 2. Why check "visited" when popping instead of when pushing?
//    - A page can be linked from many places before we get to it
//    - Checking at pop time means the FIRST time we reach it in depth-first
//      order is the time it gets fetched
//
// 3. What is tokio::select!?
//    - Waits on several futures at once and runs the branch of whichever
//      finishes first; the others are dropped (cancelled)
//
// 4. Why does crawl() return CrawlOutcome instead of Result?
//    - No single page can make the whole crawl fail
//    - Failures are collected in outcome.failures for reporting instead
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::cancel_pair;
    use crate::error::ProcessingError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    // An in-memory website that records every fetch
    #[derive(Default)]
    struct FakeWeb {
        pages: HashMap<String, Vec<u8>>,
        slow: Vec<String>,
        fetched: Mutex<Vec<String>>,
    }

    impl FakeWeb {
        fn page(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.as_bytes().to_vec());
            self
        }

        fn raw_page(mut self, url: &str, content: &[u8]) -> Self {
            self.pages.insert(url.to_string(), content.to_vec());
            self
        }

        // A page whose fetch never completes
        fn slow_page(mut self, url: &str) -> Self {
            self.slow.push(url.to_string());
            self
        }

        fn fetched(&self) -> Vec<String> {
            self.fetched.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetcher for FakeWeb {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.fetched.lock().unwrap().push(url.to_string());
            if self.slow.iter().any(|slow| slow == url) {
                std::future::pending::<()>().await;
            }
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::NotFound(url.to_string()))
        }
    }

    fn config(max_depth: usize) -> CrawlerConfig {
        CrawlerConfig::builder().max_depth(max_depth).build()
    }

    async fn crawl(web: &FakeWeb, seed: &str, max_depth: usize) -> CrawlOutcome {
        Crawler::new(web, config(max_depth)).crawl(seed).await
    }

    #[tokio::test]
    async fn test_two_page_site() {
        let web = FakeWeb::default()
            .page(
                "http://a/",
                r#"<p>cat cat dog</p><a href="http://a/"></a><a href="http://b/"></a>"#,
            )
            .page("http://b/", "<p>bird</p>");

        let outcome = crawl(&web, "http://a/", 1).await;

        assert_eq!(outcome.words, vec!["cat", "cat", "dog", "bird"]);
        assert_eq!(outcome.visited, vec!["http://a/", "http://b/"]);
        assert_eq!(web.fetched(), vec!["http://a/", "http://b/"]);
        assert!(outcome.failures.is_empty());
        assert!(!outcome.interrupted);
    }

    #[tokio::test]
    async fn test_depth_zero_fetches_only_the_seed() {
        let web = FakeWeb::default()
            .page("http://a/", r#"<p>root</p><a href="/b"></a><a href="/c"></a>"#)
            .page("http://a/b", "<p>bee</p>")
            .page("http://a/c", "<p>sea</p>");

        let outcome = crawl(&web, "http://a/", 0).await;

        assert_eq!(web.fetched(), vec!["http://a/"]);
        assert_eq!(outcome.words, vec!["root"]);
    }

    #[tokio::test]
    async fn test_cycles_are_fetched_once() {
        let web = FakeWeb::default()
            .page("http://a/", r#"A<a href="http://b/"></a>"#)
            .page("http://b/", r#"B<a href="http://a/"></a><a href="http://b/"></a>"#);

        let outcome = crawl(&web, "http://a/", 10).await;

        assert_eq!(web.fetched(), vec!["http://a/", "http://b/"]);
        assert_eq!(outcome.words, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_depth_first_left_to_right_order() {
        // a -> [b, c], b -> [d], and c is also linked from d
        let web = FakeWeb::default()
            .page("http://s/a", r#"a<a href="b"></a><a href="c"></a>"#)
            .page("http://s/b", r#"b<a href="d"></a>"#)
            .page("http://s/c", "c")
            .page("http://s/d", r#"d<a href="c"></a>"#);

        let outcome = crawl(&web, "http://s/a", 3).await;

        // c is reached through d first (deeper), then skipped as a's second link
        assert_eq!(outcome.visited, vec!["http://s/a", "http://s/b", "http://s/d", "http://s/c"]);
        assert_eq!(outcome.words, vec!["a", "b", "d", "c"]);
    }

    #[tokio::test]
    async fn test_depth_limit_is_a_hard_cutoff() {
        let web = FakeWeb::default()
            .page("http://s/1", r#"one<a href="2"></a>"#)
            .page("http://s/2", r#"two<a href="3"></a>"#)
            .page("http://s/3", "three");

        let outcome = crawl(&web, "http://s/1", 1).await;

        assert_eq!(web.fetched(), vec!["http://s/1", "http://s/2"]);
        assert_eq!(outcome.words, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn test_failed_seed_yields_no_words() {
        let web = FakeWeb::default();

        let outcome = crawl(&web, "http://down/", 2).await;

        assert!(outcome.words.is_empty());
        assert_eq!(outcome.visited, vec!["http://down/"]);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0].error,
            BranchError::Fetch(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_broken_child_does_not_stop_siblings() {
        let web = FakeWeb::default()
            .page(
                "http://s/",
                r#"root<a href="/missing"></a><a href="/binary"></a><a href="/ok"></a>"#,
            )
            .raw_page("http://s/binary", &[0xff, 0xfe, 0xfd])
            .page("http://s/ok", "fine");

        let outcome = crawl(&web, "http://s/", 1).await;

        assert_eq!(outcome.words, vec!["root", "fine"]);
        assert_eq!(outcome.failures.len(), 2);
        assert_eq!(outcome.failures[0].url, "http://s/missing");
        assert_eq!(outcome.failures[1].url, "http://s/binary");
        assert!(matches!(
            outcome.failures[1].error,
            BranchError::Processing(ProcessingError::Decode(_))
        ));
        assert!(!outcome.interrupted);
    }

    #[tokio::test]
    async fn test_urls_are_compared_literally() {
        // Same page with and without a trailing slash counts as two pages
        let web = FakeWeb::default()
            .page("http://s/x", r#"x<a href="/x/"></a>"#)
            .page("http://s/x/", "slash");

        let outcome = crawl(&web, "http://s/x", 1).await;

        assert_eq!(web.fetched(), vec!["http://s/x", "http://s/x/"]);
        assert_eq!(outcome.words, vec!["x", "slash"]);
    }

    #[tokio::test]
    async fn test_deadline_returns_partial_words() {
        let web = FakeWeb::default()
            .page("http://s/", r#"first<a href="/slow"></a><a href="/later"></a>"#)
            .page("http://s/later", "later")
            .slow_page("http://s/slow");
        let config = CrawlerConfig::builder()
            .max_depth(1)
            .crawl_timeout(Some(Duration::from_millis(50)))
            .build();

        let outcome = Crawler::new(&web, config).crawl("http://s/").await;

        assert!(outcome.interrupted);
        assert_eq!(outcome.words, vec!["first"]);
        assert!(matches!(
            outcome.failures[0].error,
            BranchError::Fetch(FetchError::DeadlineExpired(_))
        ));
        // The crawl stopped instead of moving on to /later
        assert!(!web.fetched().contains(&"http://s/later".to_string()));
    }

    #[tokio::test]
    async fn test_cancellation_during_fetch() {
        let web = FakeWeb::default()
            .page("http://s/", r#"first<a href="/slow"></a>"#)
            .slow_page("http://s/slow");
        let (handle, signal) = cancel_pair();

        let crawler = Crawler::new(&web, config(1)).with_cancel(signal);
        let cancel_later = async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            handle.cancel();
        };
        let (outcome, ()) = tokio::join!(crawler.crawl("http://s/"), cancel_later);

        assert!(outcome.interrupted);
        assert_eq!(outcome.words, vec!["first"]);
        assert!(matches!(
            outcome.failures[0].error,
            BranchError::Fetch(FetchError::Cancelled(_))
        ));
    }

    #[tokio::test]
    async fn test_already_cancelled_never_fetches() {
        let web = FakeWeb::default().page("http://s/", "words");
        let (handle, signal) = cancel_pair();
        handle.cancel();

        let outcome = Crawler::new(&web, config(0))
            .with_cancel(signal)
            .crawl("http://s/")
            .await;

        assert!(outcome.words.is_empty());
        assert!(outcome.interrupted);
        assert!(web.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_expired_deadline_never_fetches() {
        let web = FakeWeb::default().page("http://s/", "words");
        let config = CrawlerConfig::builder()
            .crawl_timeout(Some(Duration::ZERO))
            .build();

        let outcome = Crawler::new(&web, config).crawl("http://s/").await;

        assert!(outcome.words.is_empty());
        assert!(outcome.interrupted);
        assert!(web.fetched().is_empty());
        assert!(matches!(
            outcome.failures[0].error,
            BranchError::Fetch(FetchError::DeadlineExpired(_))
        ));
    }

    #[test]
    fn test_resolve_links_drops_unresolvable() {
        let links = resolve_links(
            "http://s/dir/page",
            &["other".to_string(), "http://[bad".to_string(), "/root".to_string()],
        );
        assert_eq!(links, vec!["http://s/dir/other", "http://s/root"]);
    }
}
