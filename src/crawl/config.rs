// src/crawl/config.rs
// =============================================================================
// Configuration for the crawler, built with a builder:
//
//   let config = CrawlerConfig::builder()
//       .max_depth(2)
//       .request_timeout(Duration::from_secs(5))
//       .build();
// =============================================================================

use std::time::Duration;

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// How many link hops to follow from the seed (0 = only the seed)
    pub max_depth: usize,

    /// Timeout for each individual HTTP request
    pub request_timeout: Duration,

    /// Deadline for the whole crawl; None means no deadline
    pub crawl_timeout: Option<Duration>,

    /// User agent to use for requests
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            request_timeout: Duration::from_secs(10),
            crawl_timeout: None,
            user_agent: format!("word-harvest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    pub fn crawl_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.crawl_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_crawl_only_the_seed() {
        let config = CrawlerConfig::default();
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.crawl_timeout, None);
        assert!(config.user_agent.starts_with("word-harvest/"));
    }

    #[test]
    fn test_builder() {
        let config = CrawlerConfig::builder()
            .max_depth(3)
            .request_timeout(Duration::from_secs(2))
            .crawl_timeout(Some(Duration::from_secs(60)))
            .user_agent("test-agent")
            .build();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.crawl_timeout, Some(Duration::from_secs(60)));
        assert_eq!(config.user_agent, "test-agent");
    }
}
