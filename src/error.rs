// src/error.rs
// =============================================================================
// Error types shared by the crawler, the extractors and the CLI.
//
// None of these errors stops a crawl:
// - FetchError / ProcessingError only knock out the page they happened on
// - ConfigError is reported to the user as a warning
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error for us
// - #[from]: automatic conversion so the ? operator just works
// =============================================================================

use thiserror::Error;

/// A page could not be downloaded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with a 2xx status
    #[error("HTTP status {status} returned for {url}")]
    Status { url: String, status: u16 },

    /// Connection, DNS, TLS or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Only http:// and https:// pages are fetched (mailto:, tel:, ...)
    #[error("unsupported URL scheme in {0}")]
    UnsupportedScheme(String),

    /// The overall crawl deadline expired while this page was loading
    #[error("crawl deadline expired before {0} finished loading")]
    DeadlineExpired(String),

    /// The user interrupted the crawl
    #[error("crawl cancelled while fetching {0}")]
    Cancelled(String),

    /// Used by in-memory fetchers in tests
    #[cfg(test)]
    #[error("page not found: {0}")]
    NotFound(String),
}

/// A page was downloaded but its content could not be turned into text or links.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("page is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("invalid CSS selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },
}

/// Why a single branch of the crawl produced no words.
#[derive(Debug, Error)]
pub enum BranchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl BranchError {
    /// True when the crawl stopped because of cancellation or its deadline
    pub fn is_interruption(&self) -> bool {
        matches!(
            self,
            BranchError::Fetch(FetchError::Cancelled(_) | FetchError::DeadlineExpired(_))
        )
    }
}

/// Option combinations that do not make sense. Reported as warnings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("mutation output file specified (--mutation-output), but mutation generation (--mutate) was not enabled; no mutations will be saved")]
    MutationOutputWithoutMutate,

    #[error("--top 0 was given, so no words will be printed or mutated")]
    ZeroTopWords,
}
