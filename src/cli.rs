// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// It also turns the parsed flags into a CrawlerConfig and reports option
// combinations that don't make sense (as warnings, never as hard errors).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: Flags the user may leave out
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::crawl::CrawlerConfig;
use crate::error::ConfigError;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "word-harvest",
    version,
    about = "Crawl a website, rank its words and build password wordlists",
    long_about = "word-harvest crawls a website from a seed page, counts the words on every page it \
                  visits and prints the most common ones. With --mutate it also generates common \
                  password variants (years, symbols, seasons, ...) of the top words."
)]
pub struct Cli {
    /// URL of the webpage to start crawling from
    #[arg(short, long)]
    pub url: String,

    /// Minimum word length (default: 0, no limit)
    #[arg(short, long, default_value_t = 0)]
    pub length: usize,

    /// Crawl depth (default: 0, only the given URL)
    ///
    /// Depth 0 = just the starting page
    /// Depth 1 = starting page + all pages it links to
    #[arg(short, long, default_value_t = 0)]
    pub depth: usize,

    /// File to save the full word ranking to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generate common password mutations of the top words
    #[arg(short, long)]
    pub mutate: bool,

    /// File to save the password mutations to (requires --mutate)
    #[arg(long, visible_alias = "mo")]
    pub mutation_output: Option<PathBuf>,

    /// How many top words to print (and mutate)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    /// Year used for mutations (default: the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Stop crawling after this many seconds and report what was found
    #[arg(long)]
    pub crawl_timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Print the results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// More log output (-v = debug, -vv = trace). RUST_LOG overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    // Builds the crawler configuration from the flags
    pub fn crawler_config(&self) -> CrawlerConfig {
        let mut builder = CrawlerConfig::builder()
            .max_depth(self.depth)
            .request_timeout(Duration::from_secs(self.timeout))
            .crawl_timeout(self.crawl_timeout.map(Duration::from_secs));

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build()
    }

    // Returns every option combination worth warning about
    //
    // None of these stop the run; main.rs logs them and carries on.
    pub fn config_warnings(&self) -> Vec<ConfigError> {
        let mut warnings = Vec::new();

        if self.mutation_output.is_some() && !self.mutate {
            warnings.push(ConfigError::MutationOutputWithoutMutate);
        }
        if self.top == 0 {
            warnings.push(ConfigError::ZeroTopWords);
        }

        warnings
    }
}
