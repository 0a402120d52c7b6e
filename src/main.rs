// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the website and collect every word
// 3. Rank the words and print the top ones
// 4. Optionally generate password mutations of the top words
// 5. Write the requested report files
//
// Exit codes: 0 = finished (even if no words were found), 2 = error
//
// Rust concepts used:
// - async/await: Because fetching pages is network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - website crawling logic
mod error; // src/error.rs - error types
mod extract; // src/extract/ - text and link extraction from HTML
mod logging; // src/logging.rs - tracing setup
mod mutate; // src/mutate/ - password mutations
mod report; // src/report.rs - console, file and JSON output
mod words; // src/words/ - tokenizing and ranking

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser; // Parser trait enables the parse() method
use tracing::{debug, error, info, warn};

use cli::Cli;
use crawl::{cancel_pair, Crawler, HttpFetcher};
use mutate::MutationGenerator;
use report::{FailureReport, JsonReport, WordMutations};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    for warning in cli.config_warnings() {
        warn!("{}", warning);
    }

    let config = cli.crawler_config();
    let fetcher = HttpFetcher::new(&config).context("failed to create HTTP client")?;

    // Ctrl-C stops the crawl but still reports what was found so far
    let (cancel_handle, cancel_signal) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, finishing with the words collected so far");
            cancel_handle.cancel();
        }
    });

    let outcome = Crawler::new(&fetcher, config)
        .with_cancel(cancel_signal)
        .crawl(&cli.url)
        .await;

    let counts = words::count(&outcome.words, cli.length);
    info!(
        "{} distinct word(s), {} occurrence(s) of at least {} character(s)",
        counts.len(),
        counts.total(),
        cli.length
    );
    let ranked = words::rank(&counts);
    let top = words::top_n(&ranked, cli.top);

    let mutations: Vec<WordMutations> = if cli.mutate {
        let year = cli.year.unwrap_or_else(|| chrono::Local::now().year());
        let generator = MutationGenerator::new(year);
        debug!("Generating mutations with years {:?}", generator.years());
        top.iter()
            .map(|entry| WordMutations {
                word: entry.word.clone(),
                mutations: generator.mutate(&entry.word),
            })
            .collect()
    } else {
        Vec::new()
    };

    if cli.json {
        let json = report::format_json(&JsonReport {
            url: &cli.url,
            pages_visited: outcome.visited.len(),
            failures: outcome
                .failures
                .iter()
                .map(|failed| FailureReport {
                    url: failed.url.clone(),
                    depth: failed.depth,
                    error: failed.error.to_string(),
                })
                .collect(),
            interrupted: outcome.interrupted,
            top_words: top,
            mutations: cli.mutate.then_some(mutations.as_slice()),
        })?;
        println!("{}", json);
    } else {
        print!("{}", report::format_top_words(&ranked, cli.top));
        // Mutations go to the terminal only when they aren't saved to a file
        if cli.mutate && cli.mutation_output.is_none() {
            print!("\n{}", report::format_mutation_report(&mutations));
        }
    }

    // File write failures are reported but don't change the exit code
    if let Some(path) = &cli.output {
        if let Err(e) = report::write_report(path, &report::format_word_report(&ranked)) {
            error!("Error writing to file: {:#}", e);
        }
    }

    if let Some(path) = &cli.mutation_output {
        if cli.mutate {
            if let Err(e) = report::write_report(path, &report::format_mutation_report(&mutations)) {
                error!("Error writing to mutation output file: {:#}", e);
            }
        }
    }

    Ok(0)
}
