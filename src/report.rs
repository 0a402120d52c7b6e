// src/report.rs
// =============================================================================
// Formats and writes the results of a run.
//
// Three outputs:
// - Console summary: the top N words as "word: count"
// - Word report file: "TOP WORDS" followed by EVERY ranked word
// - Mutation report file: "PASSWORD MUTATIONS" followed by one block per word
//
// There is also a JSON form of everything for scripting (--json).
//
// Formatting functions return Strings so they can be tested without touching
// stdout or the filesystem.
// =============================================================================

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::words::{top_n, RankedWord};

/// The mutations generated for one source word
#[derive(Debug, Clone, Serialize)]
pub struct WordMutations {
    pub word: String,
    pub mutations: Vec<String>,
}

/// A page that contributed no words, as shown in the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct FailureReport {
    pub url: String,
    pub depth: usize,
    pub error: String,
}

/// Everything a run produced, as printed by --json
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub url: &'a str,
    pub pages_visited: usize,
    pub failures: Vec<FailureReport>,
    pub interrupted: bool,
    pub top_words: &'a [RankedWord],
    /// None when --mutate was not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutations: Option<&'a [WordMutations]>,
}

// Formats the first `n` ranked words for the terminal
//
// An empty ranking is a normal outcome (e.g. the seed page could not be
// fetched), so it gets a friendly message instead of an error. With n = 0
// only the header is printed.
pub fn format_top_words(ranked: &[RankedWord], n: usize) -> String {
    if ranked.is_empty() {
        return "\nNo words found matching the minimum length criteria\n".to_string();
    }

    let mut out = String::from("\nTOP WORDS\n");
    for entry in top_n(ranked, n) {
        let _ = writeln!(out, "{}: {}", entry.word, entry.count);
    }
    out
}

// Formats the full ranking for the word report file
pub fn format_word_report(ranked: &[RankedWord]) -> String {
    let mut out = String::from("TOP WORDS\n");
    for entry in ranked {
        let _ = writeln!(out, "{}: {}", entry.word, entry.count);
    }
    out
}

// Formats the mutation report
//
// Example:
//   PASSWORD MUTATIONS
//
//   Mutations for dog:
//    DOG
//    Dog
//    ...
pub fn format_mutation_report(all: &[WordMutations]) -> String {
    let mut out = String::from("PASSWORD MUTATIONS\n");
    for entry in all {
        let _ = writeln!(out, "\nMutations for {}:", entry.word);
        for mutation in &entry.mutations {
            let _ = writeln!(out, " {}", mutation);
        }
    }
    out
}

pub fn format_json(report: &JsonReport<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize JSON report")
}

// Writes a report to disk, replacing the file if it exists
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
