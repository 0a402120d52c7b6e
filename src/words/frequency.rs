// src/words/frequency.rs
// =============================================================================
// Counts word occurrences and ranks words by frequency.
//
// Ranking must be deterministic:
// - Higher counts come first
// - Equal counts keep the order in which the words were FIRST seen
//   (not alphabetical order)
//
// We get the second rule for free by storing counts in an IndexMap (a map
// that remembers insertion order) and using a stable sort.
//
// Rust concepts:
// - IndexMap: Like HashMap, but iteration follows insertion order
// - Stable sort: sort_by() never reorders elements that compare equal
// - Slices: top_n() returns a borrowed view instead of copying
// =============================================================================

use indexmap::IndexMap;
use serde::Serialize;

/// Occurrence counts for every word that passed the length filter.
#[derive(Debug, Clone, Default)]
pub struct WordCounts {
    counts: IndexMap<String, usize>,
    min_length: usize,
}

/// One line of the ranking: a word and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

impl WordCounts {
    /// Creates an empty counter that ignores words shorter than `min_length`
    /// characters. A `min_length` of 0 counts everything.
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            counts: IndexMap::new(),
            min_length,
        }
    }

    /// Adds tokens to the counter. Returns how many of them were counted.
    pub fn add_tokens<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counted = 0;
        for token in tokens {
            let token = token.as_ref();
            // Length is measured in characters, not bytes ("café" is 4 long)
            if token.chars().count() < self.min_length {
                continue;
            }
            *self.counts.entry(token.to_string()).or_insert(0) += 1;
            counted += 1;
        }
        counted
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Words with their counts, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

// Counts tokens that are at least `min_length` characters long
//
// Parameters:
//   tokens: the words to count (in the order they were found)
//   min_length: shortest word to keep (0 = keep everything)
//
// Returns: a WordCounts with one entry per distinct word
pub fn count<I, S>(tokens: I, min_length: usize) -> WordCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = WordCounts::with_min_length(min_length);
    counts.add_tokens(tokens);
    counts
}

// Ranks words by count, highest first
//
// Ties keep first-seen order because sort_by is stable and the IndexMap
// iterates in insertion order.
pub fn rank(counts: &WordCounts) -> Vec<RankedWord> {
    let mut ranked: Vec<RankedWord> = counts
        .iter()
        .map(|(word, count)| RankedWord {
            word: word.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

// Returns the first `n` ranked words (or all of them if there are fewer)
//
// An empty ranking gives an empty slice; callers decide how to present
// "no words found".
pub fn top_n(ranked: &[RankedWord], n: usize) -> &[RankedWord] {
    &ranked[..n.min(ranked.len())]
}
