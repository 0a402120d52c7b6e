// src/words/mod.rs
// =============================================================================
// This module turns page text into ranked words.
//
// Submodules:
// - tokenize: Splits text into word tokens
// - frequency: Counts tokens and ranks them by how often they appear
//
// Rust concepts:
// - pub use: Re-export items so callers can write `words::tokenize()`
// =============================================================================

mod frequency;
mod tokenize;

pub use frequency::{count, rank, top_n, RankedWord};
pub use tokenize::tokenize;
