// src/mutate/mod.rs
// =============================================================================
// This module builds password-guess variants from a word.
//
// Submodules:
// - generator: The mutation rules (case, years, symbols, numbers, seasons)
// =============================================================================

mod generator;

pub use generator::MutationGenerator;
