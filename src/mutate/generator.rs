// src/mutate/generator.rs
// =============================================================================
// Generates common password mutations of a word.
//
// Rules (every rule always runs):
// 1. Case variants: Capitalized, lowercase, UPPERCASE
// 2. Years: word+year, word+year+symbol, word+symbol+year
// 3. Symbols and numbers: word+symbol, word+symbol+number,
//    word+number+symbol, word+number
// 4. Seasons: every ordering of (season, year, word)
// 5. Fixed suffixes: 01, 123, 1!, 2!, 3!
//
// The "current year" is passed in when the generator is created, so the
// output never depends on the wall clock and tests can pin it.
//
// Rust concepts:
// - BTreeSet: A sorted set; inserting a duplicate does nothing, and
//   iteration is already in lexicographic order
// - const arrays: Fixed rule tables known at compile time
// =============================================================================

use std::collections::BTreeSet;

/// How many years back from the current one we try (current year included)
const YEARS_BACK: i32 = 5;

const SYMBOLS: [&str; 8] = ["!", "@", "#", "$", "%", "^", "&", "*"];

const NUMBERS: [&str; 11] = ["01", "123", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const SEASONS: [&str; 5] = ["Summer", "Winter", "Spring", "Autumn", "Fall"];

const SUFFIXES: [&str; 5] = ["01", "123", "1!", "2!", "3!"];

/// Produces password-guess variants for words, relative to a fixed year.
#[derive(Debug, Clone)]
pub struct MutationGenerator {
    years: Vec<String>,
}

impl MutationGenerator {
    /// `current_year` is the newest year used; the four before it are used too.
    pub fn new(current_year: i32) -> Self {
        let years = (0..YEARS_BACK)
            .map(|offset| (current_year - offset).to_string())
            .collect();
        Self { years }
    }

    /// The years this generator appends, newest first
    pub fn years(&self) -> &[String] {
        &self.years
    }

    // Generates every mutation of `word`
    //
    // Returns: the mutations sorted lexicographically, without duplicates
    //
    // Example (year 2024):
    //   "dog" -> ["2020Autumndog", ..., "DOG", "Dog", ..., "dog2024!", ...]
    pub fn mutate(&self, word: &str) -> Vec<String> {
        let mut mutations = BTreeSet::new();

        // 1. Case variants
        mutations.insert(capitalize(word));
        mutations.insert(word.to_lowercase());
        mutations.insert(word.to_uppercase());

        // 2. Years, optionally with a symbol before or after
        for year in &self.years {
            mutations.insert(format!("{word}{year}"));
            for symbol in SYMBOLS {
                mutations.insert(format!("{word}{year}{symbol}"));
                mutations.insert(format!("{word}{symbol}{year}"));
            }
        }

        // 3. Symbols and numbers
        for symbol in SYMBOLS {
            mutations.insert(format!("{word}{symbol}"));
            for number in NUMBERS {
                mutations.insert(format!("{word}{symbol}{number}"));
                mutations.insert(format!("{word}{number}{symbol}"));
                mutations.insert(format!("{word}{number}"));
            }
        }

        // 4. Season + year + word in all six orders
        for season in SEASONS {
            for year in &self.years {
                mutations.insert(format!("{season}{word}{year}"));
                mutations.insert(format!("{word}{season}{year}"));
                mutations.insert(format!("{season}{year}{word}"));
                mutations.insert(format!("{year}{season}{word}"));
                mutations.insert(format!("{word}{year}{season}"));
                mutations.insert(format!("{year}{word}{season}"));
            }
        }

        // 5. Fixed suffixes
        for suffix in SUFFIXES {
            mutations.insert(format!("{word}{suffix}"));
        }

        mutations.into_iter().collect()
    }
}

// Uppercases the first character and lowercases the rest ("hELLO" -> "Hello")
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
