// src/words/tokenize.rs
// =============================================================================
// Splits text into word tokens.
//
// A word is a maximal run of letters, digits and underscores. Everything else
// (spaces, punctuation, symbols) separates words. Unicode letters count as
// letters, so "café" and "naïve" stay whole.
//
// Case is preserved: "Word" and "word" are different tokens.
// =============================================================================

// Splits text into words, in the order they appear
//
// Example:
//   "Hello, world! snake_case 42" -> ["Hello", "world", "snake_case", "42"]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_punctuation_and_whitespace() {
        let tokens = tokenize("Hello, world!\n\tHow's it going?");
        assert_eq!(tokens, vec!["Hello", "world", "How", "s", "it", "going"]);
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        let tokens = tokenize("snake_case x86-64 2024");
        assert_eq!(tokens, vec!["snake_case", "x86", "64", "2024"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!! ").is_empty());
    }

    #[test]
    fn test_unicode_letters() {
        let tokens = tokenize("café naïve—Straße");
        assert_eq!(tokens, vec!["café", "naïve", "Straße"]);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(tokenize("Word word WORD"), vec!["Word", "word", "WORD"]);
    }
}
