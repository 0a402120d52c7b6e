// src/extract/resolve.rs
// =============================================================================
// Resolves a (possibly relative) href against the URL of the page it was on.
//
// The resolved string is what the crawler uses as the page's identity, so
// two links are "the same page" only if they resolve to exactly the same
// string. We deliberately do no further normalization:
//   http://x/a and http://x/a/ are different pages
//   http://x/a?b=1&c=2 and http://x/a?c=2&b=1 are different pages
// =============================================================================

use url::Url;

// Resolves a link (possibly relative) to an absolute URL
//
// Parameters:
//   base: the URL of the page the link was found on
//   reference: the raw href value
//
// Returns: the absolute URL as a string, or a parse error if either the base
// or the combination is not a valid URL
//
// Examples:
//   base = "https://example.com/page"
//   reference = "/docs" -> "https://example.com/docs"
//   reference = "../other" -> "https://example.com/other"
//   reference = "https://other.com" -> "https://other.com/"
pub fn resolve(base: &str, reference: &str) -> Result<String, url::ParseError> {
    let base = Url::parse(base)?;
    Ok(base.join(reference)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_link() {
        let result = resolve("https://example.com/page", "https://other.com");
        assert_eq!(result.unwrap(), "https://other.com/");
    }

    #[test]
    fn test_resolve_relative_link() {
        let result = resolve("https://example.com/page", "/docs");
        assert_eq!(result.unwrap(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_parent_relative_link() {
        let result = resolve("https://example.com/a/b/page", "../other");
        assert_eq!(result.unwrap(), "https://example.com/a/other");
    }

    #[test]
    fn test_fragment_and_trailing_slash_are_not_normalized() {
        let with_fragment = resolve("http://x/a", "#top").unwrap();
        assert_eq!(with_fragment, "http://x/a#top");
        assert_ne!(resolve("http://x/", "a").unwrap(), resolve("http://x/", "a/").unwrap());
    }

    #[test]
    fn test_invalid_base() {
        assert!(resolve("not a url", "/docs").is_err());
    }
}
