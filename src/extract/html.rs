// src/extract/html.rs
// =============================================================================
// This module extracts visible text and links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// What counts as "visible text":
// - Every text node in the document, concatenated in document order
// - Except text inside <script>, <style>, <noscript> and <template>
//
// Links are returned RAW (exactly as written in href="..."), in document order.
// Resolving them against the page URL is the job of the resolve module.
//
// Rust concepts:
// - Result<T, E>: Decoding or selector parsing can fail
// - Iterators: descendants() walks the whole DOM tree
// - Pattern matching: Node::Text picks out text nodes
// =============================================================================

use scraper::{Html, Node, Selector};

use crate::error::ProcessingError;

// Elements whose text content never shows up on screen
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

const LINK_SELECTOR: &str = "a[href]";

/// Everything the crawler needs from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Human-readable text with all markup removed
    pub text: String,
    /// Raw href values of <a> elements, in document order
    pub links: Vec<String>,
}

// Decodes and parses a page once, returning both its text and its links
//
// Example:
//   "<p>Hello <b>world</b></p><script>var x;</script><a href='/docs'>Docs</a>"
//   -> text: "Hello worldDocs", links: ["/docs"]
//
// Parameters:
//   content: the raw bytes returned by the fetcher
//
// Returns: ExtractedPage, or ProcessingError if the bytes are not UTF-8
//
// The parsed document is dropped before this function returns. scraper's
// Html type is not Send, so it must never be held across an .await.
pub fn extract_page(content: &[u8]) -> Result<ExtractedPage, ProcessingError> {
    let html = String::from_utf8(content.to_vec())?;
    let document = Html::parse_document(&html);

    Ok(ExtractedPage {
        text: visible_text(&document),
        links: links(&document)?,
    })
}

fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Node::Text(fragment) = node.value() else {
            continue;
        };

        // Skip text that lives inside <script>, <style>, ...
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}

fn links(document: &Html) -> Result<Vec<String>, ProcessingError> {
    let selector = Selector::parse(LINK_SELECTOR).map_err(|e| ProcessingError::Selector {
        selector: LINK_SELECTOR.to_string(),
        reason: e.to_string(),
    })?;

    let links = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        // <a href=""> points nowhere useful, skip it
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect();

    Ok(links)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `let ... else`?
//    - let Node::Text(fragment) = node.value() else { continue; };
//    - "if this node is text, bind it to fragment, otherwise skip it"
//    - It keeps the happy path un-indented
//
// 2. Why String::from_utf8 instead of from_utf8_lossy?
//    - A page that is not UTF-8 is a processing error for that page
//    - The crawler records it and moves on to the next page
//
// 3. What does "a[href]" mean?
//    - A CSS selector: "all <a> tags that have an href attribute"
//    - <a name="top"> (no href) is not selected at all
// -----------------------------------------------------------------------------
