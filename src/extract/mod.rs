// src/extract/mod.rs
// =============================================================================
// This module pulls information out of downloaded pages.
//
// Submodules:
// - html: Visible text and raw <a href> values from HTML
// - resolve: Turns (possibly relative) hrefs into absolute URLs
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;
mod resolve;

pub use html::{extract_page, ExtractedPage};
pub use resolve::resolve;
