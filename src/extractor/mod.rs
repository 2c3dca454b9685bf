//! Content extraction.
//!
//! Locates the content root, deep-clones it into a detached document and
//! prunes non-content elements from the clone. The caller's document is
//! never mutated.
//!
//! # Usage
//!
//! ```rust
//! use aeo_analyzer::{dom, extractor, Options};
//!
//! let page = dom::parse("<body><nav>Home</nav><h2>Title</h2></body>");
//! let cleaned = extractor::extract_main_content(&page, &Options::default())?;
//!
//! assert!(!cleaned.select("nav").exists());
//! assert!(page.select("nav").exists());
//! # Ok::<(), aeo_analyzer::Error>(())
//! ```

pub mod pruning;

pub use pruning::prune_discarded;

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::options::Options;

/// Clone the content root of `document` and strip discarded elements.
///
/// The root is found with `Options::root_selector`; the returned document
/// holds a copy of it under its own `<body>`, see [`content_root`].
pub fn extract_main_content(document: &Document, options: &Options) -> Result<Document> {
    let matcher = dom::compile_selector(&options.root_selector)?;
    let root = document.select_matcher(&matcher).first();
    if !root.exists() {
        return Err(Error::MissingRoot(options.root_selector.clone()));
    }

    let cleaned = dom::clone_element(&root);
    let removed = prune_discarded(&content_root(&cleaned), &options.discard_selectors)?;
    tracing::debug!(removed, root = %options.root_selector, "pruned non-content elements");

    Ok(cleaned)
}

/// The element holding the cloned content inside an extracted document.
#[must_use]
pub fn content_root(cleaned: &Document) -> Selection<'_> {
    cleaned.select("body")
}
