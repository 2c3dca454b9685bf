//! Discard-selector pruning.
//!
//! Removes navigation, footers, ads, scripts, sidebars, popups and hidden
//! elements from a detached content tree before it is mapped.

use dom_query::Selection;

use crate::dom;
use crate::error::Result;

/// Remove every element matching any of `selectors` from `tree`.
///
/// Selectors are compiled up front so a malformed entry fails the whole
/// pass instead of silently matching nothing. Returns the number of
/// elements removed; a selector with no matches is a no-op.
pub fn prune_discarded<S: AsRef<str>>(tree: &Selection, selectors: &[S]) -> Result<usize> {
    let matchers = selectors
        .iter()
        .map(|s| dom::compile_selector(s.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let mut removed = 0;
    for matcher in &matchers {
        let matches = tree.select_matcher(matcher);
        if matches.exists() {
            removed += matches.length();
            matches.remove();
        }
    }

    Ok(removed)
}
