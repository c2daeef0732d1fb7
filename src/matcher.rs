//! Case-insensitive substring matching over catalog titles.
//!
//! Matching is a stable filter: catalog order is preserved and nothing is
//! re-ranked. The minimum-query-length rule and the top-N cutoff live in the
//! controller, not here.

use crate::catalog::Catalog;

/// Whether `title` contains `query` as a contiguous substring, with both
/// sides lowercased. Not tokenized, not fuzzy.
pub fn is_match(title: &str, query: &str) -> bool {
  title.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of every catalog record whose title matches `query`, in catalog
/// order.
pub fn matching_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
  catalog
    .movies()
    .iter()
    .enumerate()
    .filter(|(_, movie)| is_match(&movie.title, query))
    .map(|(i, _)| i)
    .collect()
}
