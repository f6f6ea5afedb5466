//! Free-text matching over products and inspirations.
//!
//! Plain case-insensitive substring tests: the query term against product
//! name/description, and against inspiration display names and aliases.
//! Callers pass the term already trimmed and lower-cased.

use std::collections::HashSet;

use rawaj_core::{Inspiration, Product};

/// Cap on direct product matches returned by a text search.
pub const DIRECT_MATCH_LIMIT: usize = 10;

/// Cap on inspiration-linked products folded into a text search result.
pub const LINKED_MATCH_LIMIT: usize = 10;

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Does the product's name or description contain the term?
pub fn product_matches(product: &Product, term_lower: &str) -> bool {
    contains_ci(&product.name, term_lower) || contains_ci(&product.description, term_lower)
}

/// Does the inspiration's display name or any alias contain the term?
pub fn inspiration_matches(inspiration: &Inspiration, term_lower: &str) -> bool {
    contains_ci(&inspiration.display_name, term_lower)
        || inspiration
            .searchable_aliases
            .iter()
            .any(|alias| contains_ci(alias, term_lower))
}

/// Union direct and inspiration-linked matches, de-duplicated by product
/// id. Direct matches come first and win duplicates.
pub fn merge_product_lists(direct: Vec<Product>, linked: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<uuid::Uuid> = HashSet::new();
    let mut merged = Vec::with_capacity(direct.len() + linked.len());
    for product in direct.into_iter().chain(linked) {
        if seen.insert(product.id) {
            merged.push(product);
        }
    }
    merged
}
