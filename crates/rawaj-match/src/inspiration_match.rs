//! Inspiration note-list matching and product boosting.
//!
//! Inspiration note lists are free text, not foreign keys, so matching is
//! substring containment: after lower-casing both sides, the shorter string
//! must be contained in the longer one. "pepper" therefore matches
//! "Pink Pepper", and so does the reverse pairing.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use rawaj_core::InspirationWithProducts;

/// Fixed score addition for products linked to a matching inspiration.
/// Applied once per product no matter how many inspirations matched.
pub const INSPIRATION_BOOST: i64 = 5;

/// Containment test: the shorter of the two lower-cased strings must be a
/// substring of the longer.
pub fn notes_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a.len() <= b.len() {
        b.contains(&a)
    } else {
        a.contains(&b)
    }
}

/// Does any (input note, declared note) pair overlap?
fn matches_input(inspiration_notes: impl Iterator<Item = impl AsRef<str>>, input: &[String]) -> bool {
    for declared in inspiration_notes {
        if input.iter().any(|note| notes_overlap(note, declared.as_ref())) {
            return true;
        }
    }
    false
}

/// Filter the inspiration scan down to entries whose flattened note lists
/// overlap the input. Blank input note names are ignored.
pub fn matching_inspirations<'a>(
    input_notes: &[String],
    scan: &'a [InspirationWithProducts],
) -> Vec<&'a InspirationWithProducts> {
    let input: Vec<String> = input_notes
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    if input.is_empty() {
        return Vec::new();
    }
    scan.iter()
        .filter(|entry| matches_input(entry.inspiration.all_notes(), &input))
        .collect()
}

/// Ids of active products linked to any of the matching inspirations.
pub fn boosted_product_ids(matching: &[&InspirationWithProducts]) -> HashSet<Uuid> {
    matching
        .iter()
        .flat_map(|entry| entry.products.iter().map(|link| link.product.id))
        .collect()
}

/// Merge the boost into the note-score map, +5 per boosted product.
pub fn apply_boost(scores: &mut HashMap<Uuid, i64>, boosted: &HashSet<Uuid>) {
    for product_id in boosted {
        *scores.entry(*product_id).or_insert(0) += INSPIRATION_BOOST;
    }
}
