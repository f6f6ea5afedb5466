//! Note-based product scoring.
//!
//! Given the Product-Note association rows for the caller's resolved notes,
//! accumulate one relevance score per product: each matching association
//! contributes its strength, a product associated with several matched
//! notes sums across all of them. Association rows arrive pre-filtered to
//! active products.

use std::collections::HashMap;

use uuid::Uuid;

use rawaj_core::NoteAssociation;

/// Strength used when an association carries no usable weight.
const DEFAULT_STRENGTH: i64 = 1;

/// Sum association strengths per product.
///
/// Strengths of zero or below fall back to 1 so every matching association
/// counts. An empty slice yields an empty map, never an error.
pub fn score_associations(associations: &[NoteAssociation]) -> HashMap<Uuid, i64> {
    let mut scores: HashMap<Uuid, i64> = HashMap::new();
    for assoc in associations {
        let strength = if assoc.strength > 0 {
            assoc.strength as i64
        } else {
            DEFAULT_STRENGTH
        };
        *scores.entry(assoc.product_id).or_insert(0) += strength;
    }
    scores
}
