//! Ranking and merge of scored products.
//!
//! Takes the hydrated products for the merged score map and produces the
//! display list: score descending, ties broken by product name ascending
//! then id ascending so the order is stable for a given snapshot.

use std::collections::HashMap;

use uuid::Uuid;

use rawaj_core::{Product, RankedPerfume};

/// Brand label used when a product carries none.
const HOUSE_BRAND: &str = "Rawaj";

/// Build the ranked recommendation list. Products absent from the score
/// map score zero (hydration only ever fetches scored ids, so this is a
/// guard, not an expected path).
pub fn rank_products(products: Vec<Product>, scores: &HashMap<Uuid, i64>) -> Vec<RankedPerfume> {
    let mut ranked: Vec<RankedPerfume> = products
        .into_iter()
        .map(|product| RankedPerfume {
            id: product.id,
            name: product.name,
            brand: product.brand.unwrap_or_else(|| HOUSE_BRAND.to_string()),
            description: product.description,
            image: product.image_url,
            match_score: scores.get(&product.id).copied().unwrap_or(0),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn product(name: &str, brand: Option<&str>) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            brand: brand.map(|b| b.to_string()),
            description: format!("{name} description"),
            price: Decimal::ZERO,
            image_url: None,
            stock_qty: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            notes: vec![],
            inspirations: vec![],
        }
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let low = product("Low", None);
        let high = product("High", None);
        let scores = HashMap::from([(low.id, 3i64), (high.id, 9i64)]);

        let ranked = rank_products(vec![low.clone(), high.clone()], &scores);
        assert_eq!(ranked[0].id, high.id);
        assert_eq!(ranked[0].match_score, 9);
        assert_eq!(ranked[1].match_score, 3);
    }

    #[test]
    fn test_rank_ties_break_by_name_ascending() {
        let zeta = product("Zeta", None);
        let alpha = product("Alpha", None);
        let scores = HashMap::from([(zeta.id, 5i64), (alpha.id, 5i64)]);

        let ranked = rank_products(vec![zeta.clone(), alpha.clone()], &scores);
        assert_eq!(ranked[0].id, alpha.id);
        assert_eq!(ranked[1].id, zeta.id);
    }

    #[test]
    fn test_rank_defaults_missing_brand_to_house() {
        let unbranded = product("Plain", None);
        let branded = product("Branded", Some("Maison"));
        let scores = HashMap::from([(unbranded.id, 1i64), (branded.id, 2i64)]);

        let ranked = rank_products(vec![unbranded, branded], &scores);
        assert_eq!(ranked[0].brand, "Maison");
        assert_eq!(ranked[1].brand, "Rawaj");
    }

    #[test]
    fn test_rank_is_deterministic_for_identical_rows() {
        let a = product("Same", None);
        let b = product("Same", None);
        let scores = HashMap::from([(a.id, 5i64), (b.id, 5i64)]);

        let first = rank_products(vec![a.clone(), b.clone()], &scores);
        let second = rank_products(vec![b, a], &scores);
        let first_ids: Vec<Uuid> = first.iter().map(|p| p.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, second_ids);
    }
}
