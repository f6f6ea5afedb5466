//! Catalog filter predicates.
//!
//! Pure per-product tests for the storefront's browse filters. All
//! criteria are optional and conjunctive; gender, mood, and intensity look
//! through the product's inspiration links.

use rawaj_core::{Product, ProductFilter};

use crate::text_match;

/// Does the product satisfy every set criterion?
pub fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(ref search) = filter.search {
        let term = search.trim().to_lowercase();
        if !term.is_empty() && !text_match::product_matches(product, &term) {
            return false;
        }
    }

    if let Some(min) = filter.min_price {
        if product.price < min {
            return false;
        }
    }
    if let Some(max) = filter.max_price {
        if product.price > max {
            return false;
        }
    }

    // A note id pins a specific association; the category then refines that
    // note. A category alone requires some note in the category.
    if let Some(note_id) = filter.note_id {
        let hit = product.notes.iter().any(|pn| {
            pn.note.id == note_id
                && filter
                    .note_category
                    .is_none_or(|category| pn.note.category == category)
        });
        if !hit {
            return false;
        }
    } else if let Some(category) = filter.note_category {
        if !product.notes.iter().any(|pn| pn.note.category == category) {
            return false;
        }
    }

    if let Some(gender) = filter.gender {
        let hit = product
            .inspirations
            .iter()
            .any(|link| link.inspiration.gender_profile == gender);
        if !hit {
            return false;
        }
    }

    // Mood and intensity must hold on a single inspiration together.
    if filter.mood.is_some() || filter.intensity.is_some() {
        let mood_lower = filter.mood.as_ref().map(|m| m.to_lowercase());
        let hit = product.inspirations.iter().any(|link| {
            let mood_ok = mood_lower.as_ref().is_none_or(|mood| {
                link.inspiration
                    .mood_tags
                    .iter()
                    .any(|tag| tag.to_lowercase() == *mood)
            });
            let intensity_ok = filter
                .intensity
                .is_none_or(|level| link.inspiration.intensity == level);
            mood_ok && intensity_ok
        });
        if !hit {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rawaj_core::{
        GenderProfile, Inspiration, Note, NoteCategory, ProductInspirationRef, ProductNote,
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn note(name: &str, category: NoteCategory) -> Note {
        Note {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            description: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn inspiration(gender: GenderProfile, moods: &[&str], intensity: i32) -> Inspiration {
        Inspiration {
            id: Uuid::new_v4(),
            display_name: "Ref".to_string(),
            searchable_aliases: vec![],
            gender_profile: gender,
            top_notes: vec![],
            middle_notes: vec![],
            base_notes: vec![],
            main_accords: vec![],
            mood_tags: moods.iter().map(|m| m.to_string()).collect(),
            intensity,
        }
    }

    fn sample_product() -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Oriental Spice".to_string(),
            slug: "oriental-spice".to_string(),
            brand: Some("Rawaj".to_string()),
            description: "Rich and warm with oud and vanilla".to_string(),
            price: Decimal::new(14999, 2),
            image_url: None,
            stock_qty: 10,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            notes: vec![ProductNote {
                note: note("Oud", NoteCategory::Base),
                strength: 5,
            }],
            inspirations: vec![ProductInspirationRef {
                inspiration: inspiration(GenderProfile::Mixed, &["bold", "luxurious"], 5),
                similarity_score: 0.8,
            }],
        }
    }

    #[test]
    fn test_empty_filter_matches() {
        assert!(matches(&sample_product(), &ProductFilter::default()));
    }

    #[test]
    fn test_search_filters_on_name_and_description() {
        let product = sample_product();
        assert!(matches(
            &product,
            &ProductFilter::default().with_search("vanilla")
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default().with_search("citrus")
        ));
    }

    #[test]
    fn test_price_range_bounds_inclusive() {
        let product = sample_product();
        let in_range = ProductFilter::default()
            .with_price_range(Some(Decimal::new(14999, 2)), Some(Decimal::new(14999, 2)));
        assert!(matches(&product, &in_range));

        let below = ProductFilter::default().with_price_range(Some(Decimal::new(20000, 2)), None);
        assert!(!matches(&product, &below));
    }

    #[test]
    fn test_note_id_with_category_refinement() {
        let product = sample_product();
        let oud_id = product.notes[0].note.id;

        assert!(matches(&product, &ProductFilter::default().with_note_id(oud_id)));
        assert!(matches(
            &product,
            &ProductFilter::default()
                .with_note_id(oud_id)
                .with_note_category(NoteCategory::Base)
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default()
                .with_note_id(oud_id)
                .with_note_category(NoteCategory::Top)
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default().with_note_id(Uuid::new_v4())
        ));
    }

    #[test]
    fn test_category_alone_requires_some_note_in_category() {
        let product = sample_product();
        assert!(matches(
            &product,
            &ProductFilter::default().with_note_category(NoteCategory::Base)
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default().with_note_category(NoteCategory::Middle)
        ));
    }

    #[test]
    fn test_gender_looks_through_inspirations() {
        let product = sample_product();
        assert!(matches(
            &product,
            &ProductFilter::default().with_gender(GenderProfile::Mixed)
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default().with_gender(GenderProfile::Feminine)
        ));
    }

    #[test]
    fn test_mood_and_intensity_must_hold_on_one_inspiration() {
        let mut product = sample_product();
        // Second inspiration has the mood but not the intensity.
        product.inspirations.push(ProductInspirationRef {
            inspiration: inspiration(GenderProfile::Masculine, &["fresh"], 2),
            similarity_score: 0.4,
        });

        assert!(matches(
            &product,
            &ProductFilter::default().with_mood("BOLD").with_intensity(5)
        ));
        assert!(!matches(
            &product,
            &ProductFilter::default().with_mood("fresh").with_intensity(5)
        ));
    }
}
