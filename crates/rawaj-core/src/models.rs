//! Core data models for the Rawaj match engine.
//!
//! These types are shared across all rawaj crates and represent the catalog
//! entities the engine consumes plus the request/response types it produces.
//! Serialized field names preserve the storefront's observed JSON contracts
//! (camelCase keys, SCREAMING_SNAKE_CASE enum values).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

// =============================================================================
// ENUMS
// =============================================================================

/// Category of a scent note, by how quickly it fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NoteCategory {
    /// First impression, fades fastest (citrus, herbs)
    Top,
    /// Heart of the fragrance (florals, spices)
    Middle,
    /// Longest lasting foundation (woods, resins)
    Base,
}

impl std::fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "TOP"),
            Self::Middle => write!(f, "MIDDLE"),
            Self::Base => write!(f, "BASE"),
        }
    }
}

impl std::str::FromStr for NoteCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TOP" => Ok(Self::Top),
            "MIDDLE" => Ok(Self::Middle),
            "BASE" => Ok(Self::Base),
            other => Err(Error::validation(format!(
                "invalid note category: {other}"
            ))),
        }
    }
}

/// Gender profile of an inspiration reference fragrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenderProfile {
    Masculine,
    Feminine,
    Mixed,
}

impl std::fmt::Display for GenderProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Masculine => write!(f, "MASCULINE"),
            Self::Feminine => write!(f, "FEMININE"),
            Self::Mixed => write!(f, "MIXED"),
        }
    }
}

impl std::str::FromStr for GenderProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASCULINE" => Ok(Self::Masculine),
            "FEMININE" => Ok(Self::Feminine),
            "MIXED" => Ok(Self::Mixed),
            other => Err(Error::validation(format!(
                "invalid gender profile: {other}"
            ))),
        }
    }
}

// =============================================================================
// CATALOG ENTITIES
// =============================================================================

/// A single scent ingredient/descriptor (e.g. Bergamot).
///
/// Names are unique and looked up case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub name: String,
    pub category: NoteCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A note's weight within a product's formulation (hydrated view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNote {
    pub note: Note,
    /// Integer weight, observed range 1-5, higher = more prominent.
    pub strength: i32,
}

/// A product's link to an inspiration (hydrated view).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInspirationRef {
    pub inspiration: Inspiration,
    pub similarity_score: f64,
}

/// A purchasable catalog product with its note and inspiration associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub description: String,
    /// Non-negative retail price.
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub stock_qty: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Note associations; order is irrelevant, pairs unique per note.
    #[serde(default)]
    pub notes: Vec<ProductNote>,
    /// Inspiration links, similarity descending; pairs unique per inspiration.
    #[serde(default)]
    pub inspirations: Vec<ProductInspirationRef>,
}

/// A well-known reference fragrance, used only for matching and marketing
/// language, never sold directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspiration {
    pub id: Uuid,
    pub display_name: String,
    /// Case-insensitive search aliases (e.g. "sauvage", "dior sauvage").
    pub searchable_aliases: Vec<String>,
    pub gender_profile: GenderProfile,
    /// Note-name lists stored as free text, not foreign keys to Note.
    pub top_notes: Vec<String>,
    pub middle_notes: Vec<String>,
    pub base_notes: Vec<String>,
    pub main_accords: Vec<String>,
    pub mood_tags: Vec<String>,
    /// Intensity level, 1-5.
    pub intensity: i32,
}

impl Inspiration {
    /// All declared note names, top+middle+base flattened.
    pub fn all_notes(&self) -> impl Iterator<Item = &str> {
        self.top_notes
            .iter()
            .chain(self.middle_notes.iter())
            .chain(self.base_notes.iter())
            .map(String::as_str)
    }
}

/// Raw Product-Note association row, used by the note scorer.
/// Only rows whose owning product is active are ever surfaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteAssociation {
    pub product_id: Uuid,
    pub note_id: Uuid,
    pub strength: i32,
}

/// A product linked to an inspiration, with the similarity that justifies
/// the link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedProduct {
    pub product: Product,
    pub similarity_score: f64,
}

/// An inspiration with its active linked products, similarity descending.
#[derive(Debug, Clone)]
pub struct InspirationWithProducts {
    pub inspiration: Inspiration,
    pub products: Vec<LinkedProduct>,
}

/// A bottle size offered for custom blends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottleSize {
    pub id: Uuid,
    pub size_ml: i32,
    pub base_price: Decimal,
}

// =============================================================================
// BLEND SELECTION
// =============================================================================

/// A note picked into a custom blend, with its share of the formulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendNote {
    pub note_id: Uuid,
    /// Share of the blend, 0-100.
    pub percentage: f64,
}

/// A customer's custom-blend selection.
///
/// Explicit request-scoped value object: serializable, owned by the caller,
/// never process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlendSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub bottle_size_id: Uuid,
    pub gender_profile: GenderProfile,
    #[serde(default)]
    pub top_notes: Vec<BlendNote>,
    #[serde(default)]
    pub middle_notes: Vec<BlendNote>,
    #[serde(default)]
    pub base_notes: Vec<BlendNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspiration_product_id: Option<Uuid>,
}

impl BlendSelection {
    /// Validate the selection, returning every violation found.
    pub fn validate(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let total = self.top_notes.len() + self.middle_notes.len() + self.base_notes.len();
        if total == 0 {
            violations.push("at least one note must be selected".to_string());
        }

        for (tier, notes) in [
            ("top", &self.top_notes),
            ("middle", &self.middle_notes),
            ("base", &self.base_notes),
        ] {
            for blend_note in notes.iter() {
                if !(0.0..=100.0).contains(&blend_note.percentage) {
                    violations.push(format!(
                        "{tier} note {} percentage must be between 0 and 100",
                        blend_note.note_id
                    ));
                }
            }
        }

        violations
    }
}

// =============================================================================
// ENGINE REQUEST/RESPONSE TYPES
// =============================================================================

/// Request for note-based product recommendations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMatchRequest {
    /// Note names as selected by the caller; case-insensitive, free text.
    /// A missing key reads as an empty list so validation can report it.
    #[serde(default)]
    pub notes: Vec<String>,
    /// Accepted for the wire contract; the scorer does not consume it
    /// (the catalog filter path does).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender_profile: Option<GenderProfile>,
}

/// A ranked recommendation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPerfume {
    pub id: Uuid,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub image: Option<String>,
    /// Summed note strengths plus any inspiration boost.
    pub match_score: i64,
}

/// A matching inspiration surfaced by free-text search, with the product
/// links that justify it (similarity descending).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspirationMatch {
    pub id: Uuid,
    pub display_name: String,
    pub matched_products: Vec<LinkedProduct>,
}

/// Combined free-text search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Direct matches first, then inspiration-linked products,
    /// de-duplicated by product id.
    pub products: Vec<Product>,
    pub inspirations: Vec<InspirationMatch>,
    pub has_inspiration_match: bool,
}

/// Catalog filter criteria. All fields optional; an empty filter matches
/// every active product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub gender: Option<GenderProfile>,
    pub note_category: Option<NoteCategory>,
    pub note_id: Option<Uuid>,
    pub mood: Option<String>,
    pub intensity: Option<i32>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn with_gender(mut self, gender: GenderProfile) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_note_category(mut self, category: NoteCategory) -> Self {
        self.note_category = Some(category);
        self
    }

    pub fn with_note_id(mut self, note_id: Uuid) -> Self {
        self.note_id = Some(note_id);
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_intensity(mut self, intensity: i32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_price_range(mut self, min: Option<Decimal>, max: Option<Decimal>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_category_wire_format() {
        let json = serde_json::to_string(&NoteCategory::Middle).unwrap();
        assert_eq!(json, "\"MIDDLE\"");
        let parsed: NoteCategory = serde_json::from_str("\"BASE\"").unwrap();
        assert_eq!(parsed, NoteCategory::Base);
    }

    #[test]
    fn test_note_category_from_str_rejects_unknown() {
        let err = "top".parse::<NoteCategory>().unwrap_err();
        assert!(err.to_string().contains("invalid note category"));
    }

    #[test]
    fn test_gender_profile_round_trip() {
        for profile in [
            GenderProfile::Masculine,
            GenderProfile::Feminine,
            GenderProfile::Mixed,
        ] {
            let parsed: GenderProfile = profile.to_string().parse().unwrap();
            assert_eq!(parsed, profile);
        }
    }

    #[test]
    fn test_inspiration_all_notes_flattens_in_tier_order() {
        let insp = Inspiration {
            id: Uuid::new_v4(),
            display_name: "Dior Sauvage".to_string(),
            searchable_aliases: vec!["sauvage".to_string()],
            gender_profile: GenderProfile::Masculine,
            top_notes: vec!["Bergamot".to_string(), "Pepper".to_string()],
            middle_notes: vec!["Lavender".to_string()],
            base_notes: vec!["Ambroxan".to_string()],
            main_accords: vec![],
            mood_tags: vec![],
            intensity: 4,
        };

        let all: Vec<&str> = insp.all_notes().collect();
        assert_eq!(all, vec!["Bergamot", "Pepper", "Lavender", "Ambroxan"]);
    }

    #[test]
    fn test_blend_selection_validate_ok() {
        let selection = BlendSelection {
            name: Some("Evening".to_string()),
            bottle_size_id: Uuid::new_v4(),
            gender_profile: GenderProfile::Mixed,
            top_notes: vec![BlendNote {
                note_id: Uuid::new_v4(),
                percentage: 40.0,
            }],
            middle_notes: vec![BlendNote {
                note_id: Uuid::new_v4(),
                percentage: 60.0,
            }],
            base_notes: vec![],
            inspiration_product_id: None,
        };
        assert!(selection.validate().is_empty());
    }

    #[test]
    fn test_blend_selection_validate_empty_and_out_of_range() {
        let empty = BlendSelection {
            name: None,
            bottle_size_id: Uuid::new_v4(),
            gender_profile: GenderProfile::Feminine,
            top_notes: vec![],
            middle_notes: vec![],
            base_notes: vec![],
            inspiration_product_id: None,
        };
        let violations = empty.validate();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("at least one note"));

        let out_of_range = BlendSelection {
            base_notes: vec![BlendNote {
                note_id: Uuid::new_v4(),
                percentage: 120.0,
            }],
            ..empty
        };
        let violations = out_of_range.validate();
        assert!(violations.iter().any(|v| v.contains("between 0 and 100")));
    }

    #[test]
    fn test_note_match_request_wire_keys() {
        let json = r#"{"notes": ["Rose", "Vanilla"], "genderProfile": "FEMININE"}"#;
        let req: NoteMatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.notes.len(), 2);
        assert_eq!(req.gender_profile, Some(GenderProfile::Feminine));
    }

    #[test]
    fn test_note_match_request_missing_notes_reads_as_empty() {
        let req: NoteMatchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.notes.is_empty());
        assert!(req.gender_profile.is_none());
    }

    #[test]
    fn test_ranked_perfume_serializes_match_score_camel_case() {
        let perfume = RankedPerfume {
            id: Uuid::nil(),
            name: "Classic Elegance".to_string(),
            brand: "Rawaj".to_string(),
            description: "A timeless fragrance".to_string(),
            image: None,
            match_score: 9,
        };
        let value = serde_json::to_value(&perfume).unwrap();
        assert_eq!(value["matchScore"], 9);
    }

    #[test]
    fn test_product_filter_builder() {
        let filter = ProductFilter::default()
            .with_gender(GenderProfile::Masculine)
            .with_mood("bold")
            .with_intensity(4);
        assert_eq!(filter.gender, Some(GenderProfile::Masculine));
        assert_eq!(filter.mood.as_deref(), Some("bold"));
        assert_eq!(filter.intensity, Some(4));
        assert!(filter.note_id.is_none());
    }
}
