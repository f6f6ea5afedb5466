//! Embedded demo catalog.
//!
//! A small but complete snapshot used by the API binary and integration
//! tests: the storefront's launch notes, three house products, four
//! inspiration references, and the two custom-blend bottle sizes.

use rust_decimal::Decimal;

use rawaj_core::{GenderProfile, NoteCategory};

use crate::snapshot::{inspiration, CatalogBuilder, MemoryCatalog};

/// Build the demo catalog snapshot.
pub fn demo_catalog() -> MemoryCatalog {
    let mut b = CatalogBuilder::new();

    // Top notes
    let bergamot =
        b.push_note_described("Bergamot", NoteCategory::Top, "Fresh, citrusy, and slightly bitter");
    b.push_note_described("Lemon", NoteCategory::Top, "Bright and zesty citrus");
    b.push_note_described("Orange", NoteCategory::Top, "Sweet and juicy citrus");
    b.push_note_described("Lavender", NoteCategory::Top, "Calming and floral");
    b.push_note_described("Pink Pepper", NoteCategory::Top, "Spicy and vibrant");

    // Middle notes
    let rose = b.push_note_described("Rose", NoteCategory::Middle, "Classic and romantic floral");
    let jasmine =
        b.push_note_described("Jasmine", NoteCategory::Middle, "Intoxicating and sweet floral");
    b.push_note_described("Lily", NoteCategory::Middle, "Fresh and delicate floral");
    b.push_note_described("Cinnamon", NoteCategory::Middle, "Warm and spicy");
    b.push_note_described("Cardamom", NoteCategory::Middle, "Aromatic and exotic spice");

    // Base notes
    let vanilla = b.push_note_described("Vanilla", NoteCategory::Base, "Sweet and comforting");
    let oud = b.push_note_described("Oud", NoteCategory::Base, "Rich, woody, and resinous");
    b.push_note_described("Musk", NoteCategory::Base, "Soft and sensual");
    b.push_note_described("Amber", NoteCategory::Base, "Warm and honeyed");
    let sandalwood =
        b.push_note_described("Sandalwood", NoteCategory::Base, "Creamy and smooth wood");

    // Bottle sizes
    b.push_bottle_size(50, Decimal::new(8999, 2));
    b.push_bottle_size(100, Decimal::new(15999, 2));

    // House products
    let classic = b.push_product(
        "Classic Elegance",
        "classic-elegance",
        "A timeless fragrance with floral and woody notes",
        Decimal::new(12999, 2),
        true,
    );
    let fresh = b.push_product(
        "Modern Fresh",
        "modern-fresh",
        "A contemporary blend of citrus and aquatic notes",
        Decimal::new(11999, 2),
        true,
    );
    let spice = b.push_product(
        "Oriental Spice",
        "oriental-spice",
        "Rich and warm with oud and vanilla",
        Decimal::new(14999, 2),
        true,
    );

    b.link_note(classic, bergamot, 3);
    b.link_note(classic, rose, 5);
    b.link_note(classic, vanilla, 4);
    b.link_note(fresh, bergamot, 5);
    b.link_note(fresh, jasmine, 3);
    b.link_note(fresh, sandalwood, 2);
    b.link_note(spice, rose, 2);
    b.link_note(spice, oud, 5);
    b.link_note(spice, vanilla, 4);

    // Inspiration references
    let mut sauvage = inspiration("Dior Sauvage", GenderProfile::Masculine);
    sauvage.searchable_aliases = strings(&["sauvage", "dior sauvage", "sauvage dior"]);
    sauvage.top_notes = strings(&["Bergamot", "Pepper"]);
    sauvage.middle_notes = strings(&["Lavender", "Pink Pepper", "Patchouli"]);
    sauvage.base_notes = strings(&["Ambroxan", "Cedar", "Labdanum"]);
    sauvage.main_accords = strings(&["fresh", "spicy", "woody", "aromatic"]);
    sauvage.mood_tags = strings(&["confident", "bold", "modern", "energetic"]);
    sauvage.intensity = 4;
    b.push_inspiration(sauvage);

    let mut bleu = inspiration("Bleu de Chanel", GenderProfile::Masculine);
    bleu.searchable_aliases = strings(&["bleu de chanel", "bleu", "chanel bleu"]);
    bleu.top_notes = strings(&["Lemon", "Mint", "Pink Pepper", "Grapefruit"]);
    bleu.middle_notes = strings(&["Ginger", "Jasmine", "Nutmeg"]);
    bleu.base_notes = strings(&["Incense", "Patchouli", "Cedar", "Sandalwood"]);
    bleu.main_accords = strings(&["woody", "fresh", "spicy", "aromatic"]);
    bleu.mood_tags = strings(&["sophisticated", "elegant", "refined", "versatile"]);
    bleu.intensity = 3;
    let bleu_id = b.push_inspiration(bleu);

    let mut chanel5 = inspiration("Chanel No. 5", GenderProfile::Feminine);
    chanel5.searchable_aliases = strings(&["chanel no 5", "chanel number 5", "no 5"]);
    chanel5.top_notes = strings(&["Aldehydes", "Lemon", "Neroli", "Ylang-Ylang"]);
    chanel5.middle_notes = strings(&["Rose", "Jasmine", "Lily of the Valley"]);
    chanel5.base_notes = strings(&["Vanilla", "Amber", "Sandalwood", "Vetiver"]);
    chanel5.main_accords = strings(&["floral", "aldehydic", "powdery", "woody"]);
    chanel5.mood_tags = strings(&["timeless", "elegant", "classic", "sophisticated"]);
    chanel5.intensity = 4;
    let chanel5_id = b.push_inspiration(chanel5);

    let mut orchid = inspiration("Tom Ford Black Orchid", GenderProfile::Mixed);
    orchid.searchable_aliases =
        strings(&["black orchid", "tom ford black orchid", "tf black orchid"]);
    orchid.top_notes = strings(&["Truffle", "Blackcurrant", "Bergamot"]);
    orchid.middle_notes = strings(&["Orchid", "Fruit", "Spices"]);
    orchid.base_notes = strings(&["Patchouli", "Vanilla", "Incense", "Amber"]);
    orchid.main_accords = strings(&["oriental", "floral", "woody", "spicy"]);
    orchid.mood_tags = strings(&["luxurious", "sensual", "mysterious", "bold"]);
    orchid.intensity = 5;
    let orchid_id = b.push_inspiration(orchid);

    b.link_inspiration(classic, chanel5_id, 0.75);
    b.link_inspiration(fresh, bleu_id, 0.70);
    b.link_inspiration(spice, orchid_id, 0.80);

    b.build()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawaj_core::CatalogReader;

    #[tokio::test]
    async fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.list_notes(None).await.unwrap().len(), 15);
        assert_eq!(catalog.list_products().await.unwrap().len(), 3);
        assert_eq!(catalog.list_inspirations().await.unwrap().len(), 4);
        assert_eq!(catalog.list_bottle_sizes().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_demo_catalog_every_inspiration_linked() {
        let catalog = demo_catalog();
        let scan = catalog.list_inspirations().await.unwrap();
        let linked = scan.iter().filter(|i| !i.products.is_empty()).count();
        // Dior Sauvage is alias-searchable but has no house product yet.
        assert_eq!(linked, 3);
    }
}
