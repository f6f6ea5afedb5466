//! In-memory catalog snapshot implementing `CatalogReader`.
//!
//! The engine computes over a point-in-time snapshot; this store holds one
//! immutably and serves every lookup from precomputed indexes. Shared
//! freely across tasks — all state is read-only after construction.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use rawaj_core::{
    BottleSize, CatalogReader, GenderProfile, Inspiration, InspirationWithProducts, LinkedProduct,
    Note, NoteAssociation, NoteCategory, Product, ProductInspirationRef, ProductNote, Result,
};

/// Flat association rows fed to the builder.
#[derive(Debug, Clone)]
struct ProductNoteRow {
    product_id: Uuid,
    note_id: Uuid,
    strength: i32,
}

#[derive(Debug, Clone)]
struct ProductInspirationRow {
    product_id: Uuid,
    inspiration_id: Uuid,
    similarity_score: f64,
}

/// Assembles a `MemoryCatalog` from flat entity and association rows.
///
/// Association pairs are unique per (product, note) and per
/// (product, inspiration); pushing a duplicate pair replaces the earlier row.
#[derive(Default)]
pub struct CatalogBuilder {
    notes: Vec<Note>,
    products: Vec<Product>,
    inspirations: Vec<Inspiration>,
    bottle_sizes: Vec<BottleSize>,
    product_notes: Vec<ProductNoteRow>,
    product_inspirations: Vec<ProductInspirationRow>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note; returns its generated id.
    pub fn push_note(&mut self, name: &str, category: NoteCategory) -> Uuid {
        let id = Uuid::new_v4();
        self.notes.push(Note {
            id,
            name: name.to_string(),
            category,
            description: None,
            image_url: None,
            created_at: Utc::now(),
        });
        id
    }

    /// Add a note with a description.
    pub fn push_note_described(
        &mut self,
        name: &str,
        category: NoteCategory,
        description: &str,
    ) -> Uuid {
        let id = self.push_note(name, category);
        if let Some(note) = self.notes.last_mut() {
            note.description = Some(description.to_string());
        }
        id
    }

    /// Add a product; returns its generated id. Associations are attached
    /// separately via [`link_note`](Self::link_note) and
    /// [`link_inspiration`](Self::link_inspiration).
    pub fn push_product(
        &mut self,
        name: &str,
        slug: &str,
        description: &str,
        price: Decimal,
        is_active: bool,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let now = Utc::now();
        self.products.push(Product {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            brand: Some("Rawaj".to_string()),
            description: description.to_string(),
            price,
            image_url: None,
            stock_qty: 0,
            is_active,
            created_at: now,
            updated_at: now,
            notes: Vec::new(),
            inspirations: Vec::new(),
        });
        id
    }

    /// Add a fully specified inspiration; returns its id.
    pub fn push_inspiration(&mut self, inspiration: Inspiration) -> Uuid {
        let id = inspiration.id;
        self.inspirations.push(inspiration);
        id
    }

    /// Add a bottle size; returns its generated id.
    pub fn push_bottle_size(&mut self, size_ml: i32, base_price: Decimal) -> Uuid {
        let id = Uuid::new_v4();
        self.bottle_sizes.push(BottleSize {
            id,
            size_ml,
            base_price,
        });
        id
    }

    /// Associate a product with a note at the given strength.
    pub fn link_note(&mut self, product_id: Uuid, note_id: Uuid, strength: i32) {
        self.product_notes
            .retain(|row| !(row.product_id == product_id && row.note_id == note_id));
        self.product_notes.push(ProductNoteRow {
            product_id,
            note_id,
            strength,
        });
    }

    /// Associate a product with an inspiration at the given similarity.
    pub fn link_inspiration(&mut self, product_id: Uuid, inspiration_id: Uuid, similarity: f64) {
        self.product_inspirations.retain(|row| {
            !(row.product_id == product_id && row.inspiration_id == inspiration_id)
        });
        self.product_inspirations.push(ProductInspirationRow {
            product_id,
            inspiration_id,
            similarity_score: similarity,
        });
    }

    /// Build the immutable catalog, hydrating product views and computing
    /// lookup indexes.
    pub fn build(self) -> MemoryCatalog {
        let notes_by_id: HashMap<Uuid, Note> =
            self.notes.iter().map(|n| (n.id, n.clone())).collect();
        let inspirations_by_id: HashMap<Uuid, Inspiration> = self
            .inspirations
            .iter()
            .map(|i| (i.id, i.clone()))
            .collect();

        // Hydrate products with their note and inspiration views.
        let mut products: Vec<Product> = self.products.clone();
        for product in products.iter_mut() {
            for row in self.product_notes.iter() {
                if row.product_id != product.id {
                    continue;
                }
                if let Some(note) = notes_by_id.get(&row.note_id) {
                    product.notes.push(ProductNote {
                        note: note.clone(),
                        strength: row.strength,
                    });
                }
            }
            for row in self.product_inspirations.iter() {
                if row.product_id != product.id {
                    continue;
                }
                if let Some(inspiration) = inspirations_by_id.get(&row.inspiration_id) {
                    product.inspirations.push(ProductInspirationRef {
                        inspiration: inspiration.clone(),
                        similarity_score: row.similarity_score,
                    });
                }
            }
            product
                .inspirations
                .sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        }

        let products_by_id: HashMap<Uuid, Product> =
            products.iter().map(|p| (p.id, p.clone())).collect();

        let note_id_by_lower_name: HashMap<String, Uuid> = self
            .notes
            .iter()
            .map(|n| (n.name.to_lowercase(), n.id))
            .collect();

        // Association rows restricted to active products, indexed by note.
        let mut associations_by_note: HashMap<Uuid, Vec<NoteAssociation>> = HashMap::new();
        for row in self.product_notes.iter() {
            let active = products_by_id
                .get(&row.product_id)
                .is_some_and(|p| p.is_active);
            if !active {
                continue;
            }
            associations_by_note
                .entry(row.note_id)
                .or_default()
                .push(NoteAssociation {
                    product_id: row.product_id,
                    note_id: row.note_id,
                    strength: row.strength,
                });
        }

        // Inspiration scan entries with active product links, similarity
        // descending.
        let mut inspiration_scan: Vec<InspirationWithProducts> = self
            .inspirations
            .iter()
            .map(|inspiration| {
                let mut linked: Vec<LinkedProduct> = self
                    .product_inspirations
                    .iter()
                    .filter(|row| row.inspiration_id == inspiration.id)
                    .filter_map(|row| {
                        products_by_id
                            .get(&row.product_id)
                            .filter(|p| p.is_active)
                            .map(|p| LinkedProduct {
                                product: p.clone(),
                                similarity_score: row.similarity_score,
                            })
                    })
                    .collect();
                linked.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
                InspirationWithProducts {
                    inspiration: inspiration.clone(),
                    products: linked,
                }
            })
            .collect();
        inspiration_scan.sort_by(|a, b| a.inspiration.display_name.cmp(&b.inspiration.display_name));

        let mut sorted_notes = self.notes.clone();
        sorted_notes.sort_by(|a, b| a.name.cmp(&b.name));

        let mut bottle_sizes = self.bottle_sizes.clone();
        bottle_sizes.sort_by_key(|size| size.size_ml);

        debug!(
            note_count = sorted_notes.len(),
            product_count = products.len(),
            inspiration_count = inspiration_scan.len(),
            "Catalog snapshot built"
        );

        MemoryCatalog {
            inner: Arc::new(SnapshotIndexes {
                notes: sorted_notes,
                note_id_by_lower_name,
                products_by_id,
                associations_by_note,
                inspiration_scan,
                bottle_sizes,
            }),
        }
    }
}

struct SnapshotIndexes {
    notes: Vec<Note>,
    note_id_by_lower_name: HashMap<String, Uuid>,
    products_by_id: HashMap<Uuid, Product>,
    associations_by_note: HashMap<Uuid, Vec<NoteAssociation>>,
    inspiration_scan: Vec<InspirationWithProducts>,
    bottle_sizes: Vec<BottleSize>,
}

/// Immutable in-memory catalog. Cheap to clone; all clones share the same
/// snapshot.
#[derive(Clone)]
pub struct MemoryCatalog {
    inner: Arc<SnapshotIndexes>,
}

impl MemoryCatalog {
    /// Convenience constructor for an empty catalog.
    pub fn empty() -> Self {
        CatalogBuilder::new().build()
    }

    fn active_products_sorted(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .inner
            .products_by_id
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

/// Helper for constructing an `Inspiration` with a fresh id and empty lists.
pub fn inspiration(display_name: &str, gender_profile: GenderProfile) -> Inspiration {
    Inspiration {
        id: Uuid::new_v4(),
        display_name: display_name.to_string(),
        searchable_aliases: Vec::new(),
        gender_profile,
        top_notes: Vec::new(),
        middle_notes: Vec::new(),
        base_notes: Vec::new(),
        main_accords: Vec::new(),
        mood_tags: Vec::new(),
        intensity: 3,
    }
}

#[async_trait]
impl CatalogReader for MemoryCatalog {
    async fn notes_by_names(&self, names: &[String]) -> Result<Vec<Note>> {
        let mut seen = std::collections::HashSet::new();
        let mut found = Vec::new();
        for name in names {
            if let Some(id) = self.inner.note_id_by_lower_name.get(&name.to_lowercase()) {
                if seen.insert(*id) {
                    if let Some(note) = self.inner.notes.iter().find(|n| n.id == *id) {
                        found.push(note.clone());
                    }
                }
            }
        }
        Ok(found)
    }

    async fn list_notes(&self, category: Option<NoteCategory>) -> Result<Vec<Note>> {
        Ok(self
            .inner
            .notes
            .iter()
            .filter(|n| category.is_none_or(|c| n.category == c))
            .cloned()
            .collect())
    }

    async fn note_associations(&self, note_ids: &[Uuid]) -> Result<Vec<NoteAssociation>> {
        let mut rows = Vec::new();
        for note_id in note_ids {
            if let Some(assocs) = self.inner.associations_by_note.get(note_id) {
                rows.extend(assocs.iter().copied());
            }
        }
        Ok(rows)
    }

    async fn list_inspirations(&self) -> Result<Vec<InspirationWithProducts>> {
        Ok(self.inner.inspiration_scan.clone())
    }

    async fn products_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.inner.products_by_id.get(id))
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.active_products_sorted())
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        Ok(self
            .inner
            .products_by_id
            .values()
            .find(|p| p.is_active && p.slug == slug)
            .cloned())
    }

    async fn list_bottle_sizes(&self) -> Result<Vec<BottleSize>> {
        Ok(self.inner.bottle_sizes.clone())
    }

    async fn bottle_size(&self, id: Uuid) -> Result<Option<BottleSize>> {
        Ok(self
            .inner
            .bottle_sizes
            .iter()
            .find(|size| size.id == id)
            .cloned())
    }
}
