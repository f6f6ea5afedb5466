//! Core traits for Rawaj abstractions.
//!
//! `CatalogReader` is the engine's read-only contract with the catalog
//! store. The engine never mutates catalog data; each invocation reads a
//! point-in-time snapshot and computes over it. A failed read propagates
//! untouched — implementations must not return partial data.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

/// Read-only query interface over the catalog snapshot.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// Look up notes by name set, case-insensitively. Unknown names are
    /// simply absent from the result, never an error.
    async fn notes_by_names(&self, names: &[String]) -> Result<Vec<Note>>;

    /// List notes, optionally restricted to a category, name ascending.
    async fn list_notes(&self, category: Option<NoteCategory>) -> Result<Vec<Note>>;

    /// Product-Note association rows for the given note ids, restricted to
    /// active products.
    async fn note_associations(&self, note_ids: &[Uuid]) -> Result<Vec<NoteAssociation>>;

    /// Full inspiration scan including note-list fields and nested links to
    /// active products, similarity descending within each inspiration.
    async fn list_inspirations(&self) -> Result<Vec<InspirationWithProducts>>;

    /// Hydrated active products by id set. Inactive or missing ids are
    /// silently absent from the result.
    async fn products_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Product>>;

    /// All active products, hydrated, name ascending.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Hydrated active product by slug, if any.
    async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>>;

    /// Bottle sizes, size ascending.
    async fn list_bottle_sizes(&self) -> Result<Vec<BottleSize>>;

    /// Bottle size by id, if any.
    async fn bottle_size(&self, id: Uuid) -> Result<Option<BottleSize>>;
}
