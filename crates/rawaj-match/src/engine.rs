//! The match engine: orchestrates catalog reads and the pure scoring,
//! matching, and ranking passes.
//!
//! Every operation reads the full set of relevant catalog data before
//! scoring begins and computes over that point-in-time snapshot. A failed
//! catalog read aborts the whole operation; partial results are never
//! returned as if complete.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use rawaj_core::{
    BlendSelection, CatalogReader, Error, InspirationMatch, NoteMatchRequest, Product,
    ProductFilter, RankedPerfume, Result, SearchResults,
};

use crate::filter;
use crate::inspiration_match::{
    apply_boost, boosted_product_ids, matching_inspirations,
};
use crate::note_match::score_associations;
use crate::ranking::rank_products;
use crate::text_match::{
    inspiration_matches, merge_product_lists, product_matches, DIRECT_MATCH_LIMIT,
    LINKED_MATCH_LIMIT,
};

/// Relevance engine over a read-only catalog.
///
/// Stateless between invocations; safe to share and call concurrently.
#[derive(Clone)]
pub struct MatchEngine {
    catalog: Arc<dyn CatalogReader>,
}

impl MatchEngine {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self { catalog }
    }

    /// Rank active products against a set of selected note names.
    ///
    /// Unknown note names are silently dropped. Products accumulate the
    /// strength of every association to a resolved note, plus a single +5
    /// when any matching inspiration links to them. Empty scores produce
    /// an empty list, not an error.
    #[instrument(skip(self, request), fields(
        subsystem = "match",
        component = "match_engine",
        op = "recommend",
        note_count = request.notes.len(),
    ))]
    pub async fn recommend(&self, request: &NoteMatchRequest) -> Result<Vec<RankedPerfume>> {
        if request.notes.is_empty() {
            return Err(Error::validation("notes must not be empty"));
        }

        let start = Instant::now();

        let resolved = self.catalog.notes_by_names(&request.notes).await?;
        let note_ids: Vec<Uuid> = resolved.iter().map(|n| n.id).collect();
        debug!(resolved_notes = note_ids.len(), "Note names resolved");

        let mut scores: HashMap<Uuid, i64> = if note_ids.is_empty() {
            HashMap::new()
        } else {
            let associations = self.catalog.note_associations(&note_ids).await?;
            score_associations(&associations)
        };

        let scan = self.catalog.list_inspirations().await?;
        let matching = matching_inspirations(&request.notes, &scan);
        let boosted = boosted_product_ids(&matching);
        debug!(
            inspiration_hits = matching.len(),
            boosted_products = boosted.len(),
            "Inspiration note lists matched"
        );
        apply_boost(&mut scores, &boosted);

        if scores.is_empty() {
            debug!("No product matched any input note");
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = scores.keys().copied().collect();
        let products = self.catalog.products_by_ids(&ids).await?;
        let ranked = rank_products(products, &scores);

        info!(
            result_count = ranked.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Note match complete"
        );
        Ok(ranked)
    }

    /// Free-text search over products and inspiration references.
    ///
    /// Blank queries yield empty result sets. Direct product matches come
    /// first (name ascending, capped), then products linked to matching
    /// inspirations (similarity descending, capped), de-duplicated by id.
    #[instrument(skip(self), fields(
        subsystem = "match",
        component = "match_engine",
        op = "search",
        query = %query,
    ))]
    pub async fn search(&self, query: &str) -> Result<SearchResults> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Ok(SearchResults {
                products: Vec::new(),
                inspirations: Vec::new(),
                has_inspiration_match: false,
            });
        }

        let start = Instant::now();

        let direct: Vec<Product> = self
            .catalog
            .list_products()
            .await?
            .into_iter()
            .filter(|p| product_matches(p, &term))
            .take(DIRECT_MATCH_LIMIT)
            .collect();

        let scan = self.catalog.list_inspirations().await?;
        let matching: Vec<_> = scan
            .iter()
            .filter(|entry| inspiration_matches(&entry.inspiration, &term))
            .collect();

        // All products linked to any matching inspiration, best similarity
        // first across inspirations.
        let mut linked_pairs: Vec<(f64, Product)> = matching
            .iter()
            .flat_map(|entry| {
                entry
                    .products
                    .iter()
                    .map(|link| (link.similarity_score, link.product.clone()))
            })
            .collect();
        linked_pairs.sort_by(|a, b| b.0.total_cmp(&a.0));
        let linked: Vec<Product> = linked_pairs
            .into_iter()
            .take(LINKED_MATCH_LIMIT)
            .map(|(_, product)| product)
            .collect();

        let has_inspiration_match = !matching.is_empty();
        let inspirations: Vec<InspirationMatch> = matching
            .into_iter()
            .map(|entry| InspirationMatch {
                id: entry.inspiration.id,
                display_name: entry.inspiration.display_name.clone(),
                matched_products: entry.products.clone(),
            })
            .collect();

        let products = merge_product_lists(direct, linked);

        info!(
            result_count = products.len(),
            inspiration_hits = inspirations.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Text search complete"
        );
        Ok(SearchResults {
            products,
            inspirations,
            has_inspiration_match,
        })
    }

    /// Filter the active catalog by browse criteria, name ascending.
    #[instrument(skip(self, criteria), fields(
        subsystem = "match",
        component = "match_engine",
        op = "filter",
    ))]
    pub async fn filter(&self, criteria: &ProductFilter) -> Result<Vec<Product>> {
        let start = Instant::now();

        let mut products = self.catalog.list_products().await?;
        products.retain(|product| filter::matches(product, criteria));

        info!(
            result_count = products.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Catalog filter complete"
        );
        Ok(products)
    }

    /// Validate a custom-blend selection and quote its price.
    ///
    /// Violations reject the whole selection; an unknown bottle size is a
    /// distinct not-found signal, never conflated with validation.
    #[instrument(skip(self, selection), fields(
        subsystem = "match",
        component = "match_engine",
        op = "quote_blend",
    ))]
    pub async fn quote_blend(&self, selection: &BlendSelection) -> Result<Decimal> {
        let violations = selection.validate();
        if !violations.is_empty() {
            return Err(Error::Validation(violations));
        }

        let bottle = self
            .catalog
            .bottle_size(selection.bottle_size_id)
            .await?
            .ok_or(Error::BottleSizeNotFound(selection.bottle_size_id))?;

        debug!(size_ml = bottle.size_ml, "Blend priced at bottle base price");
        Ok(bottle.base_price)
    }
}
