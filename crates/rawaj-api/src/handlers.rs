//! HTTP handlers for the Rawaj storefront API.
//!
//! Each handler is a thin translation layer: extract, call the engine or
//! catalog, wrap the result. Status-code mapping lives in [`crate::error`].

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rawaj_core::{
    BlendSelection, BottleSize, Note, NoteCategory, NoteMatchRequest, Product, ProductFilter,
    RankedPerfume, SearchResults,
};
use rust_decimal::Decimal;

use crate::{ApiError, ApiJson, AppState};

#[derive(Debug, Serialize)]
pub struct PerfumesResponse {
    pub perfumes: Vec<RankedPerfume>,
}

#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Bottle size as presented to the storefront, with a display label like
/// "50ml" instead of the raw millilitre count.
#[derive(Debug, Serialize)]
pub struct BottleSizeView {
    pub id: Uuid,
    pub size: String,
    pub price: Decimal,
}

impl From<BottleSize> for BottleSizeView {
    fn from(size: BottleSize) -> Self {
        Self {
            id: size.id,
            size: format!("{}ml", size.size_ml),
            price: size.base_price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BottleSizesResponse {
    pub sizes: Vec<BottleSizeView>,
}

#[derive(Debug, Serialize)]
pub struct BlendQuoteResponse {
    pub price: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NotesQuery {
    pub category: Option<NoteCategory>,
}

/// Recommend perfumes for a set of note names.
///
/// # Request Body
/// `{ "notes": ["Rose", "Vanilla"], "genderProfile": "MIXED" }`
///
/// # Returns
/// - 200 OK with `{ "perfumes": [...] }`, match score descending
/// - 400 Bad Request when the note list is empty or missing
pub async fn recommend_perfumes(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NoteMatchRequest>,
) -> Result<Json<PerfumesResponse>, ApiError> {
    let perfumes = state.engine.recommend(&request).await?;
    Ok(Json(PerfumesResponse { perfumes }))
}

/// Free-text search across products and inspirations.
///
/// # Query Parameters
/// - `q`: search term; blank or missing yields empty result sets
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let results = state.engine.search(query.q.as_deref().unwrap_or("")).await?;
    Ok(Json(results))
}

/// List all active products, name ascending.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state.catalog.list_products().await?;
    Ok(Json(ProductsResponse { products }))
}

/// Filter active products by catalog criteria.
///
/// # Query Parameters
/// - `gender`, `noteCategory`, `noteId`, `mood`, `intensity`, `minPrice`,
///   `maxPrice`, `search` - all optional; invalid enum or number values
///   reject with 400 before the handler runs
pub async fn filter_products(
    State(state): State<AppState>,
    Query(criteria): Query<ProductFilter>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let products = state.engine.filter(&criteria).await?;
    Ok(Json(ProductsResponse { products }))
}

/// Get a single active product by slug.
///
/// # Returns
/// - 200 OK with the product
/// - 404 Not Found when the slug is unknown or the product is inactive
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog
        .product_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product '{}' not found", slug)))?;
    Ok(Json(product))
}

/// List notes, optionally restricted to one category, name ascending.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> Result<Json<NotesResponse>, ApiError> {
    let notes = state.catalog.list_notes(query.category).await?;
    Ok(Json(NotesResponse { notes }))
}

/// List bottle sizes, size ascending.
pub async fn list_bottle_sizes(
    State(state): State<AppState>,
) -> Result<Json<BottleSizesResponse>, ApiError> {
    let sizes = state.catalog.list_bottle_sizes().await?;
    Ok(Json(BottleSizesResponse {
        sizes: sizes.into_iter().map(BottleSizeView::from).collect(),
    }))
}

/// Validate and price a custom blend selection.
///
/// # Returns
/// - 200 OK with `{ "price": ... }`
/// - 400 Bad Request with the full violation list
/// - 404 Not Found when the bottle size id is unknown
pub async fn quote_blend(
    State(state): State<AppState>,
    ApiJson(selection): ApiJson<BlendSelection>,
) -> Result<Json<BlendQuoteResponse>, ApiError> {
    let price = state.engine.quote_blend(&selection).await?;
    Ok(Json(BlendQuoteResponse { price }))
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
