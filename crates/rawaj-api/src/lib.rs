//! rawaj-api - HTTP API server for the Rawaj fragrance matcher.
//!
//! Thin axum layer over [`rawaj_match::MatchEngine`]. Handlers translate
//! HTTP requests into engine calls and map `rawaj_core::Error` onto status
//! codes; no matching logic lives here.

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use rawaj_core::CatalogReader;
use rawaj_match::MatchEngine;

pub mod error;
pub mod extract;
pub mod handlers;

pub use error::ApiError;
pub use extract::ApiJson;

/// Shared application state. Cheap to clone; the engine and catalog are
/// both handles over shared immutable data.
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
    pub catalog: Arc<dyn CatalogReader>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
        Self {
            engine: MatchEngine::new(catalog.clone()),
            catalog,
        }
    }
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/perfumes", post(handlers::recommend_perfumes))
        .route("/api/search", get(handlers::search))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/filter", get(handlers::filter_products))
        .route("/api/products/:slug", get(handlers::get_product))
        .route("/api/notes", get(handlers::list_notes))
        .route("/api/bottle-sizes", get(handlers::list_bottle_sizes))
        .route("/api/blends/quote", post(handlers::quote_blend))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
        )
        .with_state(state)
}
