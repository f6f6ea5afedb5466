//! # rawaj-match
//!
//! Fragrance matching and search engine for the Rawaj storefront.
//!
//! This crate provides:
//! - Note-based product scoring (strength-weighted accumulation)
//! - Inspiration note-list matching with a fixed product boost
//! - Free-text search over products and inspiration aliases
//! - Catalog browse filtering
//! - Deterministic ranking and result merge
//!
//! ## Example
//!
//! ```ignore
//! use rawaj_match::MatchEngine;
//! use rawaj_core::NoteMatchRequest;
//!
//! let engine = MatchEngine::new(catalog);
//! let ranked = engine
//!     .recommend(&NoteMatchRequest {
//!         notes: vec!["Rose".into(), "Vanilla".into()],
//!         gender_profile: None,
//!     })
//!     .await?;
//! ```

pub mod engine;
pub mod filter;
pub mod inspiration_match;
pub mod note_match;
pub mod ranking;
pub mod text_match;

// Re-export core types
pub use rawaj_core::*;

pub use engine::MatchEngine;
pub use inspiration_match::{notes_overlap, INSPIRATION_BOOST};
pub use note_match::score_associations;
pub use ranking::rank_products;
pub use text_match::{DIRECT_MATCH_LIMIT, LINKED_MATCH_LIMIT};
