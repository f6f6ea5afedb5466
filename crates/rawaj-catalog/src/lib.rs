//! # rawaj-catalog
//!
//! Read-only catalog layer for the Rawaj match engine.
//!
//! This crate provides:
//! - An immutable in-memory snapshot store implementing
//!   [`rawaj_core::CatalogReader`]
//! - A builder for assembling snapshots in tests and fixtures
//! - The embedded demo catalog used by the API binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use rawaj_catalog::{CatalogBuilder, MemoryCatalog};
//! use rawaj_core::{CatalogReader, NoteCategory};
//!
//! let mut builder = CatalogBuilder::new();
//! let rose = builder.push_note("Rose", NoteCategory::Middle);
//! let product = builder.push_product("Classic", "classic", "Floral", price, true);
//! builder.link_note(product, rose, 5);
//! let catalog = builder.build();
//! ```

pub mod seed;
pub mod snapshot;

// Re-export core types
pub use rawaj_core::*;

pub use seed::demo_catalog;
pub use snapshot::{inspiration, CatalogBuilder, MemoryCatalog};
