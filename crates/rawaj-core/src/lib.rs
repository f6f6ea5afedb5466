//! # rawaj-core
//!
//! Core types, traits, and abstractions for the Rawaj match engine.
//!
//! This crate provides the catalog entities, the wire request/response
//! types, the error taxonomy, and the `CatalogReader` trait that other
//! rawaj crates depend on.

pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::CatalogReader;
