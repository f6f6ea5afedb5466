//! Structured logging field name constants for Rawaj.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-item iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "api", "match", "catalog"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "match_engine", "note_scorer", "memory_catalog"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "recommend", "search", "filter", "quote_blend"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Product UUID being operated on.
pub const PRODUCT_ID: &str = "product_id";

/// Search query text.
pub const QUERY: &str = "query";

/// Number of note names supplied by the caller.
pub const NOTE_COUNT: &str = "note_count";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of results returned by an operation.
pub const RESULT_COUNT: &str = "result_count";

/// Number of input note names that resolved to catalog notes.
pub const RESOLVED_NOTES: &str = "resolved_notes";

/// Number of inspirations whose note lists matched the input.
pub const INSPIRATION_HITS: &str = "inspiration_hits";

/// Number of products that received the inspiration boost.
pub const BOOSTED_PRODUCTS: &str = "boosted_products";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
