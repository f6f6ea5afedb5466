//! Error types for the Rawaj match engine.

use thiserror::Error;

/// Result type alias using Rawaj's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Rawaj operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing required input. Carries one message per
    /// violation so callers can report all of them at once.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Product not found or inactive
    #[error("Product not found: {0}")]
    ProductNotFound(uuid::Uuid),

    /// Bottle size not found
    #[error("Bottle size not found: {0}")]
    BottleSizeNotFound(uuid::Uuid),

    /// Catalog read failed (upstream/storage failure, propagated untouched)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Build a validation error from a single violation.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(vec![msg.into()])
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation(vec![
            "notes must not be empty".to_string(),
            "intensity must be 1-5".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: notes must not be empty; intensity must be 1-5"
        );
    }

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("test resource".to_string());
        assert_eq!(err.to_string(), "Not found: test resource");
    }

    #[test]
    fn test_error_display_product_not_found() {
        let id = Uuid::nil();
        let err = Error::ProductNotFound(id);
        assert_eq!(err.to_string(), format!("Product not found: {}", id));
    }

    #[test]
    fn test_error_display_bottle_size_not_found() {
        let id = Uuid::new_v4();
        let err = Error::BottleSizeNotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_error_display_catalog() {
        let err = Error::Catalog("snapshot unavailable".to_string());
        assert_eq!(err.to_string(), "Catalog error: snapshot unavailable");
    }

    #[test]
    fn test_error_display_internal() {
        let err = Error::Internal("unexpected state".to_string());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_validation_helper_single_violation() {
        let err = Error::validation("q must not be blank");
        match err {
            Error::Validation(violations) => {
                assert_eq!(violations, vec!["q must not be blank".to_string()]);
            }
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_error_debug_format() {
        let err = Error::NotFound("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("NotFound"));
    }
}
