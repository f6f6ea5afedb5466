//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(Vec<String>),
    NotFound(String),
    Internal(rawaj_core::Error),
}

impl From<rawaj_core::Error> for ApiError {
    fn from(err: rawaj_core::Error) -> Self {
        match err {
            rawaj_core::Error::Validation(violations) => ApiError::BadRequest(violations),
            rawaj_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            rawaj_core::Error::ProductNotFound(id) => {
                ApiError::NotFound(format!("Product not found: {}", id))
            }
            rawaj_core::Error::BottleSizeNotFound(id) => {
                ApiError::NotFound(format!("Bottle size not found: {}", id))
            }
            other => ApiError::Internal(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(violations) => {
                let body = Json(serde_json::json!({
                    "error": "Validation failed",
                    "violations": violations,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::NotFound(message) => {
                let body = Json(serde_json::json!({
                    "error": message,
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            // Catalog and serialization failures stay server-side; clients
            // get an opaque 500.
            ApiError::Internal(err) => {
                error!(error = %err, "Internal error serving request");
                let body = Json(serde_json::json!({
                    "error": "Internal server error",
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError =
            rawaj_core::Error::Validation(vec!["notes must not be empty".to_string()]).into();
        assert!(matches!(err, ApiError::BadRequest(ref v) if v.len() == 1));
    }

    #[test]
    fn test_missing_entities_map_to_not_found() {
        let err: ApiError = rawaj_core::Error::BottleSizeNotFound(Uuid::new_v4()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
        let err: ApiError = rawaj_core::Error::ProductNotFound(Uuid::new_v4()).into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_catalog_failure_maps_to_internal() {
        let err: ApiError = rawaj_core::Error::Catalog("connection refused".to_string()).into();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
