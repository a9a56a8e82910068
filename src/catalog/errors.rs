//! Catalog error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by the catalog store.
///
/// Validation (`MissingField`) and lookup (`NotFound`) failures are distinct
/// from persistence failures so the façade can map them to different status
/// codes.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required field was empty or zero at creation time.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// No record with the given id exists in the catalog.
    #[error("product with id {0} not found")]
    NotFound(u64),

    #[error("catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "Product not found").into_response()
            }
            other => {
                tracing::error!("catalog failure: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
