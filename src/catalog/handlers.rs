//! REST API handlers for catalog read operations
//!
//! This module implements the two read-only HTTP endpoints over the store.
//! Write operations go through the store directly; no write endpoints are
//! exposed in this snapshot.

use super::{errors::CatalogError, models::Product, state::SharedState};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Creates routes for catalog read operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:pid", get(get_product))
}

/// Query parameters for the product listing.
///
/// `limit` is kept as a raw string so an unparseable value falls back to the
/// full list instead of a 400 rejection.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
}

/// Endpoint: GET /products?limit=N
/// Returns the full catalog, or the first N entries when a parseable limit
/// is given.
async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let mut products = state.store.list().await;

    if let Some(limit) = query.limit.as_deref().and_then(|v| v.parse().ok()) {
        products.truncate(limit);
    }

    Json(products)
}

/// Endpoint: GET /products/:pid
/// Returns the matching record, or 404 with a plain-text body.
async fn get_product(
    State(state): State<SharedState>,
    Path(pid): Path<u64>,
) -> Result<Json<Product>, CatalogError> {
    state
        .store
        .get_by_id(pid)
        .await
        .map(Json)
        .ok_or(CatalogError::NotFound(pid))
}
