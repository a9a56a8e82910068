//! Product Catalog Domain Models
//!
//! This module contains all data structures related to the catalog
//! business domain.

use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A single product record as persisted in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique positive identifier, assigned by the store
    pub id: u64,

    /// Display title of the product
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Unit price
    pub price: f64,

    /// URL (or placeholder) for the product image
    pub thumbnail: String,

    /// Merchant product code
    pub code: String,

    /// Units in stock
    pub stock: u32,
}

/// Input for creating a product: every field except `id` is required and
/// must be non-empty / non-zero.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// Partial update for an existing product. Fields left as `None` are kept
/// unchanged; the id is never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

impl ProductDraft {
    /// Promotes the draft into a full record under the given id.
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}
