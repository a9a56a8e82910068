//! Catalog Business Logic Helpers
//!
//! This module contains the pure functions behind the store: id assignment,
//! required-field validation and patch merging.

use super::models::{Product, ProductDraft, ProductPatch};

/// Returns the id for the next product: max existing id + 1, or 1 when the
/// catalog is empty.
pub fn next_product_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

/// Returns the name of the first required field that is empty or zero, in
/// declaration order, or `None` when the draft is complete.
pub fn first_missing_field(draft: &ProductDraft) -> Option<&'static str> {
    if draft.title.is_empty() {
        Some("title")
    } else if draft.description.is_empty() {
        Some("description")
    } else if draft.price == 0.0 {
        Some("price")
    } else if draft.thumbnail.is_empty() {
        Some("thumbnail")
    } else if draft.code.is_empty() {
        Some("code")
    } else if draft.stock == 0 {
        Some("stock")
    } else {
        None
    }
}

/// Merges the `Some` fields of `patch` into `product`, leaving everything
/// else (the id included) untouched.
///
/// This function mutates `product` in-place.
pub fn apply_patch(product: &mut Product, patch: ProductPatch) {
    if let Some(title) = patch.title {
        product.title = title;
    }
    if let Some(description) = patch.description {
        product.description = description;
    }
    if let Some(price) = patch.price {
        product.price = price;
    }
    if let Some(thumbnail) = patch.thumbnail {
        product.thumbnail = thumbnail;
    }
    if let Some(code) = patch.code {
        product.code = code;
    }
    if let Some(stock) = patch.stock {
        product.stock = stock;
    }
}
