//! Product Catalog Domain Module
//!
//! This module contains all catalog business logic, including:
//! - Domain models (Product, drafts, patches)
//! - The file-backed catalog store
//! - Business logic helpers (id assignment, validation, patch merging)
//! - Application state management
//! - REST API handlers

pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use errors::CatalogError;
pub use handlers::routes;
pub use models::{Product, ProductDraft, ProductPatch};
pub use state::{AppState, SharedState};
pub use store::CatalogStore;
