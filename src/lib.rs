//! Product Catalog Library
//!
//! This library provides the core functionality for a product catalog service
//! backed by a flat JSON file.

// Domain modules
pub mod catalog;

// Infrastructure
pub mod router;
