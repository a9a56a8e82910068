//! File-backed Catalog Store
//!
//! The store owns the full product list persisted as a pretty-printed JSON
//! array. Every operation reads the whole file, mutates in memory, and writes
//! the whole file back; there is no locking, last writer wins.

use super::errors::CatalogError;
use super::helpers::{apply_patch, first_missing_field, next_product_id};
use super::models::{Product, ProductDraft, ProductPatch};
use std::path::{Path, PathBuf};

/// Data-access layer over the catalog file.
pub struct CatalogStore {
    /// Path to the JSON catalog file.
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store over the given catalog file. The file does not need
    /// to exist yet; a missing file reads as an empty catalog.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full catalog. A missing or unparseable file degrades to an
    /// empty list; no error is surfaced.
    pub async fn list(&self) -> Vec<Product> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) => {
                tracing::debug!("catalog read failed ({err}), treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(products) => products,
            Err(err) => {
                tracing::debug!("catalog parse failed ({err}), treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns the record with the given id, or `None` when absent.
    pub async fn get_by_id(&self, id: u64) -> Option<Product> {
        self.list().await.into_iter().find(|p| p.id == id)
    }

    /// Validates the draft, assigns the next id, appends the record and
    /// persists the full list. Fails naming the first missing required field.
    pub async fn add(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        if let Some(field) = first_missing_field(&draft) {
            return Err(CatalogError::MissingField(field));
        }

        let mut products = self.list().await;
        let product = draft.into_product(next_product_id(&products));
        products.push(product.clone());
        self.persist(&products).await?;

        Ok(product)
    }

    /// Merges the patch into the record with the given id and persists.
    /// Fails with `NotFound` when the id is absent.
    pub async fn update(&self, id: u64, patch: ProductPatch) -> Result<Product, CatalogError> {
        let mut products = self.list().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        apply_patch(product, patch);
        let updated = product.clone();

        self.persist(&products).await?;
        Ok(updated)
    }

    /// Deletes the record with the given id and persists. Fails with
    /// `NotFound` when the id is absent.
    pub async fn remove(&self, id: u64) -> Result<(), CatalogError> {
        let mut products = self.list().await;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        products.remove(index);

        self.persist(&products).await
    }

    /// Serializes the list as pretty-printed JSON (2-space indent) and
    /// overwrites the catalog file.
    pub async fn persist(&self, products: &[Product]) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(products)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(title: &str, code: &str) -> ProductDraft {
        ProductDraft {
            title: title.into(),
            description: "test product".into(),
            price: 100.0,
            thumbnail: "Sin imagen".into(),
            code: code.into(),
            stock: 10,
        }
    }

    fn test_store(dir: &TempDir) -> CatalogStore {
        CatalogStore::new(dir.path().join("productos.json"))
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        tokio::fs::write(store.path(), "not json {").await.unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn add_assigns_incrementing_ids() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let first = store.add(draft("One", "a1")).await.unwrap();
        let second = store.add(draft("Two", "b2")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        // Ids keep growing from the max, even after a removal.
        store.remove(1).await.unwrap();
        let third = store.add(draft("Three", "c3")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn add_rejects_missing_field_by_name() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let mut incomplete = draft("One", "a1");
        incomplete.thumbnail = String::new();
        let err = store.add(incomplete).await.unwrap_err();
        assert!(matches!(err, CatalogError::MissingField("thumbnail")));

        // Nothing was persisted.
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn update_merges_without_touching_other_fields() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.add(draft("One", "a1")).await.unwrap();

        let updated = store
            .update(
                1,
                ProductPatch {
                    price: Some(250.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.price, 250.0);
        assert_eq!(updated.title, "One");
        assert_eq!(updated.code, "a1");

        let reloaded = store.get_by_id(1).await.unwrap();
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = store.update(42, ProductPatch::default()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(42)));
    }

    #[tokio::test]
    async fn remove_shrinks_list_by_one() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.add(draft("One", "a1")).await.unwrap();
        store.add(draft("Two", "b2")).await.unwrap();

        store.remove(1).await.unwrap();
        let products = store.list().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 2);

        let err = store.remove(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(1)));
    }

    #[tokio::test]
    async fn persist_writes_two_space_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.add(draft("One", "a1")).await.unwrap();

        let raw = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\n    \"title\": \"One\""));
    }
}
