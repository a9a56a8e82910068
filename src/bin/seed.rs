//! Seeds the catalog file with demo products.
//!
//! Mirrors the demo data set the service ships with: ten numbered products
//! with increasing price and stock. Run repeatedly it keeps appending with
//! fresh ids.

use catalog_service_rust::catalog::{AppState, ProductDraft};

fn demo_products() -> Vec<ProductDraft> {
    let codes = ["a1", "b2", "c3", "d4", "c5", "d6", "e7", "f8", "g9", "h10"];

    codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let n = (i + 1) as u32;
            ProductDraft {
                title: format!("Producto {}", n),
                description: "Este es un producto de demostración".into(),
                price: f64::from(n) * 100.0,
                thumbnail: "Sin imagen".into(),
                code: (*code).into(),
                stock: n * 10,
            }
        })
        .collect()
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let state = AppState::from_env();

    for draft in demo_products() {
        match state.store.add(draft).await {
            Ok(product) => tracing::info!("seeded product {}: {}", product.id, product.title),
            Err(err) => {
                tracing::error!("seeding failed: {err}");
                std::process::exit(1);
            }
        }
    }

    let catalog = state.store.list().await;
    tracing::info!("catalog now holds {} products", catalog.len());
}

#[cfg(test)]
mod tests {
    use super::demo_products;
    use catalog_service_rust::catalog::helpers::first_missing_field;

    #[test]
    fn demo_products_are_complete_drafts() {
        let drafts = demo_products();
        assert_eq!(drafts.len(), 10);
        for draft in &drafts {
            assert_eq!(first_missing_field(draft), None);
        }
    }
}
