use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; `availability` defaults to true when omitted
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List up to `limit` products ordered by ascending ID
    async fn list(&self, limit: u64) -> ProductResult<Vec<Product>>;

    /// Overwrite the mutable fields of an existing product
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Flip the stored availability of an existing product
    async fn toggle_availability(&self, id: i32) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    // BTreeMap keeps iteration in ascending id order
    rows: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn list(&self, limit: u64) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store.rows.get_mut(&id).ok_or(ProductError::NotFound)?;

        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;
        product.updated_at = Utc::now();

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        let mut store = self.store.write().await;
        let product = store.rows.get_mut(&id).ok_or(ProductError::NotFound)?;

        product.availability = !product.availability;
        product.updated_at = Utc::now();

        tracing::info!(
            product_id = id,
            availability = product.availability,
            "Toggled product availability"
        );
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.rows.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
