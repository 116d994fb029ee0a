use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, LIST_LIMIT, Product, ProductSummary, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for the products resource.
///
/// Handlers hand it validated input; it owns the list limit and the
/// not-found mapping and otherwise passes through to the repository.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List up to 50 products ordered by ascending id, timestamps excluded
    pub async fn list_products(&self) -> ProductResult<Vec<ProductSummary>> {
        let products = self.repository.list(LIST_LIMIT).await?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i64) -> ProductResult<Product> {
        let id = narrow_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Overwrite the mutable fields of a product (full update)
    pub async fn update_product(&self, id: i64, input: UpdateProduct) -> ProductResult<Product> {
        let id = narrow_id(id)?;
        self.repository.update(id, input).await
    }

    /// Flip the stored availability; the request body plays no part
    pub async fn toggle_availability(&self, id: i64) -> ProductResult<Product> {
        let id = narrow_id(id)?;
        self.repository.toggle_availability(id).await
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i64) -> ProductResult<()> {
        let id = narrow_id(id)?;
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound);
        }

        Ok(())
    }
}

// Path ids parse as i64; anything outside the key range cannot match a row.
fn narrow_id(id: i64) -> ProductResult<i32> {
    i32::try_from(id).map_err(|_| ProductError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn sample_product(id: i32) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "mouse".to_string(),
            price: 40.0,
            availability: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_maps_to_summaries_with_fixed_limit() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(LIST_LIMIT))
            .returning(|_| Ok(vec![sample_product(1), sample_product(2)]));

        let service = ProductService::new(mock_repo);
        let summaries = service.list_products().await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(20000))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(20000).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_out_of_range_id_skips_repository() {
        // No expectations set: any repository call would panic the test
        let mock_repo = MockProductRepository::new();

        let service = ProductService::new(mock_repo);
        let result = service.get_product(i64::from(i32::MAX) + 1).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(9999))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(9999).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_existing_product_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_toggle_passes_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_toggle_availability()
            .with(eq(1))
            .returning(|_| {
                let mut product = sample_product(1);
                product.availability = false;
                Ok(product)
            });

        let service = ProductService::new(mock_repo);
        let product = service.toggle_availability(1).await.unwrap();

        assert!(!product.availability);
    }
}
