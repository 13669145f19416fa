//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductValidator};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Every write is validated before it reaches the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    validator: Arc<ProductValidator>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R, validator: ProductValidator) -> Self {
        Self {
            repository: Arc::new(repository),
            validator: Arc::new(validator),
        }
    }

    /// List all products in insertion order
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u64) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Validate and store a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        self.validate(&input)?;
        self.repository.create(input).await
    }

    /// Validate and replace an existing product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn update_product(&self, id: u64, input: ProductInput) -> ProductResult<Product> {
        self.validate(&input)?;
        self.repository.update(id, input).await
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }

    /// Count stored products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> ProductResult<usize> {
        self.repository.count().await
    }

    fn validate(&self, input: &ProductInput) -> ProductResult<()> {
        self.validator.validate(input).map_err(|errors| {
            tracing::debug!(violations = %errors, "Rejected product input");
            ProductError::Validation(errors)
        })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            validator: Arc::clone(&self.validator),
        }
    }
}
