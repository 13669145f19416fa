use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::store::{sample_products, ProductStore};

/// Repository trait for Product persistence
///
/// Inputs reaching the repository have already been validated by the
/// service layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>>;

    /// Store a new product under a fresh ID
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Replace an existing product, keeping its ID
    async fn update(&self, id: u64, input: ProductInput) -> ProductResult<Product>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: u64) -> ProductResult<bool>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// Process-local repository. Every operation takes the store lock once, so
/// each call is atomic with respect to the others.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<ProductStore>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// A repository preloaded with the demo catalogue.
    pub fn seeded() -> Self {
        Self::with_store(ProductStore::with_products(sample_products()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.store.read().await.list())
    }

    async fn get_by_id(&self, id: u64) -> ProductResult<Option<Product>> {
        match self.store.read().await.get_by_id(id) {
            Ok(product) => Ok(Some(product)),
            Err(ProductError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let product = self.store.write().await.add(input);

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: u64, input: ProductInput) -> ProductResult<Product> {
        let product = self.store.write().await.update(id, input)?;

        tracing::info!(product_id = id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: u64) -> ProductResult<bool> {
        match self.store.write().await.delete(id) {
            Ok(()) => {
                tracing::info!(product_id = id, "Deleted product");
                Ok(true)
            }
            Err(ProductError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.store.read().await.len())
    }
}
